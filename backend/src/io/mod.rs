//! # IO Module
//!
//! Adapter layer between clients and the domain. It exposes the REST API,
//! converts between wire DTOs and domain types, and maps domain errors onto
//! HTTP status codes.

pub mod rest;
