//! # Domain Module
//!
//! Business rules for the medical journey log: child profiles, the records
//! caregivers keep for each child, and caregiver assignment.
//!
//! ## Module Organization
//!
//! - **deletion_service**: Guarded deletion of children and symptoms
//! - **child_service**: Child profile CRUD and the profile overview
//! - **record_service**: Symptoms, notes, milestones and appointments
//! - **caregiver_service**: Caregiver CRUD and caregiver-to-child links
//! - **commands**: Inputs accepted by the services
//! - **validation**: Field rules applied before anything is written
//! - **errors**: Failure taxonomy shared by every service
//!
//! ## Business Rules
//!
//! - A child cannot be deleted while it has symptom records
//! - Deleting a symptom is always allowed
//! - Every child record belongs to a child that existed when it was created
//! - Edits overwrite every editable field of a record

pub mod caregiver_service;
pub mod child_service;
pub mod commands;
pub mod deletion_service;
pub mod errors;
pub mod models;
pub mod record_service;
pub mod validation;

pub use caregiver_service::*;
pub use child_service::*;
pub use deletion_service::*;
pub use errors::*;
pub use record_service::*;
