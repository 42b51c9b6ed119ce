//! # Storage Module
//!
//! SQLite persistence for the medical journey log.
//!
//! - **connection**: pool setup and schema
//! - **entity**: table mapping for each domain model
//! - **repository**: one generic repository covering every entity, plus the
//!   few relation lookups (child symptoms, caregiver assignments)
//!
//! Relations are resolved through foreign-key lookups; no entity holds a
//! reference to another.

pub mod connection;
pub mod entity;
pub mod repository;

pub use connection::DbConnection;
pub use entity::{ChildOwned, Entity};
pub use repository::{Repository, StorageError, StorageResult};
