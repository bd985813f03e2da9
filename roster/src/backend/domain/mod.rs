//! # Domain Module
//!
//! Contains the business rules of the student roster.
//!
//! ## Module Organization
//!
//! - **models**: the `StudentRecord` entity and input validation
//! - **record_store**: the in-memory roster and its operations
//! - **error**: the error kinds every operation reports
//!
//! ## Business Rules
//!
//! - Roll numbers are unique among students added to the roster
//! - A student's grade always matches their current marks
//! - Name lookups ignore case; deleting by name removes every match
//! - Sorting by marks is stable

pub mod error;
pub mod models;
pub mod record_store;

pub use error::*;
pub use models::student::*;
pub use record_store::*;
