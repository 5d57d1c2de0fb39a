//! # contact-core
//!
//! Foundation crate for the contact-tracing engine.
//! Defines the record model, identifiers, errors, config, constants and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod records;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ContactConfig;
pub use errors::{ContactError, ContactResult};
pub use models::{Condition, Location, ObservationTime, PersonId, PersonRecord, VisitId};
pub use records::{group_by_person, PersonRecords};
