//! Data model shared by every crate in the workspace.

pub mod condition;
pub mod ids;
pub mod record;
pub mod time;

pub use condition::Condition;
pub use ids::{PersonId, VisitId};
pub use record::{Location, PersonRecord};
pub use time::ObservationTime;
