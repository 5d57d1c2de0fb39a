//! Error types for every stage of the contact-tracing pipeline.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod record_error;
pub mod trajectory_error;

pub use config_error::ConfigError;
pub use error_code::ContactErrorCode;
pub use graph_error::GraphError;
pub use record_error::RecordError;
pub use trajectory_error::TrajectoryError;

/// Top-level error wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ContactErrorCode for ContactError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Trajectory(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type ContactResult<T> = Result<T, ContactError>;
