//! ContactErrorCode trait for the reporting boundary.

/// Every error enum implements this to expose a stable code string
/// to whatever layer renders errors (CLI, export, logs).
pub trait ContactErrorCode {
    /// Returns the error code string (e.g., "TRAJECTORY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const TRAJECTORY_ERROR: &str = "TRAJECTORY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
