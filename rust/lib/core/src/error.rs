use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified error type shared by every crate in the workspace.
///
/// Each variant maps to a stable error code (see [`error_code`]). The
/// display form is just the message, e.g. `customer '7' not found`.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate id in seed data.
    #[error("{0}")]
    Conflict(String),

    /// Configuration or input is invalid.
    #[error("{0}")]
    Validation(String),

    /// Fixture source could not be read.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error (e.g. malformed fixture JSON).
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Conflict(_) => error_code::ALREADY_EXISTS,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Storage(_) => error_code::STORAGE_ERROR,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// True for the not-found case, so callers can branch without matching.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}
