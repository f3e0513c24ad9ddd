use thiserror::Error;

/// Unified error type for the entire pokes-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// A missing strategy entry is not an error; see
/// [`Recommendation::NoRecommendation`](crate::models::strategy::Recommendation).
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Duplicate card: {0} appears twice")]
    DuplicateCard(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    // ── Signup Capture ──────────────────────────────────────────────
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
