//! Error types for the resumake library.

use std::io;
use thiserror::Error;

/// Result type alias for resumake operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing, generating, storing,
/// or exporting a resume.
///
/// Nothing here is fatal to a caller: every variant carries a message
/// suitable for direct display, and recoverable causes (rate limits,
/// timeouts) are distinguished so callers can retry.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required form field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The generation backend rejected the configured credentials.
    #[error("Invalid API key. Please check your API key configuration.")]
    AuthFailed,

    /// The generation backend is rate-limiting requests.
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// The generation backend reported an exhausted quota.
    #[error("API quota exceeded. Please check your account.")]
    QuotaExceeded,

    /// The generation request timed out.
    #[error("Request timed out after multiple attempts. Please try again.")]
    Timeout,

    /// Any other generation failure.
    #[error("Failed to generate resume: {0}")]
    Generation(String),

    /// Remote save/load failed for a reason other than an absent document.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The rendered surface is not mounted/captured yet.
    #[error("Resume content not ready")]
    SurfaceNotReady,

    /// An export is already in flight for this pipeline.
    #[error("An export is already in progress")]
    ExportInFlight,

    /// Rasterization or archive packaging failed.
    #[error("Export error: {0}")]
    Export(String),

    /// JSON encoding/decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive writing error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether a caller may reasonably retry the failed operation as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited | Error::Timeout)
    }
}
