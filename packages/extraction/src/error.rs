//! Typed errors for the extraction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure and map it to their own error surface.

use thiserror::Error;

/// Expected failure modes of a single extraction attempt.
///
/// A page that lacks the markup we know how to read is ordinary control
/// flow for the caller, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No title selector matched, or every match was empty
    #[error("product name not found in page")]
    NameNotFound,

    /// All price strategies exhausted without a parseable amount
    #[error("product price not found in page")]
    PriceNotFound,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
