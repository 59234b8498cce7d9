//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Every fallible operation of the crate reports one of three classes of failure. None of
/// them produce a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridposError {
    /// Input text does not follow the expected grammar (Maidenhead locator, MGRS string,
    /// degree-minute string).
    #[error("malformed input: {0}")]
    Format(String),
    /// A numeric argument is outside of the range the operation accepts.
    #[error("value out of range: {0}")]
    Range(String),
    /// The position lies in a region the projection does not cover (polar areas).
    #[error("unsupported region: {0}")]
    UnsupportedRegion(String),
}

/// Result type used by the crate.
pub type Result<T> = std::result::Result<T, GridposError>;
