//! Error types for the Coinmate adapter crate

use thiserror::Error;

/// Adapter-level errors
///
/// Lenient classifiers never produce these; only strict classification,
/// malformed identifiers, out-of-range values and envelope failures do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Exchange error: {0}")]
    Exchange(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Response carried no data")]
    MissingData,
}

pub type AdapterResult<T> = std::result::Result<T, AdapterError>;
