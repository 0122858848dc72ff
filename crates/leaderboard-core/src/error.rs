//! Error types for the leaderboard

use thiserror::Error;

/// Failure to obtain the level document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The body was not valid JSON or did not have the expected shape
    #[error("Invalid level data: {0}")]
    Parse(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// A score that cannot be displayed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Score is not numeric: {0}")]
    NotNumeric(String),

    #[error("Score is negative: {0}")]
    Negative(f64),

    #[error("Score is not finite")]
    NotFinite,

    #[error("Time is out of range: {0}")]
    OutOfRange(f64),
}

/// A category key outside the fixed set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);
