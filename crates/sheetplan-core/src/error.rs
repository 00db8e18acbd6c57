//! Error types for sheetplan-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing ranges or validating operations
///
/// Every variant is detected locally and synchronously; none of them
/// involve I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed cell or column token
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Unparseable range expression, including unknown bare identifiers
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Non-rectangular write payload
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// Sheet name violates length or character rules
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Formula parentheses do not balance
    #[error("Unbalanced formula: {0}")]
    UnbalancedFormula(String),

    /// Any other operation-parameter violation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a new validation error with a message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidReference(_) => "InvalidReference",
            Error::InvalidRange(_) => "InvalidRange",
            Error::MalformedGrid(_) => "MalformedGrid",
            Error::InvalidSheetName(_) => "InvalidSheetName",
            Error::UnbalancedFormula(_) => "UnbalancedFormula",
            Error::Validation(_) => "ValidationError",
        }
    }
}
