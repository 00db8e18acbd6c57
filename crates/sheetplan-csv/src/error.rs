//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading or querying a CSV sheet
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core error, e.g. an unparseable range
    #[error("Core error: {0}")]
    Core(#[from] sheetplan_core::Error),

    /// The range names another sheet
    #[error("Read error: {0}")]
    Read(#[from] sheetplan_profile::ReadError),

    /// Profiling failed
    #[error("Profile error: {0}")]
    Profile(#[from] sheetplan_profile::ProfileError),
}
