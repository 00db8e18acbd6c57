//! The sheet-reading collaborator

use serde::{Deserialize, Serialize};
use sheetplan_core::{ResolvedRange, ScalarValue};
use thiserror::Error;

/// One cell as returned by a sheet read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledCell {
    /// Displayed or computed value
    pub value: ScalarValue,
    /// Formula text when the cell holds one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl SampledCell {
    /// A plain value cell
    pub fn new<V: Into<ScalarValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            formula: None,
        }
    }

    /// A formula cell with its computed value
    pub fn with_formula<V: Into<ScalarValue>, S: Into<String>>(value: V, formula: S) -> Self {
        Self {
            value: value.into(),
            formula: Some(formula.into()),
        }
    }

    /// Whether the cell holds a formula, or a value rendered as one
    pub fn is_formula(&self) -> bool {
        let rendered = |s: &str| s.trim_start().starts_with('=');
        self.formula.as_deref().map_or(false, rendered)
            || self.value.as_text().map_or(false, rendered)
    }
}

impl From<ScalarValue> for SampledCell {
    fn from(value: ScalarValue) -> Self {
        Self::new(value)
    }
}

/// Row-major cells of one window; rows may be shorter than the window
pub type SampleGrid = Vec<Vec<SampledCell>>;

/// Why a window could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ReadError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Reads a block of cells from a sheet
///
/// The profiler only calls this through [`crate::profile_sheet`]. Callers
/// that want to read windows concurrently can read them themselves and hand
/// the results to [`crate::profile_windows`].
pub trait SheetReader {
    /// Read the cells of a bounded, sheet-qualified range
    fn read_window(&self, range: &ResolvedRange) -> Result<SampleGrid, ReadError>;
}

impl<R: SheetReader + ?Sized> SheetReader for &R {
    fn read_window(&self, range: &ResolvedRange) -> Result<SampleGrid, ReadError> {
        (**self).read_window(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_detection() {
        assert!(SampledCell::with_formula(6, "=SUM(A1:A3)").is_formula());
        assert!(SampledCell::new("=A1*2").is_formula());
        assert!(!SampledCell::new("a = b").is_formula());
        assert!(!SampledCell::new(3).is_formula());
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(
            ReadError::PermissionDenied("Data".into()).to_string(),
            "Permission denied: Data"
        );
    }
}
