//! Scalar cell values and value grids

use std::fmt;

/// A typed scalar as exchanged with the remote spreadsheet
///
/// Serializes untagged, so a grid of values becomes a plain JSON array of
/// arrays of `null`, booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ScalarValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Boolean value (TRUE/FALSE)
    Bool(bool),

    /// Numeric value
    Number(f64),

    /// String value, which may carry formatted numbers or dates
    Text(String),
}

impl ScalarValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        ScalarValue::Text(s.into())
    }

    /// Check if the value is empty
    ///
    /// Whitespace-only text counts as empty, which is how a sheet renders it.
    pub fn is_empty(&self) -> bool {
        match self {
            ScalarValue::Empty => true,
            ScalarValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Empty => write!(f, ""),
            ScalarValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

impl From<i32> for ScalarValue {
    fn from(n: i32) -> Self {
        ScalarValue::Number(n as f64)
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        ScalarValue::Number(n as f64)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Number(n)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::text(s)
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

/// Row-major grid of scalar values
pub type Grid = Vec<Vec<ScalarValue>>;

/// Row and column count of a block of data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataExtent {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
}

impl DataExtent {
    /// Create a new extent
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Extent of a grid, or `None` when its rows differ in length
    ///
    /// An empty grid has a 0×0 extent.
    pub fn of_grid<T>(grid: &[Vec<T>]) -> Option<Self> {
        let columns = grid.first().map(|row| row.len()).unwrap_or(0);
        if grid.iter().any(|row| row.len() != columns) {
            return None;
        }
        Some(Self {
            rows: grid.len() as u32,
            columns: columns as u32,
        })
    }

    /// Check if the extent covers no cells
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl fmt::Display for DataExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_of_grid() {
        let grid: Grid = vec![
            vec![1.into(), 2.into()],
            vec![3.into(), 4.into()],
            vec![5.into(), 6.into()],
        ];
        assert_eq!(DataExtent::of_grid(&grid), Some(DataExtent::new(3, 2)));

        let ragged: Grid = vec![vec![1.into(), 2.into()], vec![3.into()]];
        assert_eq!(DataExtent::of_grid(&ragged), None);

        let empty: Grid = Vec::new();
        assert_eq!(DataExtent::of_grid(&empty), Some(DataExtent::new(0, 0)));
        assert!(DataExtent::new(0, 0).is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(ScalarValue::Empty.is_empty());
        assert!(ScalarValue::text("   ").is_empty());
        assert!(!ScalarValue::text("x").is_empty());
        assert!(!ScalarValue::Number(0.0).is_empty());
        assert!(!ScalarValue::Bool(false).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ScalarValue::Bool(true).to_string(), "TRUE");
        assert_eq!(ScalarValue::Number(2.5).to_string(), "2.5");
        assert_eq!(ScalarValue::text("hi").to_string(), "hi");
        assert_eq!(ScalarValue::Empty.to_string(), "");
    }
}
