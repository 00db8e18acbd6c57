//! Sampling configuration

use serde::{Deserialize, Serialize};

/// Share of a first row's non-empty cells that must be label text for it to be a header
pub const HEADER_TEXT_RATIO: f64 = 0.70;

/// Share of a column's values that must be numeric for a number column
pub const NUMBER_RATIO: f64 = 0.80;

/// Share of a column's values that must be dates for a date column
pub const DATE_RATIO: f64 = 0.60;

/// Share of a column's values that must be booleans for a boolean column
pub const BOOLEAN_RATIO: f64 = 0.80;

/// Sample values kept per column profile
pub const SAMPLES_PER_COLUMN: usize = 3;

pub const DEFAULT_WINDOW_ROWS: u32 = 25;
pub const DEFAULT_WINDOW_COLUMNS: u32 = 20;
pub const DEFAULT_MIDPOINT_THRESHOLD_ROWS: u32 = 200;

/// Options controlling which parts of a sheet are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Rows per window
    pub window_rows: u32,
    /// Columns per window
    pub window_columns: u32,
    /// Sheets with more rows than this also get a window around the middle row
    pub midpoint_threshold_rows: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            window_rows: DEFAULT_WINDOW_ROWS,
            window_columns: DEFAULT_WINDOW_COLUMNS,
            midpoint_threshold_rows: DEFAULT_MIDPOINT_THRESHOLD_ROWS,
        }
    }
}

impl SampleConfig {
    /// Create a config with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window height
    pub fn with_window_rows(mut self, rows: u32) -> Self {
        self.window_rows = rows;
        self
    }

    /// Set the window width
    pub fn with_window_columns(mut self, columns: u32) -> Self {
        self.window_columns = columns;
        self
    }

    /// Set the row count above which a midpoint window is added
    pub fn with_midpoint_threshold_rows(mut self, rows: u32) -> Self {
        self.midpoint_threshold_rows = rows;
        self
    }
}
