//! Profiling window planning

use crate::config::SampleConfig;
use serde::{Deserialize, Serialize};
use sheetplan_core::{CellRef, DataExtent, ResolvedRange};

/// What the profiler knows about a sheet before reading it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDescriptor {
    /// Sheet title
    pub title: String,
    /// Rows in use
    pub row_count: u32,
    /// Columns in use
    pub column_count: u32,
}

impl SheetDescriptor {
    pub fn new<S: Into<String>>(title: S, row_count: u32, column_count: u32) -> Self {
        Self {
            title: title.into(),
            row_count,
            column_count,
        }
    }

    /// True when the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.column_count == 0
    }
}

/// Where in the sheet a window sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPosition {
    /// Anchored at `A1`; the only window checked for a header row
    Top,
    /// Centred on the sheet's middle row
    Middle,
}

/// A rectangular block of a sheet to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub position: WindowPosition,
    /// Sheet-qualified block
    pub range: ResolvedRange,
}

impl Window {
    fn new(sheet: &str, position: WindowPosition, start: CellRef, extent: DataExtent) -> Self {
        Self {
            position,
            range: ResolvedRange::block(Some(sheet.to_string()), start, extent),
        }
    }

    /// Top-left cell
    pub fn start(&self) -> CellRef {
        self.range.start().unwrap_or(CellRef::new(1, 1))
    }

    /// Rows and columns covered
    pub fn extent(&self) -> DataExtent {
        self.range.extent().unwrap_or(DataExtent::new(1, 1))
    }
}

/// Choose the windows to sample from a sheet
///
/// Always the top-left block, clamped to the sheet's size. Sheets with more
/// rows than [`SampleConfig::midpoint_threshold_rows`] also get a block of
/// the same size centred on the middle row, placed below the top block. An
/// empty sheet gets no windows.
pub fn plan_windows(descriptor: &SheetDescriptor, config: &SampleConfig) -> Vec<Window> {
    if descriptor.is_empty() {
        return Vec::new();
    }

    let rows = config.window_rows.max(1).min(descriptor.row_count);
    let columns = config.window_columns.max(1).min(descriptor.column_count);
    let extent = DataExtent::new(rows, columns);

    let mut windows = vec![Window::new(
        &descriptor.title,
        WindowPosition::Top,
        CellRef::new(1, 1),
        extent,
    )];

    if descriptor.row_count > config.midpoint_threshold_rows {
        let middle = descriptor.row_count - descriptor.row_count / 2;
        let last_start = descriptor.row_count - rows + 1;
        let start = middle
            .saturating_sub(rows / 2)
            .max(rows + 1)
            .min(last_start);
        if start > rows {
            windows.push(Window::new(
                &descriptor.title,
                WindowPosition::Middle,
                CellRef::new(start, 1),
                extent,
            ));
        }
    }

    tracing::debug!(
        sheet = %descriptor.title,
        windows = windows.len(),
        "planned profiling windows"
    );
    windows
}
