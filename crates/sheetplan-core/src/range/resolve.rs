//! Range resolution: derive missing bounds and apply size caps

use super::{qualify, Range, RangeRef};
use crate::cell::{number_to_column, CellRef, DataExtent};
use std::fmt;

/// Default cap on resolved rows
pub const DEFAULT_MAX_ROWS: u32 = 1000;

/// Default cap on resolved columns
pub const DEFAULT_MAX_COLUMNS: u32 = 50;

/// Upper bounds applied to every resolved range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolveLimits {
    /// Maximum number of rows a range may span
    pub max_rows: u32,
    /// Maximum number of columns a range may span
    pub max_columns: u32,
}

impl Default for ResolveLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}

impl ResolveLimits {
    /// Create limits with default caps
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row cap
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the column cap
    pub fn with_max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = max_columns;
        self
    }
}

/// The cells a resolved range covers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Area {
    /// Fully bounded block, `start` top-left
    Block { start: CellRef, end: CellRef },
    /// Whole columns; rows stay open
    Columns { first: u32, last: u32 },
    /// Whole rows; columns stay open
    Rows { first: u32, last: u32 },
    /// Named range, bounds known only to the remote spreadsheet
    Named { name: String },
}

/// A range whose bounds have been filled in and capped
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedRange {
    /// Sheet the range belongs to; `None` means the default sheet
    pub sheet: Option<String>,
    /// Covered cells
    pub area: Area,
}

impl ResolvedRange {
    /// Create a block of `extent` cells anchored at `start`
    ///
    /// A zero extent on either axis still covers one cell.
    pub fn block(sheet: Option<String>, start: CellRef, extent: DataExtent) -> Self {
        let end = start.offset(extent.rows.max(1) - 1, extent.columns.max(1) - 1);
        Self {
            sheet,
            area: Area::Block { start, end },
        }
    }

    /// Number of rows and columns when both axes are bounded
    pub fn extent(&self) -> Option<DataExtent> {
        match &self.area {
            Area::Block { start, end } => Some(DataExtent::new(
                end.row - start.row + 1,
                end.column - start.column + 1,
            )),
            _ => None,
        }
    }

    /// Top-left corner of a bounded block
    pub fn start(&self) -> Option<CellRef> {
        match &self.area {
            Area::Block { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Render as A1 text for the remote API
    ///
    /// Single-cell blocks render as one reference (`B2`), not `B2:B2`.
    pub fn to_a1_string(&self) -> String {
        let body = match &self.area {
            Area::Block { start, end } if start == end => start.to_a1_string(),
            Area::Block { start, end } => format!("{}:{}", start, end),
            Area::Columns { first, last } => format!(
                "{}:{}",
                number_to_column(*first).unwrap_or_default(),
                number_to_column(*last).unwrap_or_default()
            ),
            Area::Rows { first, last } => format!("{}:{}", first, last),
            Area::Named { name } => name.clone(),
        };
        qualify(self.sheet.as_deref(), &body)
    }
}

impl fmt::Display for ResolvedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

/// Reported when a range was cut down to the configured caps
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncationWarning {
    /// The range as requested, before capping
    pub requested: String,
    /// The range actually kept
    pub applied: String,
    /// Requested row span, when rows were truncated
    pub requested_rows: Option<u32>,
    /// Requested column span, when columns were truncated
    pub requested_columns: Option<u32>,
    /// Caps in force
    pub limits: ResolveLimits,
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range {} truncated to {}", self.requested, self.applied)?;
        if let Some(rows) = self.requested_rows {
            write!(f, " ({} rows requested, cap {})", rows, self.limits.max_rows)?;
        }
        if let Some(columns) = self.requested_columns {
            write!(
                f,
                " ({} columns requested, cap {})",
                columns, self.limits.max_columns
            )?;
        }
        Ok(())
    }
}

/// Outcome of [`resolve_range`]: always a usable range, maybe with a warning
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// The resolved, capped range
    pub range: ResolvedRange,
    /// Present when the caps cut the range down
    pub warning: Option<TruncationWarning>,
}

/// Fill in missing bounds and apply the caps in `limits`
///
/// - A single cell combined with a data extent becomes a block of that
///   extent anchored at the cell; without an extent it stays one cell.
/// - Bounded ranges keep their explicit bounds.
/// - Full-column and full-row ranges keep their open axis open.
/// - Named ranges pass through untouched.
///
/// Spans over the caps are truncated from the top-left corner, and the
/// result carries a [`TruncationWarning`] rather than failing.
pub fn resolve_range(
    range: &Range,
    extent: Option<DataExtent>,
    limits: &ResolveLimits,
) -> Resolution {
    let sheet = range.sheet.clone();
    let resolved = match range.target.normalized() {
        RangeRef::Cell(cell) => {
            ResolvedRange::block(sheet, cell, extent.unwrap_or(DataExtent::new(1, 1)))
        }
        RangeRef::Bounded { start, end } => ResolvedRange {
            sheet,
            area: Area::Block { start, end },
        },
        RangeRef::Columns { first, last } => ResolvedRange {
            sheet,
            area: Area::Columns { first, last },
        },
        RangeRef::Rows { first, last } => ResolvedRange {
            sheet,
            area: Area::Rows { first, last },
        },
        RangeRef::Named { name } => ResolvedRange {
            sheet,
            area: Area::Named { name },
        },
    };

    apply_limits(resolved, limits)
}

fn apply_limits(resolved: ResolvedRange, limits: &ResolveLimits) -> Resolution {
    let max_rows = limits.max_rows.max(1);
    let max_columns = limits.max_columns.max(1);

    let mut requested_rows = None;
    let mut requested_columns = None;

    let area = match resolved.area.clone() {
        Area::Block { start, mut end } => {
            let rows = end.row - start.row + 1;
            if rows > max_rows {
                requested_rows = Some(rows);
                end.row = start.row + max_rows - 1;
            }
            let columns = end.column - start.column + 1;
            if columns > max_columns {
                requested_columns = Some(columns);
                end.column = start.column + max_columns - 1;
            }
            Area::Block { start, end }
        }
        Area::Columns { first, mut last } => {
            let columns = last - first + 1;
            if columns > max_columns {
                requested_columns = Some(columns);
                last = first + max_columns - 1;
            }
            Area::Columns { first, last }
        }
        Area::Rows { first, mut last } => {
            let rows = last - first + 1;
            if rows > max_rows {
                requested_rows = Some(rows);
                last = first + max_rows - 1;
            }
            Area::Rows { first, last }
        }
        named @ Area::Named { .. } => named,
    };

    if requested_rows.is_none() && requested_columns.is_none() {
        return Resolution {
            range: resolved,
            warning: None,
        };
    }

    let capped = ResolvedRange {
        sheet: resolved.sheet.clone(),
        area,
    };
    let warning = TruncationWarning {
        requested: resolved.to_a1_string(),
        applied: capped.to_a1_string(),
        requested_rows,
        requested_columns,
        limits: ResolveLimits {
            max_rows,
            max_columns,
        },
    };
    tracing::warn!(
        requested = %warning.requested,
        applied = %warning.applied,
        "range truncated to configured cap"
    );

    Resolution {
        range: capped,
        warning: Some(warning),
    }
}
