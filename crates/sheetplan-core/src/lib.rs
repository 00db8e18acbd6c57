//! # sheetplan-core
//!
//! Core addressing types for the sheetplan request planner.
//!
//! This crate provides the fundamental types used throughout sheetplan:
//! - [`CellRef`] and the column codec ([`column_to_number`], [`number_to_column`])
//! - [`Range`] and [`parse_range`] - A1 range expressions
//! - [`resolve_range`] - Filling in missing bounds and applying size caps
//! - [`ScalarValue`] and [`Grid`] - Values exchanged with a remote sheet
//! - [`CellFormat`] - Formatting an operation may apply
//!
//! ## Example
//!
//! ```rust
//! use sheetplan_core::{parse_range, resolve_range, DataExtent, NamedRangeSet, ResolveLimits};
//!
//! let names = NamedRangeSet::new();
//! let range = parse_range("Data!A1", None, &names).unwrap();
//!
//! // A 3x2 block of values anchored at A1
//! let resolution = resolve_range(&range, Some(DataExtent::new(3, 2)), &ResolveLimits::default());
//! assert_eq!(resolution.range.to_a1_string(), "Data!A1:B3");
//! assert!(resolution.warning.is_none());
//! ```

pub mod cell;
pub mod error;
pub mod named_range;
pub mod range;
pub mod sheet;
pub mod style;

// Re-exports for convenience
pub use cell::{column_to_number, number_to_column, CellRef, DataExtent, Grid, ScalarValue};
pub use error::{Error, Result};
pub use named_range::NamedRangeSet;
pub use range::{
    parse_range, quote_sheet_name, resolve_range, Area, Range, RangeKind, RangeRef, Resolution,
    ResolveLimits, ResolvedRange, TruncationWarning, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS,
};
pub use sheet::{validate_sheet_name, FORBIDDEN_SHEET_NAME_CHARS, MAX_SHEET_NAME_LEN};
pub use style::{CellFormat, Color, HorizontalAlign, NumberFormatKind, VerticalAlign};
