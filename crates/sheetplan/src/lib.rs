//! # sheetplan
//!
//! Spreadsheet addressing and operation planning for a remote spreadsheet
//! API, plus a profiler that describes a sheet's contents.
//!
//! ## Features
//!
//! - Parse A1 expressions: cells, blocks, whole columns and rows,
//!   sheet-qualified and named ranges
//! - Resolve ranges against data sizes with row and column caps
//! - Validate read, write, create-sheet, set-formula and format-cells
//!   operations and translate them into request bodies
//! - Sample a sheet to infer column types, headers and patterns
//! - Read CSV files as sheets (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use sheetplan::prelude::*;
//!
//! let range = parse_range("Data!A1", None, &NamedRangeSet::new()).unwrap();
//! let values = vec![
//!     vec![ScalarValue::from("Region"), ScalarValue::from("Total")],
//!     vec![ScalarValue::from("North"), ScalarValue::from(120)],
//! ];
//!
//! let translation = build_request(
//!     &Operation::write(Some(range), values),
//!     &ResolveLimits::default(),
//! )
//! .unwrap();
//! assert_eq!(translation.request.method(), "valuesUpdate");
//! ```

pub mod config;
pub mod intent;
pub mod planner;
pub mod prelude;

pub use config::{ConfigError, EngineConfig};
pub use intent::OperationIntent;
pub use planner::Planner;

// Re-export core types
pub use sheetplan_core::{
    column_to_number, number_to_column, parse_range, quote_sheet_name, resolve_range,
    validate_sheet_name, Area, CellFormat, CellRef, Color, DataExtent, Error, Grid,
    HorizontalAlign, NamedRangeSet, NumberFormatKind, Range, RangeKind, RangeRef, Resolution,
    ResolveLimits, ResolvedRange, Result, ScalarValue, TruncationWarning, VerticalAlign,
};

// Re-export operations
pub use sheetplan_ops::{
    build_request, normalize_formula, request, Operation, TranslatedRequest, Translation,
};

// Re-export the profiler
pub use sheetplan_profile::{
    plan_windows, profile_sheet, profile_windows, ColumnProfile, ColumnType, PatternFlags,
    ProfileError, ReadError, SampleConfig, SampleGrid, SampledCell, SheetDescriptor, SheetReader,
    SheetSample, Window, WindowPosition,
};

#[cfg(feature = "csv")]
pub use sheetplan_csv::{CsvError, CsvReadOptions, CsvSheet};
