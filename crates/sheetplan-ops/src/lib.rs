//! # sheetplan-ops
//!
//! Typed spreadsheet operations and their translation into remote API
//! requests.
//!
//! - [`Operation`] - Read, Write, CreateSheet, SetFormula, FormatCells
//! - [`build_request`] - Validate an operation and produce a [`Translation`]
//! - [`request`] - Serializable request bodies
//!
//! ## Example
//!
//! ```rust
//! use sheetplan_core::{CellFormat, Range, ResolveLimits};
//! use sheetplan_ops::{build_request, Operation, TranslatedRequest};
//!
//! let op = Operation::format_cells(
//!     Range::parse("Sheet1!A1:C1").unwrap(),
//!     CellFormat::new().with_bold(true),
//! );
//! let translation = build_request(&op, &ResolveLimits::default()).unwrap();
//! assert!(matches!(translation.request, TranslatedRequest::BatchUpdate(_)));
//! ```

pub mod formula;
pub mod operation;
pub mod request;
pub mod translate;

pub use formula::normalize_formula;
pub use operation::{Operation, DEFAULT_SHEET_COLUMNS, DEFAULT_SHEET_ROWS};
pub use request::{TranslatedRequest, Translation};
pub use translate::build_request;
