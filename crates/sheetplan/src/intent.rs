//! String-typed operation intents
//!
//! An [`OperationIntent`] is what a tool-calling layer hands over: the same
//! five operations as [`Operation`], but with ranges still written as A1
//! text. Converting one parses every range against the current sheet and
//! the spreadsheet's named ranges.

use serde::{Deserialize, Serialize};
use sheetplan_core::{parse_range, CellFormat, Grid, NamedRangeSet, Range, Result, ScalarValue};
use sheetplan_ops::{Operation, DEFAULT_SHEET_COLUMNS, DEFAULT_SHEET_ROWS};

/// An operation with unparsed range expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationIntent {
    Read {
        range: String,
    },

    Write {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
        values: Grid,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<Vec<ScalarValue>>,
    },

    CreateSheet {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        row_count: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column_count: Option<u32>,
    },

    SetFormula {
        range: String,
        formula: String,
    },

    FormatCells {
        range: String,
        format: CellFormat,
    },
}

impl OperationIntent {
    /// Operation name, matching [`Operation::name`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Write { .. } => "write",
            Self::CreateSheet { .. } => "create_sheet",
            Self::SetFormula { .. } => "set_formula",
            Self::FormatCells { .. } => "format_cells",
        }
    }

    /// Parse the intent's ranges and build the typed operation
    ///
    /// A write without a range is anchored at `A1` of `current_sheet`.
    /// Sheet sizes left out of a create-sheet intent get the defaults.
    pub fn into_operation(
        self,
        current_sheet: Option<&str>,
        named_ranges: &NamedRangeSet,
    ) -> Result<Operation> {
        let parse = |text: &str| parse_range(text, current_sheet, named_ranges);

        let operation = match self {
            Self::Read { range } => Operation::read(parse(&range)?),
            Self::Write {
                range,
                values,
                header,
            } => {
                let range = match range {
                    Some(text) => parse(&text)?,
                    None => Range::default_anchor(current_sheet.map(str::to_string)),
                };
                match header {
                    Some(header) => Operation::write_with_header(Some(range), header, values),
                    None => Operation::write(Some(range), values),
                }
            }
            Self::CreateSheet {
                name,
                row_count,
                column_count,
            } => Operation::create_sheet_with_size(
                name,
                row_count.unwrap_or(DEFAULT_SHEET_ROWS),
                column_count.unwrap_or(DEFAULT_SHEET_COLUMNS),
            ),
            Self::SetFormula { range, formula } => Operation::set_formula(parse(&range)?, formula),
            Self::FormatCells { range, format } => Operation::format_cells(parse(&range)?, format),
        };
        Ok(operation)
    }
}
