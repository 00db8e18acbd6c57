//! The closed set of spreadsheet operations

use crate::formula::normalize_formula;
use serde::{Deserialize, Serialize};
use sheetplan_core::{
    validate_sheet_name, CellFormat, DataExtent, Error, Grid, Range, RangeRef, Result,
    ScalarValue,
};

/// Row count used by [`Operation::create_sheet`]
pub const DEFAULT_SHEET_ROWS: u32 = 1000;

/// Column count used by [`Operation::create_sheet`]
pub const DEFAULT_SHEET_COLUMNS: u32 = 26;

/// A typed operation against a spreadsheet
///
/// Operations only describe intent. [`Operation::validate`] checks their
/// parameters and [`crate::build_request`] turns them into remote API
/// requests; nothing here performs the mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Read the values in a range
    Read { range: Range },

    /// Write a grid of values
    Write {
        /// Anchor or target; `None` means `A1` on the default sheet
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<Range>,
        values: Grid,
        /// Row written above `values`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<Vec<ScalarValue>>,
    },

    /// Add a new sheet
    CreateSheet {
        name: String,
        row_count: u32,
        column_count: u32,
    },

    /// Write the same formula into every cell of a range
    SetFormula { range: Range, formula: String },

    /// Apply formatting to a range
    FormatCells { range: Range, format: CellFormat },
}

impl Operation {
    /// Read `range`
    pub fn read(range: Range) -> Self {
        Operation::Read { range }
    }

    /// Write `values` at `range`, or at `A1` when no range is given
    pub fn write(range: Option<Range>, values: Grid) -> Self {
        Operation::Write {
            range,
            values,
            header: None,
        }
    }

    /// Write `values` below a `header` row
    pub fn write_with_header(range: Option<Range>, header: Vec<ScalarValue>, values: Grid) -> Self {
        Operation::Write {
            range,
            values,
            header: Some(header),
        }
    }

    /// Create a sheet with the default grid size
    pub fn create_sheet<S: Into<String>>(name: S) -> Self {
        Self::create_sheet_with_size(name, DEFAULT_SHEET_ROWS, DEFAULT_SHEET_COLUMNS)
    }

    /// Create a sheet with an explicit grid size
    pub fn create_sheet_with_size<S: Into<String>>(
        name: S,
        row_count: u32,
        column_count: u32,
    ) -> Self {
        Operation::CreateSheet {
            name: name.into(),
            row_count,
            column_count,
        }
    }

    /// Fill `range` with `formula`
    pub fn set_formula<S: Into<String>>(range: Range, formula: S) -> Self {
        Operation::SetFormula {
            range,
            formula: formula.into(),
        }
    }

    /// Apply `format` to `range`
    pub fn format_cells(range: Range, format: CellFormat) -> Self {
        Operation::FormatCells { range, format }
    }

    /// Short name of the operation, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Read { .. } => "read",
            Operation::Write { .. } => "write",
            Operation::CreateSheet { .. } => "create_sheet",
            Operation::SetFormula { .. } => "set_formula",
            Operation::FormatCells { .. } => "format_cells",
        }
    }

    /// The range the operation targets, if any
    pub fn range(&self) -> Option<&Range> {
        match self {
            Operation::Read { range }
            | Operation::SetFormula { range, .. }
            | Operation::FormatCells { range, .. } => Some(range),
            Operation::Write { range, .. } => range.as_ref(),
            Operation::CreateSheet { .. } => None,
        }
    }

    /// Check the operation's parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Operation::Read { .. } => Ok(()),
            Operation::Write { values, header, .. } => {
                write_extent(header.as_deref(), values).map(|_| ())
            }
            Operation::CreateSheet {
                name,
                row_count,
                column_count,
            } => {
                validate_sheet_name(name)?;
                if *row_count == 0 || *column_count == 0 {
                    return Err(Error::validation(format!(
                        "sheet '{}' needs at least one row and one column, got {}x{}",
                        name, row_count, column_count
                    )));
                }
                Ok(())
            }
            Operation::SetFormula { range, formula } => {
                normalize_formula(formula)?;
                match range.target {
                    RangeRef::Cell(_) | RangeRef::Bounded { .. } => Ok(()),
                    _ => Err(Error::validation(format!(
                        "formula target {} must be a cell or a bounded range",
                        range
                    ))),
                }
            }
            Operation::FormatCells { range, format } => {
                if format.is_empty() {
                    return Err(Error::validation("format sets no properties"));
                }
                if let RangeRef::Named { name } = &range.target {
                    return Err(Error::validation(format!(
                        "cannot format named range '{}' by grid coordinates",
                        name
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Check a write payload and return its extent, header row included
pub(crate) fn write_extent(header: Option<&[ScalarValue]>, values: &Grid) -> Result<DataExtent> {
    let width = match (header, values.first()) {
        (Some(header), _) => header.len(),
        (None, Some(row)) => row.len(),
        (None, None) => return Err(Error::validation("write has no values")),
    };
    if width == 0 {
        return Err(Error::validation("write rows have no cells"));
    }

    for (i, row) in values.iter().enumerate() {
        if row.len() != width {
            let what = if header.is_some() {
                "header"
            } else {
                "row 1"
            };
            return Err(Error::MalformedGrid(format!(
                "row {} has {} cells but {} has {}",
                i + 1,
                row.len(),
                what,
                width
            )));
        }
    }

    let rows = values.len() + usize::from(header.is_some());
    Ok(DataExtent::new(rows as u32, width as u32))
}
