//! Column type inference and header detection

use crate::config::{BOOLEAN_RATIO, DATE_RATIO, HEADER_TEXT_RATIO, NUMBER_RATIO};
use crate::patterns::{classify, parse_number, ValueClass};
use crate::reader::SampledCell;
use serde::{Deserialize, Serialize};
use sheetplan_core::ScalarValue;

/// Inferred data type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    Date,
    Boolean,
    Text,
    /// No non-empty values were sampled
    Empty,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        }
    }
}

/// Infer a column's type from its values
///
/// Empty values are ignored. A column is a number column when at least
/// [`NUMBER_RATIO`] of the rest are numeric, else a date column at
/// [`DATE_RATIO`], else a boolean column at [`BOOLEAN_RATIO`], else text.
/// Returns the type and the count of non-empty values.
pub fn infer_column_type<'a, I>(values: I) -> (ColumnType, usize)
where
    I: IntoIterator<Item = &'a ScalarValue>,
{
    let mut numbers = 0usize;
    let mut dates = 0usize;
    let mut booleans = 0usize;
    let mut total = 0usize;

    for value in values {
        match classify(value) {
            ValueClass::Empty => continue,
            ValueClass::Number => numbers += 1,
            ValueClass::Date => dates += 1,
            ValueClass::Boolean => booleans += 1,
            ValueClass::Text => {}
        }
        total += 1;
    }

    if total == 0 {
        return (ColumnType::Empty, 0);
    }

    let ratio = |count: usize| count as f64 / total as f64;
    let column_type = if ratio(numbers) >= NUMBER_RATIO {
        ColumnType::Number
    } else if ratio(dates) >= DATE_RATIO {
        ColumnType::Date
    } else if ratio(booleans) >= BOOLEAN_RATIO {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    };
    (column_type, total)
}

/// Detect a header in the first row of a sheet
///
/// The row is a header when at least [`HEADER_TEXT_RATIO`] of its
/// non-empty cells are label text: non-formula text that does not read as a
/// number. Date-like text counts, so a row of period labels is a header.
/// Returns the labels, with empty cells as `""`.
pub fn detect_header(first_row: &[SampledCell]) -> Option<Vec<String>> {
    let mut labels = 0usize;
    let mut non_empty = 0usize;

    for cell in first_row {
        if cell.value.is_empty() {
            continue;
        }
        if let ScalarValue::Text(text) = &cell.value {
            if !cell.is_formula() && parse_number(text).is_none() {
                labels += 1;
            }
        }
        non_empty += 1;
    }

    if non_empty == 0 || (labels as f64 / non_empty as f64) < HEADER_TEXT_RATIO {
        return None;
    }

    Some(
        first_row
            .iter()
            .map(|cell| cell.value.to_string().trim().to_string())
            .collect(),
    )
}
