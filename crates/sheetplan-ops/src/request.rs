//! Request bodies for the remote spreadsheet API
//!
//! These mirror the API's JSON shapes: camelCase fields, absent fields
//! omitted. They carry no transport concerns; a caller serializes them and
//! sends them however it likes.

use serde::{Deserialize, Serialize};
use sheetplan_core::{Color, Grid, TruncationWarning};

/// Value layout for value reads and writes
pub const MAJOR_DIMENSION_ROWS: &str = "ROWS";

/// Values are parsed as if typed by a user, so formulas evaluate
pub const VALUE_INPUT_USER_ENTERED: &str = "USER_ENTERED";

/// A translated operation, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum TranslatedRequest {
    /// `values.get`
    ValuesGet(ValuesGet),
    /// `values.update`
    ValuesUpdate(ValuesUpdate),
    /// `spreadsheets.batchUpdate`
    BatchUpdate(BatchUpdate),
}

impl TranslatedRequest {
    /// Method name, as it appears in the serialized `method` field
    pub fn method(&self) -> &'static str {
        match self {
            TranslatedRequest::ValuesGet(_) => "valuesGet",
            TranslatedRequest::ValuesUpdate(_) => "valuesUpdate",
            TranslatedRequest::BatchUpdate(_) => "batchUpdate",
        }
    }
}

/// A translated request together with any warnings raised on the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub request: TranslatedRequest,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TruncationWarning>,
}

impl Translation {
    pub(crate) fn new(request: TranslatedRequest, warning: Option<TruncationWarning>) -> Self {
        Self {
            request,
            warnings: warning.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesGet {
    /// A1 range, sheet-qualified when known
    pub range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesUpdate {
    pub range: String,
    pub major_dimension: String,
    pub value_input_option: String,
    pub values: Grid,
}

impl ValuesUpdate {
    /// Row-major, user-entered update of `values` at `range`
    pub fn rows(range: String, values: Grid) -> Self {
        Self {
            range,
            major_dimension: MAJOR_DIMENSION_ROWS.to_string(),
            value_input_option: VALUE_INPUT_USER_ENTERED.to_string(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

/// One entry of a batch update
///
/// Serializes externally tagged, e.g. `{"addSheet": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    AddSheet(AddSheetRequest),
    RepeatCell(RepeatCellRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSheetRequest {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub title: String,
    pub grid_properties: GridProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    pub row_count: u32,
    pub column_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    /// Comma-separated field mask of the format paths being set
    pub fields: String,
}

/// Zero-based, half-open cell block
///
/// Open axes leave their indices unset. The sheet is identified by title;
/// the caller maps it to the numeric sheet id the API expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub user_entered_format: UserEnteredFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEnteredFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<RgbColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<RgbColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl From<Color> for RgbColor {
    fn from(color: Color) -> Self {
        let (red, green, blue) = color.to_unit_rgb();
        RgbColor { red, green, blue }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// `DATE`, `PERCENT`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sheetplan_core::ScalarValue;

    #[test]
    fn test_values_update_shape() {
        let request = TranslatedRequest::ValuesUpdate(ValuesUpdate::rows(
            "Data!A1:B1".into(),
            vec![vec![ScalarValue::from(1), ScalarValue::text("x")]],
        ));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "method": "valuesUpdate",
                "range": "Data!A1:B1",
                "majorDimension": "ROWS",
                "valueInputOption": "USER_ENTERED",
                "values": [[1.0, "x"]]
            })
        );
        assert_eq!(request.method(), "valuesUpdate");
    }

    #[test]
    fn test_batch_entries_are_externally_tagged() {
        let request = Request::AddSheet(AddSheetRequest {
            properties: SheetProperties {
                title: "Q1".into(),
                grid_properties: GridProperties {
                    row_count: 10,
                    column_count: 3,
                },
            },
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "addSheet": {
                    "properties": {
                        "title": "Q1",
                        "gridProperties": {"rowCount": 10, "columnCount": 3}
                    }
                }
            })
        );
    }

    #[test]
    fn test_grid_range_omits_open_axes() {
        let range = GridRange {
            start_column_index: Some(0),
            end_column_index: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({"startColumnIndex": 0, "endColumnIndex": 2})
        );
    }
}
