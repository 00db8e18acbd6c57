//! Serialized request shapes

use pretty_assertions::assert_eq;
use serde_json::json;
use sheetplan_core::{CellFormat, Range, ResolveLimits, ScalarValue, VerticalAlign};
use sheetplan_ops::{build_request, Operation};

#[test]
fn format_cells_serializes_like_the_api() {
    let format = CellFormat::new()
        .with_bold(true)
        .with_background_color("#FF0000")
        .with_vertical_align(VerticalAlign::Middle)
        .with_number_format("0.00%");
    let op = Operation::format_cells(Range::parse("'Q1 Sales'!B2:D4").unwrap(), format);
    let translation = build_request(&op, &ResolveLimits::default()).unwrap();

    assert_eq!(
        serde_json::to_value(&translation).unwrap(),
        json!({
            "request": {
                "method": "batchUpdate",
                "requests": [{
                    "repeatCell": {
                        "range": {
                            "sheetTitle": "Q1 Sales",
                            "startRowIndex": 1,
                            "endRowIndex": 4,
                            "startColumnIndex": 1,
                            "endColumnIndex": 4
                        },
                        "cell": {
                            "userEnteredFormat": {
                                "backgroundColor": {"red": 1.0, "green": 0.0, "blue": 0.0},
                                "textFormat": {"bold": true},
                                "verticalAlignment": "MIDDLE",
                                "numberFormat": {"type": "PERCENT", "pattern": "0.00%"}
                            }
                        },
                        "fields": "userEnteredFormat.backgroundColor,userEnteredFormat.textFormat.bold,userEnteredFormat.verticalAlignment,userEnteredFormat.numberFormat"
                    }
                }]
            }
        })
    );
}

#[test]
fn truncated_write_reports_warning() {
    let values: Vec<Vec<ScalarValue>> = (0..1500)
        .map(|i| vec![ScalarValue::from(i), ScalarValue::text("row")])
        .collect();
    let op = Operation::write(Some(Range::parse("Data!A10").unwrap()), values);
    let translation = build_request(&op, &ResolveLimits::default()).unwrap();

    let json = serde_json::to_value(&translation).unwrap();
    assert_eq!(json["request"]["range"], "Data!A10:B1009");
    assert_eq!(json["request"]["values"].as_array().unwrap().len(), 1000);
    assert_eq!(json["warnings"][0]["requested_rows"], 1500);
}

#[test]
fn operations_deserialize_from_tagged_json() {
    let op: Operation = serde_json::from_value(json!({
        "type": "create_sheet",
        "name": "Archive",
        "row_count": 10,
        "column_count": 4
    }))
    .unwrap();
    assert_eq!(op, Operation::create_sheet_with_size("Archive", 10, 4));
}

#[test]
fn reversed_corners_in_json_are_normalized() {
    let op: Operation = serde_json::from_value(json!({
        "type": "read",
        "range": {
            "target": {
                "kind": "bounded",
                "start": {"row": 10, "column": 3},
                "end": {"row": 1, "column": 1}
            }
        }
    }))
    .unwrap();
    assert_eq!(op, Operation::read(Range::parse("A1:C10").unwrap()));

    let translation = build_request(&op, &ResolveLimits::default()).unwrap();
    assert_eq!(
        serde_json::to_value(&translation.request).unwrap(),
        json!({"method": "valuesGet", "range": "A1:C10"})
    );
}

#[test]
fn zero_coordinates_in_json_are_rejected() {
    let cell = serde_json::from_value::<Operation>(json!({
        "type": "read",
        "range": {"target": {"kind": "cell", "row": 0, "column": 2}}
    }));
    assert!(cell.is_err());

    let rows = serde_json::from_value::<Operation>(json!({
        "type": "format_cells",
        "range": {"target": {"kind": "rows", "first": 0, "last": 3}},
        "format": {"bold": true}
    }));
    let err = rows.unwrap_err().to_string();
    assert!(err.contains("row numbers must be >= 1"), "{err}");
}
