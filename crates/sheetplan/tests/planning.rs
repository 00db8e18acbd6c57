//! End-to-end planning from JSON intents

use pretty_assertions::assert_eq;
use serde_json::json;
use sheetplan::prelude::*;
use sheetplan::request::Request;

fn planner() -> Planner {
    let config = EngineConfig::from_toml(
        r#"
        default_sheet = "Sheet1"
        named_ranges = ["Totals"]

        [limits]
        max_rows = 100
        max_columns = 10
        "#,
    )
    .unwrap();
    Planner::new(config)
}

fn intent(value: serde_json::Value) -> OperationIntent {
    serde_json::from_value(value).unwrap()
}

#[test]
fn write_with_header_on_default_sheet() {
    let translation = planner()
        .plan(intent(json!({
            "type": "write",
            "header": ["Name", "Score"],
            "values": [["Ada", 91], ["Grace", 88], ["Linus", 75]]
        })))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&translation.request).unwrap(),
        json!({
            "method": "valuesUpdate",
            "range": "Sheet1!A1:B4",
            "majorDimension": "ROWS",
            "valueInputOption": "USER_ENTERED",
            "values": [["Name", "Score"], ["Ada", 91.0], ["Grace", 88.0], ["Linus", 75.0]]
        })
    );
    assert!(translation.warnings.is_empty());
}

#[test]
fn write_over_the_cap_warns() {
    let values: Vec<Vec<i32>> = (0..150).map(|i| vec![i]).collect();
    let translation = planner()
        .plan(intent(json!({"type": "write", "range": "B2", "values": values})))
        .unwrap();

    assert_eq!(translation.warnings.len(), 1);
    assert_eq!(translation.warnings[0].requested_rows, Some(150));
    match translation.request {
        TranslatedRequest::ValuesUpdate(update) => {
            assert_eq!(update.range, "Sheet1!B2:B101");
            assert_eq!(update.values.len(), 100);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn formula_fills_block() {
    let translation = planner()
        .plan(intent(json!({
            "type": "set_formula",
            "range": "C2:C4",
            "formula": "SUM(A2:B2)"
        })))
        .unwrap();
    match translation.request {
        TranslatedRequest::ValuesUpdate(update) => {
            assert_eq!(update.range, "Sheet1!C2:C4");
            assert_eq!(
                update.values,
                vec![vec![ScalarValue::from("=SUM(A2:B2)")]; 3]
            );
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn create_sheet_batch_update() {
    let translation = planner()
        .plan(intent(json!({"type": "create_sheet", "name": "Q3 Plan"})))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&translation.request).unwrap(),
        json!({
            "method": "batchUpdate",
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": "Q3 Plan",
                        "gridProperties": {"rowCount": 1000, "columnCount": 26}
                    }
                }
            }]
        })
    );
}

#[test]
fn format_whole_column() {
    let translation = planner()
        .plan(intent(json!({
            "type": "format_cells",
            "range": "D:D",
            "format": {"numberFormat": "0.00%", "horizontalAlign": "right"}
        })))
        .unwrap();
    let TranslatedRequest::BatchUpdate(batch) = translation.request else {
        panic!("expected a batch update");
    };
    let Request::RepeatCell(repeat) = &batch.requests[0] else {
        panic!("expected a repeat-cell request");
    };
    assert_eq!(repeat.range.start_row_index, None);
    assert_eq!(repeat.range.start_column_index, Some(3));
    assert_eq!(repeat.range.end_column_index, Some(4));
    assert_eq!(
        repeat.fields,
        "userEnteredFormat.horizontalAlignment,userEnteredFormat.numberFormat"
    );
}

#[test]
fn rejected_intents() {
    let planner = planner();

    let err = planner
        .plan(intent(json!({"type": "create_sheet", "name": "a*b"})))
        .unwrap_err();
    assert_eq!(err.kind(), "InvalidSheetName");

    let err = planner
        .plan(intent(json!({"type": "write", "values": [[1, 2], [3]]})))
        .unwrap_err();
    assert_eq!(err.kind(), "MalformedGrid");

    let err = planner
        .plan(intent(json!({"type": "set_formula", "range": "A1", "formula": "=SUM(A1"})))
        .unwrap_err();
    assert_eq!(err.kind(), "UnbalancedFormula");

    let err = planner
        .plan(intent(json!({"type": "format_cells", "range": "Totals", "format": {"bold": true}})))
        .unwrap_err();
    assert_eq!(err.kind(), "ValidationError");
}
