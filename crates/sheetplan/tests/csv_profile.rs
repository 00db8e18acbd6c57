//! Profiling a CSV file with configured sampling windows

#![cfg(feature = "csv")]

use pretty_assertions::assert_eq;
use sheetplan::prelude::*;
use sheetplan::ColumnType;
use std::io::Write;

#[test]
fn configured_windows_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Orders.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Order,Placed,Paid").unwrap();
    for i in 1..=60 {
        writeln!(file, "{},2024-01-{:02},{}", 1000 + i, i % 28 + 1, i % 2 == 0).unwrap();
    }
    drop(file);

    let config = EngineConfig::from_toml(
        "[sampling]\nwindow_rows = 10\nmidpoint_threshold_rows = 40\n",
    )
    .unwrap();
    let planner = Planner::new(config);

    let sheet = CsvSheet::read_file(&path, &CsvReadOptions::default()).unwrap();
    let sample = planner.profile(&sheet.descriptor(), &sheet).unwrap();

    assert_eq!(sample.windows, vec!["Orders!A1:C10", "Orders!A26:C35"]);
    assert_eq!(
        sample.detected_headers,
        Some(vec!["Order".to_string(), "Placed".to_string(), "Paid".to_string()])
    );
    let types: Vec<ColumnType> = sample
        .column_profiles
        .iter()
        .map(|p| p.inferred_type)
        .collect();
    assert_eq!(
        types,
        vec![ColumnType::Number, ColumnType::Date, ColumnType::Boolean]
    );
    assert!(sample.flags.has_numeric_sequence);
    assert!(sample.flags.has_date_range);
}
