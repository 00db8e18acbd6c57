//! Profiling through a `SheetReader`

use pretty_assertions::assert_eq;
use sheetplan_core::{Area, ResolvedRange, ScalarValue};
use sheetplan_profile::{
    profile_sheet, ColumnType, ProfileError, ReadError, SampleConfig, SampleGrid, SampledCell,
    SheetDescriptor, SheetReader,
};
use std::cell::RefCell;

/// An in-memory sheet that records which ranges were read
struct MemorySheet {
    rows: Vec<Vec<ScalarValue>>,
    reads: RefCell<Vec<String>>,
    fail_from_row: Option<u32>,
}

impl MemorySheet {
    fn new(rows: Vec<Vec<ScalarValue>>) -> Self {
        Self {
            rows,
            reads: RefCell::new(Vec::new()),
            fail_from_row: None,
        }
    }

    fn descriptor(&self, title: &str) -> SheetDescriptor {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        SheetDescriptor::new(title, self.rows.len() as u32, columns as u32)
    }
}

impl SheetReader for MemorySheet {
    fn read_window(&self, range: &ResolvedRange) -> Result<SampleGrid, ReadError> {
        self.reads.borrow_mut().push(range.to_a1_string());
        let Area::Block { start, end } = &range.area else {
            panic!("windows are always bounded");
        };
        if self.fail_from_row.map_or(false, |row| start.row >= row) {
            return Err(ReadError::Transport("connection reset".into()));
        }

        let rows: SampleGrid = (start.row..=end.row)
            .filter_map(|r| self.rows.get(r as usize - 1))
            .map(|row| {
                (start.column..=end.column)
                    .filter_map(|c| row.get(c as usize - 1))
                    .cloned()
                    .map(SampledCell::from)
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(rows)
    }
}

fn sales_rows() -> Vec<Vec<ScalarValue>> {
    let mut rows = vec![vec!["Date".into(), "Units".into(), "Revenue".into()]];
    for (day, units, revenue) in [
        ("2024-03-01", 12, 240.0),
        ("2024-03-02", 7, 140.0),
        ("2024-03-03", 15, 300.0),
        ("2024-03-04", 9, 180.0),
        ("2024-03-05", 11, 220.0),
    ] {
        rows.push(vec![day.into(), units.into(), revenue.into()]);
    }
    rows
}

#[test]
fn sales_sheet_end_to_end() {
    let sheet = MemorySheet::new(sales_rows());
    let sample = profile_sheet(&sheet.descriptor("Sales"), &sheet, &SampleConfig::default()).unwrap();

    assert_eq!(
        sample.detected_headers,
        Some(vec![
            "Date".to_string(),
            "Units".to_string(),
            "Revenue".to_string()
        ])
    );
    let types: Vec<ColumnType> = sample
        .column_profiles
        .iter()
        .map(|p| p.inferred_type)
        .collect();
    assert_eq!(
        types,
        vec![ColumnType::Date, ColumnType::Number, ColumnType::Number]
    );
    assert!(sample.column_profiles.iter().all(|p| p.sample_count == 5));
    assert_eq!(sample.range, "Sales!A1:C6");
    assert!(sample.flags.has_date_range);
    assert!(!sample.flags.has_numeric_sequence);
    assert_eq!(sheet.reads.borrow().as_slice(), ["Sales!A1:C6"]);

    let summary = sample.summary();
    assert!(summary.contains("Header row: Date, Units, Revenue."), "{summary}");
    assert!(summary.contains("A \"Date\" date (5 values)"), "{summary}");
}

#[test]
fn tall_sheet_reads_two_windows() {
    let rows: Vec<Vec<ScalarValue>> = (1..=400)
        .map(|i| vec![ScalarValue::from(i), ScalarValue::text(format!("item {i}"))])
        .collect();
    let sheet = MemorySheet::new(rows);
    let sample = profile_sheet(&sheet.descriptor("Items"), &sheet, &SampleConfig::default()).unwrap();

    assert_eq!(
        sheet.reads.borrow().as_slice(),
        ["Items!A1:B25", "Items!A188:B212"]
    );
    assert_eq!(sample.grid.len(), 50);
    assert_eq!(sample.column_profiles[0].inferred_type, ColumnType::Number);
    assert_eq!(sample.column_profiles[1].inferred_type, ColumnType::Text);
    assert!(sample.flags.has_numeric_sequence);
}

#[test]
fn unreadable_middle_window_is_a_diagnostic() {
    let rows: Vec<Vec<ScalarValue>> = (1..=300).map(|i| vec![ScalarValue::from(i)]).collect();
    let mut sheet = MemorySheet::new(rows);
    sheet.fail_from_row = Some(100);

    let sample = profile_sheet(&sheet.descriptor("Log"), &sheet, &SampleConfig::default()).unwrap();
    assert_eq!(sample.windows, vec!["Log!A1:A25".to_string()]);
    assert_eq!(sample.diagnostics.len(), 1);
    assert!(sample.diagnostics[0].contains("connection reset"));
}

#[test]
fn unreadable_sheet_is_an_error() {
    let mut sheet = MemorySheet::new(sales_rows());
    sheet.fail_from_row = Some(1);

    let err = profile_sheet(&sheet.descriptor("Sales"), &sheet, &SampleConfig::default())
        .unwrap_err();
    assert!(matches!(err, ProfileError::SheetUnreachable { .. }));
}

#[test]
fn empty_sheet_reads_nothing() {
    let sheet = MemorySheet::new(Vec::new());
    let sample = profile_sheet(&sheet.descriptor("Blank"), &sheet, &SampleConfig::default()).unwrap();
    assert!(sample.is_empty());
    assert!(sheet.reads.borrow().is_empty());
    assert_eq!(sample.diagnostics.len(), 1);
}
