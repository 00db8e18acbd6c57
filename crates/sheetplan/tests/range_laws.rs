//! Printing a parsed range and parsing it again gives the same range

use proptest::prelude::*;
use sheetplan::{parse_range, CellRef, NamedRangeSet, Range, RangeRef};

fn cell() -> impl Strategy<Value = CellRef> {
    (1u32..=1_048_576, 1u32..=18_278).prop_map(|(row, column)| CellRef::new(row, column))
}

fn target() -> impl Strategy<Value = RangeRef> {
    prop_oneof![
        cell().prop_map(RangeRef::Cell),
        (cell(), cell()).prop_map(|(a, b)| RangeRef::bounded(a, b)),
        (1u32..=18_278, 1u32..=18_278).prop_map(|(a, b)| RangeRef::columns(a, b)),
        (1u32..=1_048_576, 1u32..=1_048_576).prop_map(|(a, b)| RangeRef::rows(a, b)),
    ]
}

fn sheet() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9_' ]{1,12}")
}

proptest! {
    #[test]
    fn a1_text_round_trips(sheet in sheet(), target in target()) {
        let range = Range::new(sheet, target);
        let text = range.to_a1_string();
        let parsed = parse_range(&text, None, &NamedRangeSet::new()).unwrap();
        prop_assert_eq!(parsed, range, "{}", text);
    }

    #[test]
    fn reversed_corners_normalize(a in cell(), b in cell()) {
        let forward = parse_range(&format!("{}:{}", a, b), None, &NamedRangeSet::new()).unwrap();
        let backward = parse_range(&format!("{}:{}", b, a), None, &NamedRangeSet::new()).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
