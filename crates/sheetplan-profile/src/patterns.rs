//! Value shape recognition: numbers, dates, booleans, sequences

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use sheetplan_core::ScalarValue;

/// What a single value looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Empty,
    Boolean,
    Number,
    Date,
    Text,
}

/// Numbers as people type them: `1,234.50`, `$12`, `-3.5e2`, `45%`
static NUMBER_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[$€£]?(?:\d{1,3}(?:,\d{3})+|\d+)?(?:\.\d+)?(?:[eE][-+]?\d+)?%?$")
        .expect("number pattern is valid")
});

/// Date shapes and the chrono formats tried for each
static DATE_SHAPES: Lazy<Vec<(Regex, &'static [&'static str])>> = Lazy::new(|| {
    let table: [(&str, &'static [&'static str]); 7] = [
        (r"^\d{4}-\d{1,2}-\d{1,2}$", &["%Y-%m-%d"]),
        (r"^\d{4}/\d{1,2}/\d{1,2}$", &["%Y/%m/%d"]),
        (r"^\d{1,2}/\d{1,2}/\d{4}$", &["%m/%d/%Y", "%d/%m/%Y"]),
        (r"^\d{1,2}-\d{1,2}-\d{4}$", &["%m-%d-%Y", "%d-%m-%Y"]),
        (r"^\d{1,2}/\d{1,2}/\d{2}$", &["%m/%d/%y", "%d/%m/%y"]),
        (r"^[A-Za-z]{3,9}\.? \d{1,2},? \d{4}$", &["%b %d %Y"]),
        (r"^\d{1,2} [A-Za-z]{3,9}\.? \d{4}$", &["%d %b %Y"]),
    ];
    table
        .into_iter()
        .map(|(shape, formats)| (Regex::new(shape).expect("date pattern is valid"), formats))
        .collect()
});

static DATE_TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}[T ]\d{1,2}:\d{2}(?::\d{2})?$")
        .expect("date-time pattern is valid")
});

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse number-shaped text
///
/// # Examples
/// ```
/// use sheetplan_profile::patterns::parse_number;
///
/// assert_eq!(parse_number("1,234.5"), Some(1234.5));
/// assert_eq!(parse_number("$12"), Some(12.0));
/// assert_eq!(parse_number("12 apples"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if !text.bytes().any(|b| b.is_ascii_digit()) || !NUMBER_SHAPE.is_match(text) {
        return None;
    }
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '€' | '£' | '%'))
        .collect();
    let n = cleaned.parse::<f64>().ok()?;
    let n = if text.ends_with('%') { n / 100.0 } else { n };
    n.is_finite().then_some(n)
}

/// Parse date-shaped text into a calendar date
///
/// # Examples
/// ```
/// use sheetplan_profile::patterns::parse_date;
///
/// assert!(parse_date("2024-01-15").is_some());
/// assert!(parse_date("Mar 3, 2024").is_some());
/// assert!(parse_date("2024-02-30").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.len() < 6 || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if DATE_TIME_SHAPE.is_match(text) {
        return DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(|dt| dt.date());
    }

    let (_, formats) = DATE_SHAPES.iter().find(|(shape, _)| shape.is_match(text))?;
    let normalized = text.replace(|c: char| c == ',' || c == '.', "");
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

/// `true` / `false` in any case
pub fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Classify a value, looking inside text for numbers, dates and booleans
pub fn classify(value: &ScalarValue) -> ValueClass {
    match value {
        ScalarValue::Empty => ValueClass::Empty,
        ScalarValue::Bool(_) => ValueClass::Boolean,
        ScalarValue::Number(_) => ValueClass::Number,
        ScalarValue::Text(s) if s.trim().is_empty() => ValueClass::Empty,
        ScalarValue::Text(s) => {
            if parse_bool(s).is_some() {
                ValueClass::Boolean
            } else if parse_number(s).is_some() {
                ValueClass::Number
            } else if parse_date(s).is_some() {
                ValueClass::Date
            } else {
                ValueClass::Text
            }
        }
    }
}

/// Numeric reading of a value, if it has one
pub fn numeric_value(value: &ScalarValue) -> Option<f64> {
    value
        .as_number()
        .or_else(|| value.as_text().and_then(parse_number))
}

/// Whether values form an arithmetic progression
///
/// Needs at least three values with a constant step, zero included;
/// differences may drift by a small relative tolerance to absorb float noise.
///
/// # Examples
/// ```
/// use sheetplan_profile::patterns::is_arithmetic_sequence;
///
/// assert!(is_arithmetic_sequence(&[1.0, 2.0, 3.0, 4.0]));
/// assert!(is_arithmetic_sequence(&[5.0, 5.0, 5.0]));
/// assert!(!is_arithmetic_sequence(&[1.0, 2.0]));
/// ```
pub fn is_arithmetic_sequence(values: &[f64]) -> bool {
    if values.len() < 3 {
        return false;
    }
    let step = values[1] - values[0];
    let tolerance = (step.abs() * 1e-6).max(1e-9);
    values
        .windows(2)
        .all(|pair| ((pair[1] - pair[0]) - step).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1.5e3"), Some(1500.0));
        assert_eq!(parse_number("45%"), Some(0.45));
        assert_eq!(parse_number("€1,000"), Some(1000.0));
        for bad in ["", "-", "$", "1,23", "12a", "inf", "NaN", "1.2.3", "2024-01-15"] {
            assert_eq!(parse_number(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_parse_date() {
        let jan15 = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_date("2024-01-15"), jan15);
        assert_eq!(parse_date("2024/1/15"), jan15);
        assert_eq!(parse_date("01/15/2024"), jan15);
        assert_eq!(parse_date("15/01/2024"), jan15);
        assert_eq!(parse_date("January 15, 2024"), jan15);
        assert_eq!(parse_date("Jan 15 2024"), jan15);
        assert_eq!(parse_date("15 Jan 2024"), jan15);
        assert_eq!(parse_date("2024-01-15T09:30:00"), jan15);
        assert_eq!(parse_date("2024-01-15 09:30"), jan15);
    }

    #[test]
    fn test_parse_date_rejects() {
        for bad in ["", "2024", "13/13/2024", "2024-13-01", "Smarch 3, 2024", "hello", "1.5"] {
            assert_eq!(parse_date(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&ScalarValue::Empty), ValueClass::Empty);
        assert_eq!(classify(&ScalarValue::text("  ")), ValueClass::Empty);
        assert_eq!(classify(&ScalarValue::Bool(true)), ValueClass::Boolean);
        assert_eq!(classify(&ScalarValue::text("FALSE")), ValueClass::Boolean);
        assert_eq!(classify(&ScalarValue::text("yes")), ValueClass::Text);
        assert_eq!(classify(&ScalarValue::from(3.5)), ValueClass::Number);
        assert_eq!(classify(&ScalarValue::text("1,200")), ValueClass::Number);
        assert_eq!(classify(&ScalarValue::text("2024-03-01")), ValueClass::Date);
        assert_eq!(classify(&ScalarValue::text("Revenue")), ValueClass::Text);
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&ScalarValue::from(2.5)), Some(2.5));
        assert_eq!(numeric_value(&ScalarValue::text("$1,200")), Some(1200.0));
        assert_eq!(numeric_value(&ScalarValue::text("Total")), None);
        assert_eq!(numeric_value(&ScalarValue::Bool(true)), None);
        assert_eq!(numeric_value(&ScalarValue::Empty), None);
    }

    #[test]
    fn test_sequences() {
        assert!(is_arithmetic_sequence(&[10.0, 20.0, 30.0]));
        assert!(is_arithmetic_sequence(&[3.0, 2.0, 1.0, 0.0]));
        assert!(is_arithmetic_sequence(&[0.1, 0.2, 0.3, 0.4]));
        assert!(is_arithmetic_sequence(&[5.0, 5.0, 5.0, 5.0]));
        assert!(!is_arithmetic_sequence(&[5.0, 5.0, 5.1]));
        assert!(!is_arithmetic_sequence(&[1.0, 2.0, 4.0]));
        assert!(!is_arithmetic_sequence(&[]));
    }
}
