//! Profiling results

use crate::infer::ColumnType;
use serde::{Deserialize, Serialize};
use sheetplan_core::{Grid, ScalarValue};
use std::fmt::Write as _;

/// What was learned about one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Column letters, e.g. `C`
    pub column: String,
    /// Header label, when a header row was detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub inferred_type: ColumnType,
    /// Non-empty values sampled, header excluded
    pub sample_count: usize,
    /// First few non-empty values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<ScalarValue>,
}

/// Structural patterns seen anywhere in the sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFlags {
    pub has_formulas: bool,
    pub has_numeric_sequence: bool,
    pub has_date_range: bool,
}

impl PatternFlags {
    fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.has_formulas {
            labels.push("formulas");
        }
        if self.has_numeric_sequence {
            labels.push("numeric sequence");
        }
        if self.has_date_range {
            labels.push("date range");
        }
        labels
    }
}

/// A structured summary of a sheet's sampled contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSample {
    /// Sheet title
    pub sheet: String,
    /// Block spanning every window that was read, empty when nothing was
    pub range: String,
    /// Windows that were read successfully
    pub windows: Vec<String>,
    /// Values of the successful windows, top to bottom, header row included
    pub grid: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_headers: Option<Vec<String>>,
    pub column_profiles: Vec<ColumnProfile>,
    pub flags: PatternFlags,
    /// Skipped windows and other non-fatal findings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl SheetSample {
    /// A sample with nothing in it
    pub fn empty<S: Into<String>>(sheet: S) -> Self {
        Self {
            sheet: sheet.into(),
            range: String::new(),
            windows: Vec::new(),
            grid: Grid::new(),
            detected_headers: None,
            column_profiles: Vec::new(),
            flags: PatternFlags::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether no values were sampled
    pub fn is_empty(&self) -> bool {
        self.column_profiles
            .iter()
            .all(|profile| profile.sample_count == 0)
            && self.detected_headers.is_none()
    }

    /// Look up a column profile by header label (case-insensitive) or column letters
    pub fn column(&self, key: &str) -> Option<&ColumnProfile> {
        self.column_profiles.iter().find(|profile| {
            profile.column.eq_ignore_ascii_case(key)
                || profile
                    .header
                    .as_deref()
                    .map_or(false, |h| h.eq_ignore_ascii_case(key))
        })
    }

    /// Short narrative for grounding a planner
    ///
    /// ```text
    /// Sheet 'Sales' (Sales!A1:C6): 6 rows x 3 columns sampled. Header row: Date, Units, Revenue.
    /// Columns: A "Date" date (5 values); B "Units" number (5 values); C "Revenue" number (5 values).
    /// Patterns: numeric sequence, date range.
    /// ```
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if self.is_empty() {
            let _ = write!(out, "Sheet '{}' has no sampled values.", self.sheet);
            return out;
        }

        let columns = self.grid.iter().map(Vec::len).max().unwrap_or(0);
        let _ = write!(
            out,
            "Sheet '{}' ({}): {} rows x {} columns sampled.",
            self.sheet,
            self.range,
            self.grid.len(),
            columns
        );
        if let Some(headers) = &self.detected_headers {
            let _ = write!(out, " Header row: {}.", headers.join(", "));
        }

        let described: Vec<String> = self
            .column_profiles
            .iter()
            .map(|profile| {
                let label = profile
                    .header
                    .as_deref()
                    .filter(|h| !h.is_empty())
                    .map(|h| format!(" \"{}\"", h))
                    .unwrap_or_default();
                format!(
                    "{}{} {} ({} values)",
                    profile.column,
                    label,
                    profile.inferred_type.as_str(),
                    profile.sample_count
                )
            })
            .collect();
        let _ = write!(out, "\nColumns: {}.", described.join("; "));

        let patterns = self.flags.labels();
        if !patterns.is_empty() {
            let _ = write!(out, "\nPatterns: {}.", patterns.join(", "));
        }
        if !self.diagnostics.is_empty() {
            let _ = write!(out, "\nNotes: {}.", self.diagnostics.join("; "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(column: &str, header: &str, inferred_type: ColumnType, count: usize) -> ColumnProfile {
        ColumnProfile {
            column: column.into(),
            header: Some(header.into()),
            inferred_type,
            sample_count: count,
            samples: Vec::new(),
        }
    }

    #[test]
    fn test_summary() {
        let sample = SheetSample {
            sheet: "Sales".into(),
            range: "Sales!A1:B3".into(),
            windows: vec!["Sales!A1:B3".into()],
            grid: vec![
                vec!["Day".into(), "Units".into()],
                vec![1.into(), 10.into()],
                vec![2.into(), 12.into()],
            ],
            detected_headers: Some(vec!["Day".into(), "Units".into()]),
            column_profiles: vec![
                profile("A", "Day", ColumnType::Number, 2),
                profile("B", "Units", ColumnType::Number, 2),
            ],
            flags: PatternFlags {
                has_formulas: true,
                ..Default::default()
            },
            diagnostics: Vec::new(),
        };

        assert_eq!(
            sample.summary(),
            "Sheet 'Sales' (Sales!A1:B3): 3 rows x 2 columns sampled. Header row: Day, Units.\n\
             Columns: A \"Day\" number (2 values); B \"Units\" number (2 values).\n\
             Patterns: formulas."
        );
        assert_eq!(sample.column("units").map(|p| p.column.as_str()), Some("B"));
        assert_eq!(sample.column("a").map(|p| p.column.as_str()), Some("A"));
    }

    #[test]
    fn test_empty_summary() {
        let sample = SheetSample::empty("Blank");
        assert!(sample.is_empty());
        assert_eq!(sample.summary(), "Sheet 'Blank' has no sampled values.");
    }
}
