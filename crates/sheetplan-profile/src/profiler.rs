//! Sampling a sheet and building its profile

use crate::config::{SampleConfig, SAMPLES_PER_COLUMN};
use crate::infer::{detect_header, infer_column_type, ColumnType};
use crate::patterns::{is_arithmetic_sequence, numeric_value, parse_date};
use crate::reader::{ReadError, SampleGrid, SampledCell, SheetReader};
use crate::sample::{ColumnProfile, PatternFlags, SheetSample};
use crate::window::{plan_windows, SheetDescriptor, Window, WindowPosition};
use sheetplan_core::{number_to_column, CellRef, DataExtent, ResolvedRange, ScalarValue};
use thiserror::Error;

/// Result type alias using [`ProfileError`]
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors that stop a sheet from being profiled at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Every planned window failed to read
    #[error("Sheet '{sheet}' is unreachable: {}", .failures.first().map(ToString::to_string).unwrap_or_default())]
    SheetUnreachable {
        sheet: String,
        failures: Vec<ReadError>,
    },
}

/// Plan windows, read them through `reader` and profile the results
///
/// Windows are read one after another. A window that fails to read is
/// skipped and noted in the sample's diagnostics.
pub fn profile_sheet<R>(
    descriptor: &SheetDescriptor,
    reader: &R,
    config: &SampleConfig,
) -> Result<SheetSample>
where
    R: SheetReader + ?Sized,
{
    let reads = plan_windows(descriptor, config)
        .into_iter()
        .map(|window| {
            let grid = reader.read_window(&window.range);
            (window, grid)
        })
        .collect();
    profile_windows(descriptor, reads)
}

/// Profile windows that have already been read
///
/// Each entry pairs a window with its read outcome. Failed reads become
/// diagnostics; only when every window failed is the sheet unreachable.
pub fn profile_windows(
    descriptor: &SheetDescriptor,
    reads: Vec<(Window, std::result::Result<SampleGrid, ReadError>)>,
) -> Result<SheetSample> {
    let mut sample = SheetSample::empty(descriptor.title.clone());

    if reads.is_empty() {
        sample
            .diagnostics
            .push(format!("sheet '{}' has no cells", descriptor.title));
        return Ok(sample);
    }

    let mut windows = Vec::new();
    let mut failures = Vec::new();
    for (window, read) in reads {
        match read {
            Ok(grid) => windows.push((window, grid)),
            Err(err) => {
                tracing::debug!(
                    sheet = %descriptor.title,
                    window = %window.range,
                    error = %err,
                    "skipping unreadable window"
                );
                sample
                    .diagnostics
                    .push(format!("window {} skipped: {}", window.range, err));
                failures.push(err);
            }
        }
    }

    if windows.is_empty() {
        return Err(ProfileError::SheetUnreachable {
            sheet: descriptor.title.clone(),
            failures,
        });
    }

    let width = windows
        .iter()
        .flat_map(|(_, grid)| grid.iter().map(Vec::len))
        .max()
        .unwrap_or(0);
    if width == 0 {
        sample
            .diagnostics
            .push(format!("sheet '{}' returned no values", descriptor.title));
    }

    let top = windows
        .iter()
        .find(|(window, _)| window.position == WindowPosition::Top);
    let headers = match top {
        Some((_, grid)) => grid.first().and_then(|row| detect_header(row)),
        None => {
            sample
                .diagnostics
                .push("top window unavailable, header not checked".to_string());
            None
        }
    };

    // Data rows per window, header row dropped from the top window
    let data: Vec<&[Vec<SampledCell>]> = windows
        .iter()
        .map(|(window, grid)| {
            let skip = usize::from(window.position == WindowPosition::Top && headers.is_some());
            grid.get(skip..).unwrap_or(&[])
        })
        .collect();

    let first_column = windows
        .iter()
        .map(|(window, _)| window.start().column)
        .min()
        .unwrap_or(1);

    let mut flags = PatternFlags {
        has_formulas: windows
            .iter()
            .flat_map(|(_, grid)| grid.iter().flatten())
            .any(SampledCell::is_formula),
        ..Default::default()
    };

    for c in 0..width {
        let values: Vec<&ScalarValue> = data
            .iter()
            .flat_map(|rows| rows.iter().map(move |row| cell_value(row, c)))
            .collect();
        let (inferred_type, sample_count) = infer_column_type(values.iter().copied());

        if inferred_type == ColumnType::Number
            && data.iter().any(|rows| column_is_sequence(rows, c))
        {
            flags.has_numeric_sequence = true;
        }
        if values
            .iter()
            .filter_map(|value| value.as_text().and_then(parse_date))
            .nth(1)
            .is_some()
        {
            flags.has_date_range = true;
        }

        let column = number_to_column(first_column + c as u32).unwrap_or_default();
        let header = headers.as_ref().and_then(|h| h.get(c).cloned());
        sample.column_profiles.push(ColumnProfile {
            column,
            header,
            inferred_type,
            sample_count,
            samples: values
                .iter()
                .filter(|value| !value.is_empty())
                .take(SAMPLES_PER_COLUMN)
                .map(|value| (*value).clone())
                .collect(),
        });
    }

    sample.range = span(&descriptor.title, &windows, width);
    sample.windows = windows
        .iter()
        .map(|(window, _)| window.range.to_a1_string())
        .collect();
    sample.grid = windows
        .iter()
        .flat_map(|(_, grid)| grid.iter())
        .map(|row| (0..width).map(|c| cell_value(row, c).clone()).collect())
        .collect();
    sample.detected_headers = headers;
    sample.flags = flags;

    tracing::debug!(
        sheet = %sample.sheet,
        columns = sample.column_profiles.len(),
        diagnostics = sample.diagnostics.len(),
        "profiled sheet"
    );
    Ok(sample)
}

static EMPTY: ScalarValue = ScalarValue::Empty;

/// Value at column `c`, treating missing trailing cells as empty
fn cell_value(row: &[SampledCell], c: usize) -> &ScalarValue {
    row.get(c).map_or(&EMPTY, |cell| &cell.value)
}

fn column_is_sequence(rows: &[Vec<SampledCell>], c: usize) -> bool {
    let numbers: Vec<f64> = rows
        .iter()
        .map(|row| cell_value(row, c))
        .filter(|value| !value.is_empty())
        .filter_map(numeric_value)
        .collect();
    is_arithmetic_sequence(&numbers)
}

/// A1 block covering the rows actually returned by every window
fn span(sheet: &str, windows: &[(Window, SampleGrid)], width: usize) -> String {
    let mut start: Option<CellRef> = None;
    let mut last_row = 0u32;
    for (window, grid) in windows {
        if grid.is_empty() {
            continue;
        }
        let origin = window.start();
        start = Some(match start {
            Some(s) => CellRef::new(s.row.min(origin.row), s.column.min(origin.column)),
            None => origin,
        });
        last_row = last_row.max(origin.row + grid.len() as u32 - 1);
    }

    match start {
        Some(start) if width > 0 => {
            let extent = DataExtent::new(last_row - start.row + 1, width as u32);
            ResolvedRange::block(Some(sheet.to_string()), start, extent).to_a1_string()
        }
        _ => String::new(),
    }
}
