//! Operation to request translation

use crate::formula::normalize_formula;
use crate::operation::{write_extent, Operation};
use crate::request::{
    AddSheetRequest, BatchUpdate, CellData, GridProperties, GridRange, NumberFormat, RepeatCellRequest,
    Request, RgbColor, SheetProperties, TextFormat, TranslatedRequest, Translation,
    UserEnteredFormat, ValuesGet, ValuesUpdate,
};
use sheetplan_core::{
    resolve_range, Area, CellFormat, Color, DataExtent, Error, Grid, NumberFormatKind, Range,
    Resolution, ResolveLimits, ResolvedRange, Result, ScalarValue, TruncationWarning,
};

/// Validate an operation and translate it into a remote API request
///
/// Ranges are resolved against `limits`; a range cut down to the caps
/// yields a warning in [`Translation::warnings`] and the values written
/// are truncated to match. Values that overflow an explicit write target
/// are truncated to it and warned about the same way.
///
/// # Examples
/// ```
/// use sheetplan_core::{Range, ResolveLimits, ScalarValue};
/// use sheetplan_ops::{build_request, Operation, TranslatedRequest};
///
/// let values = vec![
///     vec![ScalarValue::from(1), ScalarValue::from(2)],
///     vec![ScalarValue::from(3), ScalarValue::from(4)],
/// ];
/// let translation = build_request(&Operation::write(None, values), &ResolveLimits::default()).unwrap();
/// match translation.request {
///     TranslatedRequest::ValuesUpdate(update) => assert_eq!(update.range, "A1:B2"),
///     other => panic!("unexpected request {:?}", other),
/// }
/// ```
pub fn build_request(operation: &Operation, limits: &ResolveLimits) -> Result<Translation> {
    operation.validate()?;

    let translation = match operation {
        Operation::Read { range } => {
            let resolution = resolve_range(range, None, limits);
            let request = TranslatedRequest::ValuesGet(ValuesGet {
                range: resolution.range.to_a1_string(),
            });
            Translation::new(request, resolution.warning)
        }

        Operation::Write {
            range,
            values,
            header,
        } => {
            let extent = write_extent(header.as_deref(), values)?;
            let anchor = match range {
                Some(range) => range.clone(),
                None => Range::default_anchor(None),
            };
            let resolution = resolve_range(&anchor, Some(extent), limits);

            let mut grid = Grid::with_capacity(extent.rows as usize);
            if let Some(header) = header {
                grid.push(header.clone());
            }
            grid.extend(values.iter().cloned());
            let (max_rows, max_columns) = value_caps(&resolution.range, limits);
            fit_grid(&mut grid, max_rows, max_columns);

            let overflow =
                overflow_warning(&anchor, extent, &resolution, (max_rows, max_columns));
            let request = TranslatedRequest::ValuesUpdate(ValuesUpdate::rows(
                resolution.range.to_a1_string(),
                grid,
            ));
            let mut translation = Translation::new(request, resolution.warning);
            translation.warnings.extend(overflow);
            translation
        }

        Operation::CreateSheet {
            name,
            row_count,
            column_count,
        } => {
            let request = Request::AddSheet(AddSheetRequest {
                properties: SheetProperties {
                    title: name.clone(),
                    grid_properties: GridProperties {
                        row_count: *row_count,
                        column_count: *column_count,
                    },
                },
            });
            Translation::new(
                TranslatedRequest::BatchUpdate(BatchUpdate {
                    requests: vec![request],
                }),
                None,
            )
        }

        Operation::SetFormula { range, formula } => {
            let formula = normalize_formula(formula)?;
            let resolution = resolve_range(range, None, limits);
            let extent = resolution.range.extent().ok_or_else(|| {
                Error::validation(format!("formula target {} has no fixed size", range))
            })?;

            // Same text in every cell; relative references are not shifted
            let row = vec![ScalarValue::Text(formula); extent.columns as usize];
            let grid = vec![row; extent.rows as usize];

            let request = TranslatedRequest::ValuesUpdate(ValuesUpdate::rows(
                resolution.range.to_a1_string(),
                grid,
            ));
            Translation::new(request, resolution.warning)
        }

        Operation::FormatCells { range, format } => {
            let resolution = resolve_range(range, None, limits);
            let grid_range = grid_range(&resolution.range)?;
            let (user_entered_format, fields) = translate_format(format);

            let request = Request::RepeatCell(RepeatCellRequest {
                range: grid_range,
                cell: CellData {
                    user_entered_format,
                },
                fields: fields.join(","),
            });
            Translation::new(
                TranslatedRequest::BatchUpdate(BatchUpdate {
                    requests: vec![request],
                }),
                resolution.warning,
            )
        }
    };

    tracing::debug!(
        operation = operation.name(),
        method = translation.request.method(),
        warnings = translation.warnings.len(),
        "translated operation"
    );
    Ok(translation)
}

/// Largest value block that fits the resolved range
fn value_caps(range: &ResolvedRange, limits: &ResolveLimits) -> (usize, usize) {
    let max_rows = limits.max_rows.max(1) as usize;
    let max_columns = limits.max_columns.max(1) as usize;
    match &range.area {
        Area::Block { start, end } => (
            (end.row - start.row + 1) as usize,
            (end.column - start.column + 1) as usize,
        ),
        Area::Columns { first, last } => (max_rows, (last - first + 1) as usize),
        Area::Rows { first, last } => ((last - first + 1) as usize, max_columns),
        Area::Named { .. } => (max_rows, max_columns),
    }
}

/// Warning for values cut off by the write target itself
///
/// The target's own size is reported as the cap. Axes already reported by
/// the resolution warning are not reported twice.
fn overflow_warning(
    anchor: &Range,
    extent: DataExtent,
    resolution: &Resolution,
    (max_rows, max_columns): (usize, usize),
) -> Option<TruncationWarning> {
    let reported = resolution.warning.as_ref();
    let rows_cut = extent.rows as usize > max_rows
        && reported.map_or(true, |w| w.requested_rows.is_none());
    let columns_cut = extent.columns as usize > max_columns
        && reported.map_or(true, |w| w.requested_columns.is_none());
    if !rows_cut && !columns_cut {
        return None;
    }

    let target = Range::new(anchor.sheet.clone(), anchor.target.normalized());
    let requested = match target.start() {
        Some(start) => ResolvedRange::block(target.sheet.clone(), start, extent).to_a1_string(),
        None => target.to_a1_string(),
    };
    let warning = TruncationWarning {
        requested,
        applied: resolution.range.to_a1_string(),
        requested_rows: rows_cut.then_some(extent.rows),
        requested_columns: columns_cut.then_some(extent.columns),
        limits: ResolveLimits {
            max_rows: max_rows as u32,
            max_columns: max_columns as u32,
        },
    };
    tracing::warn!(
        requested = %warning.requested,
        applied = %warning.applied,
        "write values do not fit the target range"
    );
    Some(warning)
}

fn fit_grid(grid: &mut Grid, max_rows: usize, max_columns: usize) {
    grid.truncate(max_rows);
    for row in grid.iter_mut() {
        row.truncate(max_columns);
    }
}

/// Zero-based, half-open indices for a resolved range
fn grid_range(range: &ResolvedRange) -> Result<GridRange> {
    let mut grid = GridRange {
        sheet_title: range.sheet.clone(),
        ..Default::default()
    };
    match &range.area {
        Area::Block { start, end } => {
            grid.start_row_index = Some(start.row.saturating_sub(1));
            grid.end_row_index = Some(end.row);
            grid.start_column_index = Some(start.column.saturating_sub(1));
            grid.end_column_index = Some(end.column);
        }
        Area::Columns { first, last } => {
            grid.start_column_index = Some(first.saturating_sub(1));
            grid.end_column_index = Some(*last);
        }
        Area::Rows { first, last } => {
            grid.start_row_index = Some(first.saturating_sub(1));
            grid.end_row_index = Some(*last);
        }
        Area::Named { name } => {
            return Err(Error::validation(format!(
                "named range '{}' has no grid coordinates",
                name
            )));
        }
    }
    Ok(grid)
}

/// Map the set properties of `format`, returning the field mask paths alongside
fn translate_format(format: &CellFormat) -> (UserEnteredFormat, Vec<&'static str>) {
    let mut out = UserEnteredFormat::default();
    let mut fields = Vec::new();

    if let Some(color) = &format.background_color {
        out.background_color = Some(RgbColor::from(Color::parse_lenient(color)));
        fields.push("userEnteredFormat.backgroundColor");
    }

    if format.has_text_format() {
        let mut text = TextFormat::default();
        if let Some(color) = &format.text_color {
            text.foreground_color = Some(RgbColor::from(Color::parse_lenient(color)));
            fields.push("userEnteredFormat.textFormat.foregroundColor");
        }
        if let Some(bold) = format.bold {
            text.bold = Some(bold);
            fields.push("userEnteredFormat.textFormat.bold");
        }
        if let Some(italic) = format.italic {
            text.italic = Some(italic);
            fields.push("userEnteredFormat.textFormat.italic");
        }
        if let Some(underline) = format.underline {
            text.underline = Some(underline);
            fields.push("userEnteredFormat.textFormat.underline");
        }
        if let Some(size) = format.font_size {
            text.font_size = Some(size);
            fields.push("userEnteredFormat.textFormat.fontSize");
        }
        if let Some(family) = &format.font_family {
            text.font_family = Some(family.clone());
            fields.push("userEnteredFormat.textFormat.fontFamily");
        }
        out.text_format = Some(text);
    }

    if let Some(align) = format.horizontal_align {
        out.horizontal_alignment = Some(align.api_name().to_string());
        fields.push("userEnteredFormat.horizontalAlignment");
    }
    if let Some(align) = format.vertical_align {
        out.vertical_alignment = Some(align.api_name().to_string());
        fields.push("userEnteredFormat.verticalAlignment");
    }
    if let Some(pattern) = &format.number_format_pattern {
        out.number_format = Some(NumberFormat {
            kind: NumberFormatKind::classify(pattern).api_name().to_string(),
            pattern: pattern.clone(),
        });
        fields.push("userEnteredFormat.numberFormat");
    }

    (out, fields)
}
