//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetplan_core::{
    parse_range, resolve_range, Area, Grid, NamedRangeSet, ResolveLimits, ResolvedRange,
    ScalarValue,
};
use sheetplan_profile::{
    profile_sheet, ReadError, SampleConfig, SampleGrid, SampledCell, SheetDescriptor, SheetReader,
    SheetSample,
};

/// Title used when neither the options nor the path name the sheet
const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// A CSV file loaded as a single sheet
///
/// Every record is a row, the first one included; header detection is left
/// to the profiler. Records may have different lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvSheet {
    title: String,
    rows: Vec<Vec<SampledCell>>,
}

impl CsvSheet {
    /// Read a CSV file
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut options = options.clone();
        if options.sheet_name.is_none() {
            options.sheet_name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string);
        }
        Self::read(file, &options)
    }

    /// Read CSV from any reader
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<SampledCell> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        SampledCell::new(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        let title = options
            .sheet_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());
        tracing::debug!(sheet = %title, rows = rows.len(), "loaded csv sheet");
        Ok(Self { title, rows })
    }

    /// Sheet title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Size of the sheet, widest row deciding the column count
    pub fn descriptor(&self) -> SheetDescriptor {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        SheetDescriptor::new(self.title.clone(), self.rows.len() as u32, columns as u32)
    }

    /// Profile the whole sheet
    pub fn profile(&self, config: &SampleConfig) -> CsvResult<SheetSample> {
        Ok(profile_sheet(&self.descriptor(), self, config)?)
    }

    /// Values in a range expression such as `A1:C10` or `B:B`
    ///
    /// Open axes are bounded by the data and by `limits`. A sheet prefix
    /// other than this sheet's title is an error.
    pub fn values(&self, expression: &str, limits: &ResolveLimits) -> CsvResult<Grid> {
        let range = parse_range(expression, Some(&self.title), &NamedRangeSet::new())?;
        let resolution = resolve_range(&range, None, limits);
        self.check_sheet(&resolution.range)?;
        let block = self.bounded(&resolution.range, limits);
        let grid = self
            .cells(block)
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.value).collect())
            .collect();
        Ok(grid)
    }

    fn check_sheet(&self, range: &ResolvedRange) -> Result<(), ReadError> {
        match &range.sheet {
            Some(sheet) if !sheet.eq_ignore_ascii_case(&self.title) => {
                Err(ReadError::SheetNotFound(sheet.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Turn open axes into bounds: the data's extent, capped by `limits`
    fn bounded(&self, range: &ResolvedRange, limits: &ResolveLimits) -> (u32, u32, u32, u32) {
        let height = (self.rows.len() as u32).min(limits.max_rows.max(1)).max(1);
        let width = (self.descriptor().column_count)
            .min(limits.max_columns.max(1))
            .max(1);
        match &range.area {
            Area::Block { start, end } => (start.row, end.row, start.column, end.column),
            Area::Columns { first, last } => (1, height, *first, *last),
            Area::Rows { first, last } => (*first, *last, 1, width),
            Area::Named { .. } => (1, 0, 1, 0),
        }
    }

    /// Cells in a 1-based inclusive block, clipped to the data
    fn cells(&self, block: (u32, u32, u32, u32)) -> SampleGrid {
        let (first_row, last_row, first_column, last_column) = block;
        (first_row..=last_row)
            .filter_map(|r| self.rows.get(r as usize - 1))
            .map(|row| {
                (first_column..=last_column)
                    .map_while(|c| row.get(c as usize - 1).cloned())
                    .collect()
            })
            .collect()
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> SampledCell {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return SampledCell::new(ScalarValue::Empty);
        }

        if trimmed.starts_with('=') {
            return SampledCell::with_formula(ScalarValue::Empty, trimmed);
        }

        // Try boolean
        if trimmed.eq_ignore_ascii_case("true") {
            return SampledCell::new(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return SampledCell::new(false);
        }

        // Try number
        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return SampledCell::new(n);
                }
            }
        }

        // Default to text, dates included
        SampledCell::new(trimmed)
    }
}

impl SheetReader for CsvSheet {
    fn read_window(&self, range: &ResolvedRange) -> Result<SampleGrid, ReadError> {
        self.check_sheet(range)?;
        match &range.area {
            Area::Block { start, end } => {
                Ok(self.cells((start.row, end.row, start.column, end.column)))
            }
            _ => Err(ReadError::Transport(format!(
                "window {} is not a bounded block",
                range
            ))),
        }
    }
}
