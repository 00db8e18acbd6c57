//! Range expressions
//!
//! A [`Range`] is the normalized form of an A1 expression such as `B2:D9`,
//! `'Q1 Sales'!A:C`, `3:7` or a named range. Parsing lives in [`parse`],
//! filling in missing bounds and applying size caps in [`resolve`].

mod parse;
mod resolve;

pub use parse::parse_range;
pub use resolve::{
    resolve_range, Area, Resolution, ResolveLimits, ResolvedRange, TruncationWarning,
    DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS,
};

use crate::cell::{number_to_column, CellRef};
use crate::error::{Error, Result};
use crate::named_range::NamedRangeSet;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The syntactic kind of a range expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeKind {
    /// A single cell (`A1`)
    Cell,
    /// Both corners given (`A1:C10`)
    BoundedRange,
    /// Whole columns (`A:C`)
    FullColumn,
    /// Whole rows (`1:5`)
    FullRow,
    /// A user-defined name
    NamedRange,
}

/// What a range expression points at, without its sheet qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case", try_from = "RawRangeRef")
)]
pub enum RangeRef {
    /// A single cell
    Cell(CellRef),
    /// A block with both corners known; `start` is always top-left
    Bounded { start: CellRef, end: CellRef },
    /// Whole columns, `first <= last`, rows open
    Columns { first: u32, last: u32 },
    /// Whole rows, `first <= last`, columns open
    Rows { first: u32, last: u32 },
    /// A named range, resolved by the remote spreadsheet
    Named { name: String },
}

impl RangeRef {
    /// Create a bounded block, swapping corners so `start` is top-left
    pub fn bounded(a: CellRef, b: CellRef) -> Self {
        RangeRef::Bounded {
            start: CellRef::new(a.row.min(b.row), a.column.min(b.column)),
            end: CellRef::new(a.row.max(b.row), a.column.max(b.column)),
        }
    }

    /// Create a full-column span in either order
    pub fn columns(a: u32, b: u32) -> Self {
        RangeRef::Columns {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// Create a full-row span in either order
    pub fn rows(a: u32, b: u32) -> Self {
        RangeRef::Rows {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// Same range with corners and spans in top-left order
    pub fn normalized(&self) -> Self {
        match self {
            RangeRef::Bounded { start, end } => RangeRef::bounded(*start, *end),
            RangeRef::Columns { first, last } => RangeRef::columns(*first, *last),
            RangeRef::Rows { first, last } => RangeRef::rows(*first, *last),
            other => other.clone(),
        }
    }

    /// The syntactic kind
    pub fn kind(&self) -> RangeKind {
        match self {
            RangeRef::Cell(_) => RangeKind::Cell,
            RangeRef::Bounded { .. } => RangeKind::BoundedRange,
            RangeRef::Columns { .. } => RangeKind::FullColumn,
            RangeRef::Rows { .. } => RangeKind::FullRow,
            RangeRef::Named { .. } => RangeKind::NamedRange,
        }
    }

    /// Render without a sheet qualifier
    pub fn to_a1_string(&self) -> String {
        match self {
            RangeRef::Cell(cell) => cell.to_a1_string(),
            RangeRef::Bounded { start, end } => format!("{}:{}", start, end),
            RangeRef::Columns { first, last } => format!(
                "{}:{}",
                number_to_column(*first).unwrap_or_default(),
                number_to_column(*last).unwrap_or_default()
            ),
            RangeRef::Rows { first, last } => format!("{}:{}", first, last),
            RangeRef::Named { name } => name.clone(),
        }
    }
}

/// Wire form of [`RangeRef`], checked and normalized on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawRangeRef {
    Cell(CellRef),
    Bounded { start: CellRef, end: CellRef },
    Columns { first: u32, last: u32 },
    Rows { first: u32, last: u32 },
    Named { name: String },
}

#[cfg(feature = "serde")]
impl TryFrom<RawRangeRef> for RangeRef {
    type Error = Error;

    fn try_from(raw: RawRangeRef) -> Result<Self> {
        let target = match raw {
            RawRangeRef::Cell(cell) => RangeRef::Cell(cell),
            RawRangeRef::Bounded { start, end } => RangeRef::bounded(start, end),
            RawRangeRef::Columns { first, last } => {
                if first == 0 || last == 0 {
                    return Err(Error::InvalidReference(format!(
                        "column numbers must be >= 1, got {}:{}",
                        first, last
                    )));
                }
                RangeRef::columns(first, last)
            }
            RawRangeRef::Rows { first, last } => {
                if first == 0 || last == 0 {
                    return Err(Error::InvalidReference(format!(
                        "row numbers must be >= 1, got {}:{}",
                        first, last
                    )));
                }
                RangeRef::rows(first, last)
            }
            RawRangeRef::Named { name } => {
                if name.trim().is_empty() {
                    return Err(Error::InvalidRange("empty range name".into()));
                }
                RangeRef::Named { name }
            }
        };
        Ok(target)
    }
}

/// A parsed range expression, optionally qualified by a sheet name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Sheet the range belongs to; `None` means the spreadsheet's default sheet
    pub sheet: Option<String>,
    /// The addressed cells
    pub target: RangeRef,
}

impl Range {
    /// Create a range on an optional sheet
    pub fn new(sheet: Option<String>, target: RangeRef) -> Self {
        Self { sheet, target }
    }

    /// Create a single-cell range
    pub fn cell(sheet: Option<String>, cell: CellRef) -> Self {
        Self::new(sheet, RangeRef::Cell(cell))
    }

    /// The `A1` anchor used when a write names no range
    pub fn default_anchor(sheet: Option<String>) -> Self {
        Self::cell(sheet, CellRef::new(1, 1))
    }

    /// Parse an expression with no current sheet and no named ranges
    pub fn parse(text: &str) -> Result<Self> {
        parse_range(text, None, &NamedRangeSet::new())
    }

    /// The syntactic kind
    pub fn kind(&self) -> RangeKind {
        self.target.kind()
    }

    /// Top-left corner, when the expression has one
    ///
    /// Full-column and full-row ranges start at row 1 or column 1 of their
    /// span. Named ranges have no known start.
    pub fn start(&self) -> Option<CellRef> {
        match &self.target {
            RangeRef::Cell(cell) => Some(*cell),
            RangeRef::Bounded { start, .. } => Some(*start),
            RangeRef::Columns { first, .. } => Some(CellRef::new(1, *first)),
            RangeRef::Rows { first, .. } => Some(CellRef::new(*first, 1)),
            RangeRef::Named { .. } => None,
        }
    }

    /// Bottom-right corner, present only for bounded ranges
    pub fn end(&self) -> Option<CellRef> {
        match &self.target {
            RangeRef::Bounded { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Render as A1 text, quoting the sheet name when needed
    pub fn to_a1_string(&self) -> String {
        qualify(self.sheet.as_deref(), &self.target.to_a1_string())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Quote a sheet name for use in an A1 prefix
///
/// Plain identifiers are left alone; anything else, including names that
/// read as a cell reference, is wrapped in single quotes with embedded
/// quotes doubled.
pub fn quote_sheet_name(name: &str) -> Cow<'_, str> {
    let plain = name
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && CellRef::parse(name).is_err();
    if plain {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", name.replace('\'', "''")))
    }
}

pub(crate) fn qualify(sheet: Option<&str>, body: &str) -> String {
    match sheet {
        Some(sheet) => format!("{}!{}", quote_sheet_name(sheet), body),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_normalizes_corners() {
        let r = RangeRef::bounded(CellRef::new(10, 3), CellRef::new(1, 1));
        assert_eq!(
            r,
            RangeRef::Bounded {
                start: CellRef::new(1, 1),
                end: CellRef::new(10, 3)
            }
        );

        // Mixed corners swap per axis
        let r = RangeRef::bounded(CellRef::new(1, 5), CellRef::new(4, 2));
        assert_eq!(r.to_a1_string(), "B1:E4");
    }

    #[test]
    fn test_quote_sheet_name() {
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
        assert_eq!(quote_sheet_name("Q1 Sales"), "'Q1 Sales'");
        assert_eq!(quote_sheet_name("Bob's"), "'Bob''s'");
        assert_eq!(quote_sheet_name("A1"), "'A1'");
        assert_eq!(quote_sheet_name("2024"), "'2024'");
    }

    #[test]
    fn test_range_display() {
        let range = Range::new(Some("Data Sheet".into()), RangeRef::columns(3, 1));
        assert_eq!(range.to_string(), "'Data Sheet'!A:C");

        let range = Range::new(None, RangeRef::rows(5, 2));
        assert_eq!(range.to_string(), "2:5");
    }

    #[test]
    fn test_start_and_end() {
        let range = Range::new(None, RangeRef::columns(2, 4));
        assert_eq!(range.start(), Some(CellRef::new(1, 2)));
        assert_eq!(range.end(), None);

        let range = Range::new(
            None,
            RangeRef::Named {
                name: "Revenue".into(),
            },
        );
        assert_eq!(range.start(), None);
        assert_eq!(range.kind(), RangeKind::NamedRange);
    }
}
