//! Column letter codec and cell references

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Convert column letters to a 1-based column number (A = 1, Z = 26, AA = 27)
///
/// Letters form a bijective base-26 numeral: the digits A-Z stand for 1-26,
/// so there is no zero digit. Lowercase letters are accepted.
///
/// # Examples
/// ```
/// use sheetplan_core::column_to_number;
///
/// assert_eq!(column_to_number("A").unwrap(), 1);
/// assert_eq!(column_to_number("az").unwrap(), 52);
/// assert!(column_to_number("A1").is_err());
/// ```
pub fn column_to_number(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidReference("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidReference(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidReference(format!("column '{}' is too large", letters)))?;
    }

    Ok(col)
}

/// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
pub fn number_to_column(n: u32) -> Result<String> {
    if n < 1 {
        return Err(Error::InvalidReference(format!(
            "column number must be >= 1, got {}",
            n
        )));
    }

    let mut result = String::new();
    let mut n = n;
    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    Ok(result)
}

/// A single cell position, 1-based on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCellRef"))]
pub struct CellRef {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A = 1)
    pub column: u32,
}

impl CellRef {
    /// Create a cell reference from 1-based row and column numbers
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// `$` absolute markers are accepted and dropped.
    ///
    /// # Examples
    /// ```
    /// use sheetplan_core::CellRef;
    ///
    /// assert_eq!(CellRef::parse("B7").unwrap(), CellRef::new(7, 2));
    /// assert_eq!(CellRef::parse("$c$10").unwrap(), CellRef::new(10, 3));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidReference("empty cell reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::InvalidReference(format!(
                "no column letters in '{}'",
                s
            )));
        }
        let column = column_to_number(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidReference(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("row number too large in '{}'", s)))?;
        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, column })
    }

    /// Column letters of this reference
    pub fn column_letters(&self) -> String {
        number_to_column(self.column).unwrap_or_default()
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column_letters(), self.row)
    }

    /// Move the reference by whole rows and columns, saturating at the u32 limit
    pub fn offset(&self, rows: u32, columns: u32) -> Self {
        Self {
            row: self.row.saturating_add(rows),
            column: self.column.saturating_add(columns),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCellRef {
    row: u32,
    column: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCellRef> for CellRef {
    type Error = Error;

    fn try_from(raw: RawCellRef) -> Result<Self> {
        if raw.row == 0 || raw.column == 0 {
            return Err(Error::InvalidReference(format!(
                "row and column must be >= 1, got row {} column {}",
                raw.row, raw.column
            )));
        }
        Ok(Self::new(raw.row, raw.column))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_number_to_column() {
        assert_eq!(number_to_column(1).unwrap(), "A");
        assert_eq!(number_to_column(2).unwrap(), "B");
        assert_eq!(number_to_column(26).unwrap(), "Z");
        assert_eq!(number_to_column(27).unwrap(), "AA");
        assert_eq!(number_to_column(28).unwrap(), "AB");
        assert_eq!(number_to_column(702).unwrap(), "ZZ");
        assert_eq!(number_to_column(703).unwrap(), "AAA");
        assert_eq!(number_to_column(18278).unwrap(), "ZZZ");
    }

    #[test]
    fn test_number_to_column_rejects_zero() {
        assert!(matches!(
            number_to_column(0),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_column_to_number() {
        assert_eq!(column_to_number("A").unwrap(), 1);
        assert_eq!(column_to_number("Z").unwrap(), 26);
        assert_eq!(column_to_number("AA").unwrap(), 27);
        assert_eq!(column_to_number("ZZ").unwrap(), 702);
        assert_eq!(column_to_number("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(column_to_number("a").unwrap(), 1);
        assert_eq!(column_to_number("aA").unwrap(), 27);
    }

    #[test]
    fn test_column_to_number_errors() {
        for bad in ["", "A1", "Ä", "A-B", " "] {
            assert!(
                matches!(column_to_number(bad), Err(Error::InvalidReference(_))),
                "{bad:?} should be rejected"
            );
        }
        // u32 overflow
        assert!(column_to_number("ZZZZZZZZZZ").is_err());
    }

    #[test]
    fn test_cell_ref_parse() {
        assert_eq!(CellRef::parse("A1").unwrap(), CellRef::new(1, 1));
        assert_eq!(CellRef::parse("b2").unwrap(), CellRef::new(2, 2));
        assert_eq!(CellRef::parse("$A$1").unwrap(), CellRef::new(1, 1));
        assert_eq!(CellRef::parse("A$9").unwrap(), CellRef::new(9, 1));
        assert_eq!(CellRef::parse("AB100").unwrap(), CellRef::new(100, 28));
    }

    #[test]
    fn test_cell_ref_parse_errors() {
        for bad in ["", "A", "1", "A0", "1A", "A1B", "A-1", "$$A1"] {
            assert!(
                matches!(CellRef::parse(bad), Err(Error::InvalidReference(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(1, 1).to_string(), "A1");
        assert_eq!(CellRef::new(100, 3).to_string(), "C100");
        assert_eq!(CellRef::new(7, 27).to_a1_string(), "AA7");
    }

    #[test]
    fn test_round_trip_through_three_letters() {
        for n in 1..=18278u32 {
            let letters = number_to_column(n).unwrap();
            assert_eq!(column_to_number(&letters).unwrap(), n);
        }
    }

    proptest! {
        #[test]
        fn prop_number_round_trip(n in 1u32..=1_000_000) {
            let letters = number_to_column(n).unwrap();
            prop_assert_eq!(column_to_number(&letters).unwrap(), n);
        }

        #[test]
        fn prop_letters_round_trip(s in "[a-zA-Z]{1,5}") {
            let n = column_to_number(&s).unwrap();
            prop_assert_eq!(number_to_column(n).unwrap(), s.to_uppercase());
        }
    }
}
