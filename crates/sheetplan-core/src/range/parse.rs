//! A1 range expression parser

use super::{Range, RangeRef};
use crate::cell::{column_to_number, CellRef};
use crate::error::{Error, Result};
use crate::named_range::NamedRangeSet;

/// Parse a range expression
///
/// Accepted forms, optionally behind a `Sheet!` or `'Sheet name'!` prefix:
///
/// - `B7` single cell
/// - `A1:C10` bounded range (corners in any order)
/// - `A:C` full columns
/// - `1:5` full rows
/// - `Revenue` a name present in `named_ranges`
///
/// Without a prefix the range belongs to `current_sheet`.
///
/// # Examples
/// ```
/// use sheetplan_core::{parse_range, CellRef, NamedRangeSet, RangeRef};
///
/// let names = NamedRangeSet::new();
/// let range = parse_range("Sheet2!B2:B4", None, &names).unwrap();
/// assert_eq!(range.sheet.as_deref(), Some("Sheet2"));
/// assert_eq!(
///     range.target,
///     RangeRef::Bounded { start: CellRef::new(2, 2), end: CellRef::new(4, 2) }
/// );
/// ```
pub fn parse_range(
    text: &str,
    current_sheet: Option<&str>,
    named_ranges: &NamedRangeSet,
) -> Result<Range> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidRange("empty range expression".into()));
    }

    let (sheet, body) = split_sheet_prefix(text)?;
    let body = body.trim();
    if body.contains('!') {
        return Err(Error::InvalidRange(format!(
            "more than one sheet prefix in '{}'",
            text
        )));
    }

    let target = parse_body(body, named_ranges)?;
    let sheet = sheet.or_else(|| current_sheet.map(str::to_string));
    Ok(Range::new(sheet, target))
}

/// Split `Sheet!rest` or `'Sheet name'!rest`; a `''` inside quotes is a literal quote
fn split_sheet_prefix(text: &str) -> Result<(Option<String>, &str)> {
    if let Some(rest) = text.strip_prefix('\'') {
        let mut name = String::new();
        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c != '\'' {
                name.push(c);
                continue;
            }
            if matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                name.push('\'');
                continue;
            }
            let body = rest[i + 1..].strip_prefix('!').ok_or_else(|| {
                Error::InvalidRange(format!(
                    "quoted sheet name must be followed by '!' in '{}'",
                    text
                ))
            })?;
            return Ok((Some(checked_sheet_name(name, text)?), body));
        }
        return Err(Error::InvalidRange(format!(
            "unterminated quoted sheet name in '{}'",
            text
        )));
    }

    match text.split_once('!') {
        Some((name, body)) => Ok((Some(checked_sheet_name(name.trim().to_string(), text)?), body)),
        None => Ok((None, text)),
    }
}

fn checked_sheet_name(name: String, text: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidRange(format!("empty sheet name in '{}'", text)));
    }
    Ok(name)
}

fn parse_body(body: &str, named_ranges: &NamedRangeSet) -> Result<RangeRef> {
    if body.is_empty() {
        return Err(Error::InvalidRange("missing range after sheet name".into()));
    }

    if let Some((left, right)) = body.split_once(':') {
        if right.contains(':') {
            return Err(Error::InvalidRange(format!(
                "more than one ':' in '{}'",
                body
            )));
        }
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() {
            return Err(Error::InvalidRange(format!(
                "both sides of ':' are required in '{}'",
                body
            )));
        }

        if !has_digit(left) && !has_digit(right) {
            return Ok(RangeRef::columns(
                column_token(left, body)?,
                column_token(right, body)?,
            ));
        }
        if !has_letter(left) && !has_letter(right) {
            return Ok(RangeRef::rows(row_token(left, body)?, row_token(right, body)?));
        }

        let start = CellRef::parse(left)?;
        let end = CellRef::parse(right)?;
        return Ok(RangeRef::bounded(start, end));
    }

    match CellRef::parse(body) {
        Ok(cell) => Ok(RangeRef::Cell(cell)),
        Err(cell_err) => {
            if is_identifier(body) {
                if let Some(name) = named_ranges.lookup(body) {
                    return Ok(RangeRef::Named {
                        name: name.to_string(),
                    });
                }
            }
            if is_cell_shaped(body) {
                return Err(cell_err);
            }
            Err(Error::InvalidRange(format!(
                "'{}' is not a cell reference or a known named range",
                body
            )))
        }
    }
}

fn has_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

fn has_letter(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_alphabetic())
}

fn column_token(token: &str, body: &str) -> Result<u32> {
    let letters = token.strip_prefix('$').unwrap_or(token);
    column_to_number(letters)
        .map_err(|_| Error::InvalidRange(format!("invalid column '{}' in '{}'", token, body)))
}

fn row_token(token: &str, body: &str) -> Result<u32> {
    let digits = token.strip_prefix('$').unwrap_or(token);
    match digits.parse::<u32>() {
        Ok(row) if row >= 1 && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(row),
        _ => Err(Error::InvalidRange(format!(
            "invalid row '{}' in '{}'",
            token, body
        ))),
    }
}

/// Leading letter or underscore, then letters, digits or underscores
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Letters followed by digits, with optional `$` markers, like `A0` or `$B$00`
fn is_cell_shaped(s: &str) -> bool {
    let s = s.strip_prefix('$').unwrap_or(s);
    let letters = s.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
    if letters == 0 {
        return false;
    }
    let rest = &s[letters..];
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}
