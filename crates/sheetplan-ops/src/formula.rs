//! Formula text normalization

use sheetplan_core::{Error, Result};

/// Normalize formula text for writing
///
/// Surrounding whitespace is trimmed and a leading `=` is added when
/// missing. Parentheses must balance; parentheses inside double-quoted
/// string literals (where `""` is an escaped quote) are not counted.
///
/// # Examples
/// ```
/// use sheetplan_ops::normalize_formula;
///
/// assert_eq!(normalize_formula("SUM(A1:A3)").unwrap(), "=SUM(A1:A3)");
/// assert_eq!(normalize_formula("=CONCAT(\"(\", B1)").unwrap(), "=CONCAT(\"(\", B1)");
/// assert!(normalize_formula("=SUM(A1:A3").is_err());
/// ```
pub fn normalize_formula(text: &str) -> Result<String> {
    let text = text.trim();
    let body = text.strip_prefix('=').unwrap_or(text).trim_start();
    if body.is_empty() {
        return Err(Error::validation("formula is empty"));
    }

    check_balance(body)?;
    Ok(format!("={}", body))
}

fn check_balance(body: &str) -> Result<()> {
    let mut depth: usize = 0;
    let mut in_string = false;

    for (i, c) in body.char_indices() {
        match c {
            // A doubled quote toggles twice, which leaves us inside the literal
            '"' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::UnbalancedFormula(format!(
                        "unexpected ')' at position {} in '={}'",
                        i + 1,
                        body
                    ))
                })?;
            }
            _ => {}
        }
    }

    if in_string {
        return Err(Error::UnbalancedFormula(format!(
            "unterminated string literal in '={}'",
            body
        )));
    }
    if depth > 0 {
        return Err(Error::UnbalancedFormula(format!(
            "{} unclosed '(' in '={}'",
            depth, body
        )));
    }
    Ok(())
}
