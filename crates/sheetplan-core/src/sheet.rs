//! Sheet naming rules

use crate::error::{Error, Result};

/// Maximum length of a sheet name, in characters
pub const MAX_SHEET_NAME_LEN: usize = 100;

/// Characters a sheet name may not contain
pub const FORBIDDEN_SHEET_NAME_CHARS: &[char] = &['[', ']', '?', '*', '\\', ':', '/'];

/// Check a name for a new sheet
///
/// # Examples
/// ```
/// use sheetplan_core::validate_sheet_name;
///
/// assert!(validate_sheet_name("Q1 Sales").is_ok());
/// assert!(validate_sheet_name("Q1/Q2").is_err());
/// ```
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_NAME_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["Sheet1", "Q1 Sales", "Bob's data", "Données 2024", "a"] {
            assert!(validate_sheet_name(name).is_ok(), "{name}");
        }
        assert!(validate_sheet_name(&"x".repeat(MAX_SHEET_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            validate_sheet_name(""),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(matches!(
            validate_sheet_name("   "),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(validate_sheet_name(&"x".repeat(MAX_SHEET_NAME_LEN + 1)).is_err());
        for c in FORBIDDEN_SHEET_NAME_CHARS {
            let name = format!("Bad{}Name", c);
            assert!(
                matches!(validate_sheet_name(&name), Err(Error::InvalidSheetName(_))),
                "{name}"
            );
        }
    }
}
