//! Number format patterns

/// Category of a number format pattern, as the remote API names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormatKind {
    /// `@`
    Text,
    /// Plain numbers (`0.00`, `#,##0`)
    Number,
    /// `0%`
    Percent,
    /// `$#,##0.00`
    Currency,
    /// `yyyy-mm-dd`
    Date,
    /// `hh:mm:ss`
    Time,
    /// `yyyy-mm-dd hh:mm`
    DateTime,
    /// `0.00E+00`
    Scientific,
}

impl NumberFormatKind {
    /// Classify a pattern string
    ///
    /// Quoted literals and bracketed sections such as `[Red]` are ignored,
    /// except that a `[$...]` locale tag marks a currency.
    ///
    /// # Examples
    /// ```
    /// use sheetplan_core::NumberFormatKind;
    ///
    /// assert_eq!(NumberFormatKind::classify("yyyy-mm-dd"), NumberFormatKind::Date);
    /// assert_eq!(NumberFormatKind::classify("0.0%"), NumberFormatKind::Percent);
    /// assert_eq!(NumberFormatKind::classify("#,##0"), NumberFormatKind::Number);
    /// ```
    pub fn classify(pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern == "@" {
            return NumberFormatKind::Text;
        }

        let mut bare = String::with_capacity(pattern.len());
        let mut currency_tag = false;
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' => {
                    for q in chars.by_ref() {
                        if q == '"' {
                            break;
                        }
                    }
                }
                '[' => {
                    if chars.peek() == Some(&'$') {
                        currency_tag = true;
                    }
                    for q in chars.by_ref() {
                        if q == ']' {
                            break;
                        }
                    }
                }
                '\\' => {
                    chars.next();
                }
                _ => bare.push(c.to_ascii_lowercase()),
            }
        }

        if bare.contains('%') {
            return NumberFormatKind::Percent;
        }
        if bare.contains("e+") || bare.contains("e-") {
            return NumberFormatKind::Scientific;
        }
        if currency_tag || bare.chars().any(|c| matches!(c, '$' | '€' | '£' | '¥')) {
            return NumberFormatKind::Currency;
        }

        let has_date = bare.contains('y') || bare.contains('d');
        let has_time = bare.contains('h') || bare.contains('s');
        match (has_date, has_time) {
            (true, true) => NumberFormatKind::DateTime,
            (true, false) => NumberFormatKind::Date,
            (false, true) => NumberFormatKind::Time,
            (false, false) if bare.contains('m') => NumberFormatKind::Date,
            _ => NumberFormatKind::Number,
        }
    }

    /// Name used by the remote API
    pub fn api_name(&self) -> &'static str {
        match self {
            NumberFormatKind::Text => "TEXT",
            NumberFormatKind::Number => "NUMBER",
            NumberFormatKind::Percent => "PERCENT",
            NumberFormatKind::Currency => "CURRENCY",
            NumberFormatKind::Date => "DATE",
            NumberFormatKind::Time => "TIME",
            NumberFormatKind::DateTime => "DATE_TIME",
            NumberFormatKind::Scientific => "SCIENTIFIC",
        }
    }
}
