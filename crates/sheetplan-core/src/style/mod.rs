//! Cell formatting types
//!
//! - [`CellFormat`] - The set of formatting properties an operation may apply
//! - [`Color`] - RGB colors parsed from hex strings or names
//! - [`HorizontalAlign`] / [`VerticalAlign`] - Text alignment
//! - [`NumberFormatKind`] - Category of a number format pattern

mod alignment;
mod color;
mod number_format;

pub use alignment::{HorizontalAlign, VerticalAlign};
pub use color::Color;
pub use number_format::NumberFormatKind;

/// Formatting to apply to a range
///
/// Every property is optional; only the ones that are set are sent to the
/// remote API. Colors are kept as the caller wrote them and resolved with
/// [`Color::parse_lenient`] at translation time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CellFormat {
    /// Background fill, hex or color name
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub background_color: Option<String>,
    /// Font color, hex or color name
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text_color: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bold: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub italic: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub underline: Option<bool>,
    /// Font size in points
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_size: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_family: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub horizontal_align: Option<HorizontalAlign>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub vertical_align: Option<VerticalAlign>,
    /// Number format pattern such as `0.00%` or `yyyy-mm-dd`
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", alias = "numberFormat")
    )]
    pub number_format_pattern: Option<String>,
}

impl CellFormat {
    /// Create an empty format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn with_background_color<S: Into<String>>(mut self, color: S) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the font color
    pub fn with_text_color<S: Into<String>>(mut self, color: S) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set font size in points
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Set the number format pattern
    pub fn with_number_format<S: Into<String>>(mut self, pattern: S) -> Self {
        self.number_format_pattern = Some(pattern.into());
        self
    }

    /// Whether any text property (color, weight, size, family) is set
    pub fn has_text_format(&self) -> bool {
        self.text_color.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.underline.is_some()
            || self.font_size.is_some()
            || self.font_family.is_some()
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && !self.has_text_format()
            && self.horizontal_align.is_none()
            && self.vertical_align.is_none()
            && self.number_format_pattern.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_format() {
        assert!(CellFormat::new().is_empty());
        assert!(!CellFormat::new().with_bold(false).is_empty());
        assert!(!CellFormat::new().with_number_format("0%").is_empty());
    }

    #[test]
    fn test_builder() {
        let format = CellFormat::new()
            .with_bold(true)
            .with_text_color("#FF0000")
            .with_horizontal_align(HorizontalAlign::Center);
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.text_color.as_deref(), Some("#FF0000"));
        assert_eq!(format.horizontal_align, Some(HorizontalAlign::Center));
        assert!(format.has_text_format());
        assert!(!CellFormat::new()
            .with_background_color("yellow")
            .has_text_format());
    }
}
