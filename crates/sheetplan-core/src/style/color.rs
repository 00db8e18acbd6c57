//! Color representation

use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Names accepted by [`Color::from_name`]
const NAMED_COLORS: [(&str, Color); 9] = [
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("orange", Color::ORANGE),
    ("purple", Color::PURPLE),
    ("gray", Color::GRAY),
];

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Look up one of the fixed color names (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, color)| *color)
    }

    /// Parse a hex string or color name; anything unrecognized is black
    ///
    /// # Examples
    /// ```
    /// use sheetplan_core::Color;
    ///
    /// assert_eq!(Color::parse_lenient("#FF0000"), Color::RED);
    /// assert_eq!(Color::parse_lenient("Orange"), Color::ORANGE);
    /// assert_eq!(Color::parse_lenient("chartreuse"), Color::BLACK);
    /// ```
    pub fn parse_lenient(spec: &str) -> Self {
        let spec = spec.trim();
        match Color::from_hex(spec).or_else(|| Color::from_name(spec)) {
            Some(color) => color,
            None => {
                tracing::debug!(color = spec, "unrecognized color, using black");
                Color::BLACK
            }
        }
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to the 0.0-1.0 range
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("#80FFFFFF"), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("white"), Some(Color::WHITE));
        assert_eq!(Color::from_name("GRAY"), Some(Color::GRAY));
        assert_eq!(Color::from_name("grey"), None);
        assert_eq!(Color::from_name("cyan"), None);
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        assert_eq!(Color::parse_lenient(""), Color::BLACK);
        assert_eq!(Color::parse_lenient("not-a-color"), Color::BLACK);
        assert_eq!(Color::parse_lenient("  blue "), Color::BLUE);
    }

    #[test]
    fn test_to_unit_rgb() {
        assert_eq!(Color::RED.to_unit_rgb(), (1.0, 0.0, 0.0));
        assert_eq!(Color::WHITE.to_unit_rgb(), (1.0, 1.0, 1.0));
        let (r, g, b) = Color::GRAY.to_unit_rgb();
        assert!((r - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::ORANGE.to_string(), "#FFA500");
    }
}
