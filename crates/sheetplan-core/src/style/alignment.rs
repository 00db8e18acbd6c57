//! Text alignment types

use crate::error::{Error, Result};
use std::str::FromStr;

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlign {
    /// Left aligned
    #[cfg_attr(feature = "serde", serde(alias = "LEFT"))]
    Left,
    /// Center aligned
    #[cfg_attr(feature = "serde", serde(alias = "CENTER", alias = "centre"))]
    Center,
    /// Right aligned
    #[cfg_attr(feature = "serde", serde(alias = "RIGHT"))]
    Right,
}

impl HorizontalAlign {
    /// Name used by the remote API
    pub fn api_name(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "LEFT",
            HorizontalAlign::Center => "CENTER",
            HorizontalAlign::Right => "RIGHT",
        }
    }
}

impl FromStr for HorizontalAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAlign::Left),
            "center" | "centre" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            other => Err(Error::validation(format!(
                "unknown horizontal alignment '{}'",
                other
            ))),
        }
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAlign {
    /// Top aligned
    #[cfg_attr(feature = "serde", serde(alias = "TOP"))]
    Top,
    /// Vertically centered
    #[cfg_attr(feature = "serde", serde(alias = "MIDDLE", alias = "center"))]
    Middle,
    /// Bottom aligned
    #[cfg_attr(feature = "serde", serde(alias = "BOTTOM"))]
    Bottom,
}

impl VerticalAlign {
    /// Name used by the remote API
    pub fn api_name(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "TOP",
            VerticalAlign::Middle => "MIDDLE",
            VerticalAlign::Bottom => "BOTTOM",
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VerticalAlign::Top),
            "middle" | "center" => Ok(VerticalAlign::Middle),
            "bottom" => Ok(VerticalAlign::Bottom),
            other => Err(Error::validation(format!(
                "unknown vertical alignment '{}'",
                other
            ))),
        }
    }
}
