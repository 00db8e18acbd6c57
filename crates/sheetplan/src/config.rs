//! Engine configuration loaded from TOML
//!
//! Every key is optional:
//!
//! ```toml
//! default_sheet = "Sheet1"
//! named_ranges = ["Totals", "Q1_Sales"]
//!
//! [limits]
//! max_rows = 1000
//! max_columns = 50
//!
//! [sampling]
//! window_rows = 25
//! window_columns = 20
//! midpoint_threshold_rows = 200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sheetplan_core::{NamedRangeSet, ResolveLimits};
use sheetplan_profile::SampleConfig;
use thiserror::Error;

/// Errors raised while loading an [`EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Limits, sampling settings and spreadsheet context for the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sheet used for expressions without a sheet prefix
    pub default_sheet: Option<String>,
    /// Named ranges known to the spreadsheet
    pub named_ranges: Vec<String>,
    /// Caps applied when resolving ranges
    pub limits: ResolveLimits,
    /// Profiler window sizes
    pub sampling: SampleConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&input)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Check that every size is at least one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_rows == 0 || self.limits.max_columns == 0 {
            return Err(ConfigError::Validation(
                "limits must allow at least one row and one column".into(),
            ));
        }
        if self.sampling.window_rows == 0 || self.sampling.window_columns == 0 {
            return Err(ConfigError::Validation(
                "sampling windows must be at least 1x1".into(),
            ));
        }
        if let Some(sheet) = &self.default_sheet {
            sheetplan_core::validate_sheet_name(sheet)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        Ok(())
    }

    /// The configured named ranges as a lookup set
    pub fn named_range_set(&self) -> NamedRangeSet {
        let mut set = NamedRangeSet::new();
        for name in &self.named_ranges {
            set.insert(name.as_str());
        }
        set
    }

    pub fn with_default_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.default_sheet = Some(sheet.into());
        self
    }

    pub fn with_limits(mut self, limits: ResolveLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_sampling(mut self, sampling: SampleConfig) -> Self {
        self.sampling = sampling;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = EngineConfig::from_toml(
            r#"
            default_sheet = "Data"
            named_ranges = ["Totals"]

            [limits]
            max_rows = 500

            [sampling]
            midpoint_threshold_rows = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.default_sheet.as_deref(), Some("Data"));
        assert_eq!(config.limits.max_rows, 500);
        assert_eq!(
            config.limits.max_columns,
            ResolveLimits::default().max_columns
        );
        assert_eq!(config.sampling.midpoint_threshold_rows, 50);
        assert_eq!(config.sampling.window_rows, SampleConfig::default().window_rows);
        assert!(config.named_range_set().contains("totals"));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let err = EngineConfig::from_toml("[limits]\nmax_columns = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_sheet_name_rejected() {
        let err = EngineConfig::from_toml("default_sheet = \"a/b\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = EngineConfig::from_toml("[limits\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
