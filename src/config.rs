//! Summary configuration.
//!
//! A [`SummaryConfig`] can be built in code with the `with_*` methods or
//! loaded from TOML, JSON or YAML. Every field has a default, so a config
//! file only needs the keys it wants to change:
//!
//! ```toml
//! missing = "fill"
//! on_missing_column = "error"
//! round_digits = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How missing numeric values are treated before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Remove rows missing a value in any selected column
    #[default]
    Drop,
    /// Replace missing values with the column's own mean
    Fill,
    /// Skip missing values inside each reduction
    Ignore,
}

/// What to do when a requested numeric column is absent (or not numeric)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissingColumn {
    /// Leave it out of the summary and log a warning
    #[default]
    Skip,
    /// Fail the whole summary
    Error,
}

/// Options shared by the summary operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub missing: MissingPolicy,
    pub on_missing_column: OnMissingColumn,
    /// Decimal places kept in numeric statistics and percentages
    pub round_digits: u32,
    /// Aggregate numeric columns on the rayon pool
    pub parallel: bool,
    /// Appended to a column name to name its tenure-segment column
    pub segment_suffix: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            missing: MissingPolicy::Drop,
            on_missing_column: OnMissingColumn::Skip,
            round_digits: 2,
            parallel: false,
            segment_suffix: "_segment".to_string(),
        }
    }
}

impl SummaryConfig {
    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_on_missing_column(mut self, on_missing_column: OnMissingColumn) -> Self {
        self.on_missing_column = on_missing_column;
        self
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_segment_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.segment_suffix = suffix.into();
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a config file, picking the format from its extension
    /// (`.toml`, `.json`, `.yaml` or `.yml`)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading summary config from {}", path.display());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(Error::Config(format!(
                "unsupported config file extension: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummaryConfig::default();
        assert_eq!(config.missing, MissingPolicy::Drop);
        assert_eq!(config.on_missing_column, OnMissingColumn::Skip);
        assert_eq!(config.round_digits, 2);
        assert!(!config.parallel);
        assert_eq!(config.segment_suffix, "_segment");
    }

    #[test]
    fn test_partial_toml() {
        let config = SummaryConfig::from_toml_str("missing = \"fill\"\nround_digits = 3\n").unwrap();
        assert_eq!(config.missing, MissingPolicy::Fill);
        assert_eq!(config.round_digits, 3);
        assert_eq!(config.on_missing_column, OnMissingColumn::Skip);
    }

    #[test]
    fn test_json_and_yaml() {
        let json = SummaryConfig::from_json_str(r#"{"on_missing_column": "error", "parallel": true}"#)
            .unwrap();
        assert_eq!(json.on_missing_column, OnMissingColumn::Error);
        assert!(json.parallel);

        let yaml = SummaryConfig::from_yaml_str("missing: ignore\n").unwrap();
        assert_eq!(yaml.missing, MissingPolicy::Ignore);
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        assert!(matches!(
            SummaryConfig::from_toml_str("missing = \"guess\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SummaryConfig::from_json_str(r#"{"colour": "blue"}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = SummaryConfig::default()
            .with_missing_policy(MissingPolicy::Ignore)
            .with_on_missing_column(OnMissingColumn::Error)
            .with_round_digits(4)
            .with_parallel(true)
            .with_segment_suffix("_bucket");
        assert_eq!(config.missing, MissingPolicy::Ignore);
        assert_eq!(config.on_missing_column, OnMissingColumn::Error);
        assert_eq!(config.round_digits, 4);
        assert!(config.parallel);
        assert_eq!(config.segment_suffix, "_bucket");
    }
}
