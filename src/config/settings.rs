//! User settings for Saving Money Cat
//!
//! Manages preferences for the console tracker: currency symbol, default
//! month length, expense categories, chart output and the activity log.

use serde::{Deserialize, Serialize};

use super::paths::CatPaths;
use crate::error::CatError;

/// Where monthly-summary charts go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartOutput {
    /// Text bars drawn on stdout (default)
    #[default]
    Terminal,
    /// SVG files written to the chart directory
    Svg,
    /// No charts
    None,
}

/// User settings for Saving Money Cat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Month length used when the day prompt is left blank
    #[serde(default = "default_days")]
    pub default_days: u32,

    /// Categories asked for when logging a day's expenses
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Chart output for the monthly summary
    #[serde(default)]
    pub chart_output: ChartOutput,

    /// Whether tracker operations are appended to the activity log
    #[serde(default)]
    pub activity_log: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_days() -> u32 {
    30
}

fn default_categories() -> Vec<String> {
    ["Food", "Transport", "Entertainment", "Shopping", "Misc"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_days: default_days(),
            categories: default_categories(),
            chart_output: ChartOutput::default(),
            activity_log: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CatPaths) -> Result<Self, CatError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Nothing is written until the caller asks for it
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CatError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CatError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.default_days == 0 {
            return Err(CatError::Config("default_days must be at least 1".into()));
        }
        if settings.categories.is_empty() {
            settings.categories = default_categories();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CatPaths) -> Result<(), CatError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CatError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CatError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_days, 30);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(
            settings.categories,
            vec!["Food", "Transport", "Entertainment", "Shopping", "Misc"]
        );
        assert_eq!(settings.chart_output, ChartOutput::Terminal);
        assert!(!settings.activity_log);
    }

    #[test]
    fn test_missing_file_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_days, 30);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_days = 31;
        settings.chart_output = ChartOutput::Svg;
        settings.activity_log = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_days, 31);
        assert_eq!(loaded.chart_output, ChartOutput::Svg);
        assert!(loaded.activity_log);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_days, 30);
        assert_eq!(loaded.categories.len(), 5);
    }

    #[test]
    fn test_zero_default_days_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_days": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CatError::Config(_)));
    }
}
