//! Path management for Saving Money Cat
//!
//! Provides XDG-compliant path resolution for the settings file, the
//! activity log and rendered charts.
//!
//! ## Path Resolution Order
//!
//! 1. `SAVING_CAT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/saving-cat` or `~/.config/saving-cat`
//! 3. Windows: `%APPDATA%\saving-cat`

use std::path::PathBuf;

use crate::error::CatError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SAVING_CAT_DATA_DIR";

/// Manages all paths used by Saving Money Cat
#[derive(Debug, Clone)]
pub struct CatPaths {
    base_dir: PathBuf,
}

impl CatPaths {
    /// Create a new CatPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CatError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CatPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/saving-cat/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Get the default directory for SVG charts
    pub fn chart_dir(&self) -> PathBuf {
        self.base_dir.join("charts")
    }

    /// Ensure the base and chart directories exist
    pub fn ensure_directories(&self) -> Result<(), CatError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CatError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.chart_dir())
            .map_err(|e| CatError::Io(format!("Failed to create chart directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CatError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| CatError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("saving-cat"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CatError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CatError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("saving-cat"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.chart_dir(), temp_dir.path().join("charts"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.activity_log(), temp_dir.path().join("activity.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = CatPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.chart_dir().exists());
    }
}
