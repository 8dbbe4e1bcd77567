//! Debounce configuration
//!
//! ```toml
//! [debounce]
//! delay_ms = 300
//! ```
//!
//! The `[debounce]` table is optional; a bare `delay_ms` key at the top level
//! is accepted too. Missing values fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default quiet window (keystroke-friendly)
pub const DEFAULT_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet window in milliseconds
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    debounce: Option<DebounceConfig>,
    #[serde(flatten)]
    top_level: DebounceConfig,
}

impl DebounceConfig {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).context("Failed to parse debounce config")?;
        Ok(file.debounce.unwrap_or(file.top_level))
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Serialize as a `[debounce]` TOML table
    pub fn to_toml_string(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Wrapper<'a> {
            debounce: &'a DebounceConfig,
        }

        toml::to_string_pretty(&Wrapper { debounce: self })
            .context("Failed to serialize debounce config")
    }
}

/// Commented example configuration
pub fn example_config() -> String {
    format!(
        "# Debounce settings\n\
         [debounce]\n\
         # Quiet window in milliseconds. Calls closer together than this\n\
         # collapse into one trailing call.\n\
         delay_ms = {}\n",
        DEFAULT_DELAY_MS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DebounceConfig::default();
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(config.delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_parse_table_and_top_level() {
        let table = DebounceConfig::from_toml_str("[debounce]\ndelay_ms = 120\n").unwrap();
        assert_eq!(table, DebounceConfig::new(120));

        let top = DebounceConfig::from_toml_str("delay_ms = 45\n").unwrap();
        assert_eq!(top, DebounceConfig::new(45));

        let empty = DebounceConfig::from_toml_str("").unwrap();
        assert_eq!(empty, DebounceConfig::default());

        let empty_table = DebounceConfig::from_toml_str("[debounce]\n").unwrap();
        assert_eq!(empty_table, DebounceConfig::default());
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(DebounceConfig::from_toml_str("delay_ms = \"fast\"").is_err());
        assert!(DebounceConfig::from_toml_str("delay_ms = -5").is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config = DebounceConfig::from_toml_str(&example_config()).unwrap();
        assert_eq!(config, DebounceConfig::default());
    }

    #[test]
    fn test_toml_string_roundtrip() {
        let config = DebounceConfig::new(75);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[debounce]"));
        assert_eq!(DebounceConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("frontkit.toml");
        fs::write(&path, "[debounce]\ndelay_ms = 500\n").unwrap();

        assert_eq!(DebounceConfig::load(&path).unwrap(), DebounceConfig::new(500));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        assert!(DebounceConfig::load(&path).is_err());
        assert_eq!(DebounceConfig::load_or_default(&path).unwrap(), DebounceConfig::default());
    }
}
