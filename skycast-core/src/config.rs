use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable consulted before the config file for the credential.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Cairo"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key. The `SKYCAST_API_KEY` environment variable
    /// takes precedence when set.
    pub api_key: Option<String>,

    /// City used when no city argument is given.
    pub default_city: Option<String>,
}

impl Config {
    /// Resolve the API credential, environment first, then the config file.
    ///
    /// Returns `None` when neither source has a non-empty value; absence is
    /// a user-visible configuration error at the fetch boundary, never a
    /// crash here.
    pub fn resolved_api_key(&self) -> Option<String> {
        let env_value = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(env_value, self.api_key.clone())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_default_city(&mut self, city: String) {
        self.default_city = Some(city);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Precedence: environment value first, then file value; empty strings count
/// as absent on both sides.
fn resolve_api_key(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| file_value.filter(|v| !v.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_no_key() {
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn file_key_is_used_when_env_is_absent() {
        let key = resolve_api_key(None, Some("FILE_KEY".into()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn env_key_takes_precedence_over_file() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("FILE_KEY".into()));
        assert_eq!(key.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn blank_values_count_as_absent() {
        let key = resolve_api_key(Some("   ".into()), Some(String::new()));
        assert_eq!(key, None);

        let key = resolve_api_key(Some(String::new()), Some("FILE_KEY".into()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.set_default_city("Cairo".into());

        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.default_city.as_deref(), Some("Cairo"));
    }
}
