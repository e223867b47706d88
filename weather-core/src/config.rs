use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use thiserror::Error;

pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "WEATHER_BASE_URL";
pub const TIMEOUT_VAR: &str = "WEATHER_TIMEOUT_SECS";

/// Names used by `.env` files written for the original desktop app.
pub const LEGACY_API_KEY_VAR: &str = "API_key";
pub const LEGACY_BASE_URL_VAR: &str = "BASE_URL";

/// Suggested endpoint offered by `weather configure`.
pub const OPENWEATHER_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "No API key configured.\n\
         Hint: set WEATHER_API_KEY or run `weather configure`."
    )]
    MissingApiKey,

    #[error(
        "No base URL configured.\n\
         Hint: set WEATHER_BASE_URL or run `weather configure`."
    )]
    MissingBaseUrl,

    #[error("Invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Everything needed to talk to the weather API, resolved up front and
/// handed to the provider explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ApiSettings {
    /// Resolve settings from an environment lookup, falling back to the
    /// legacy variable names and then the stored config file. Blank values
    /// count as missing.
    pub fn resolve<F>(stored: &Config, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, legacy: &str, fallback: Option<&String>| {
            non_blank(env(var))
                .or_else(|| non_blank(env(legacy)))
                .or_else(|| non_blank(fallback.cloned()))
        };

        let api_key = pick(API_KEY_VAR, LEGACY_API_KEY_VAR, stored.api_key.as_ref())
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url = pick(BASE_URL_VAR, LEGACY_BASE_URL_VAR, stored.base_url.as_ref())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let timeout = match non_blank(env(TIMEOUT_VAR)) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => stored.timeout_secs.map(Duration::from_secs).filter(|d| !d.is_zero()),
        };

        Ok(Self { api_key, base_url, timeout })
    }

    /// Resolve against the real process environment.
    pub fn from_env(stored: &Config) -> Result<Self, ConfigError> {
        Self::resolve(stored, |var| std::env::var(var).ok())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Configuration stored on disk by `weather configure`.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
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

        Ok(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn resolves_from_env() {
        let env = env_of(&[(API_KEY_VAR, "KEY"), (BASE_URL_VAR, "http://localhost/weather")]);
        let settings = ApiSettings::resolve(&Config::default(), env).expect("settings");

        assert_eq!(settings.api_key, "KEY");
        assert_eq!(settings.base_url, "http://localhost/weather");
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn env_overrides_stored_config() {
        let stored = Config {
            api_key: Some("FILE_KEY".into()),
            base_url: Some("http://file/weather".into()),
            timeout_secs: Some(30),
        };
        let env = env_of(&[(API_KEY_VAR, "ENV_KEY"), (TIMEOUT_VAR, "5")]);
        let settings = ApiSettings::resolve(&stored, env).expect("settings");

        assert_eq!(settings.api_key, "ENV_KEY");
        assert_eq!(settings.base_url, "http://file/weather");
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn legacy_env_names_are_accepted() {
        let stored = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };
        let env = env_of(&[
            (LEGACY_API_KEY_VAR, "OLD_KEY"),
            (LEGACY_BASE_URL_VAR, "http://old/weather"),
        ]);
        let settings = ApiSettings::resolve(&stored, env).expect("settings");

        assert_eq!(settings.api_key, "OLD_KEY");
        assert_eq!(settings.base_url, "http://old/weather");
    }

    #[test]
    fn new_env_names_win_over_legacy() {
        let env = env_of(&[
            (API_KEY_VAR, "NEW_KEY"),
            (LEGACY_API_KEY_VAR, "OLD_KEY"),
            (BASE_URL_VAR, "http://new/weather"),
            (LEGACY_BASE_URL_VAR, "http://old/weather"),
        ]);
        let settings = ApiSettings::resolve(&Config::default(), env).expect("settings");

        assert_eq!(settings.api_key, "NEW_KEY");
        assert_eq!(settings.base_url, "http://new/weather");
    }

    #[test]
    fn missing_values_are_config_errors() {
        let err = ApiSettings::resolve(&Config::default(), env_of(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
        assert!(err.to_string().contains("Hint: set WEATHER_API_KEY"));

        let err = ApiSettings::resolve(&Config::default(), env_of(&[(API_KEY_VAR, "KEY")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingBaseUrl);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let env = env_of(&[(API_KEY_VAR, "   "), (BASE_URL_VAR, "http://x")]);
        let err = ApiSettings::resolve(&Config::default(), env).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let stored = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };
        let env = env_of(&[(API_KEY_VAR, ""), (BASE_URL_VAR, "http://x")]);
        let settings = ApiSettings::resolve(&stored, env).expect("settings");
        assert_eq!(settings.api_key, "FILE_KEY");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        for raw in ["abc", "0", "-3"] {
            let env =
                env_of(&[(API_KEY_VAR, "KEY"), (BASE_URL_VAR, "http://x"), (TIMEOUT_VAR, raw)]);
            let err = ApiSettings::resolve(&Config::default(), env).unwrap_err();
            assert_eq!(err, ConfigError::InvalidTimeout(raw.to_string()));
        }
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some(OPENWEATHER_CURRENT_URL.into()),
            timeout_secs: None,
        };

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").expect("parse"), Config::default());
    }
}
