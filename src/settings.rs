//! Settings management for prettylog.
//!
//! Settings decide whether log lines are printed at all. They are loaded once
//! from config files and environment variables, then handed to the guard
//! explicitly so the guard itself never reads the environment.

use config::{Config, ConfigError, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Conventional environment variable holding the debug flag
pub const DEBUG_LOG_VAR: &str = "DEBUG_LOG";

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Debug flag; output is enabled only when this is exactly `development`
    #[serde(default)]
    pub debug_log: Option<String>,
}

impl Settings {
    /// The debug flag as passed to the guard
    pub fn debug_flag(&self) -> Option<&str> {
        self.debug_log.as_deref()
    }
}

// Global settings instance
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the process-wide settings
///
/// Loaded on first use. If loading fails, logging stays disabled.
pub fn get_settings() -> &'static Settings {
    SETTINGS.get_or_init(|| settings_or_default(load_settings()))
}

fn settings_or_default(loaded: Result<Settings, ConfigError>) -> Settings {
    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load prettylog settings, output disabled: {e}");
            Settings::default()
        }
    }
}

/// Load the settings from every source
///
/// Sources, from lowest to highest precedence:
/// 1. Configuration file in the system config directory
/// 2. `prettylog.toml` in the current directory
/// 3. Environment variables prefixed with `PRETTYLOG_`
/// 4. The `DEBUG_LOG` environment variable
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_with(None, None)
}

/// Load the settings with explicit sources
///
/// ### Arguments
/// * `config_file` - Optional settings file replacing the default file locations
/// * `env` - Variables used instead of the process environment
pub fn load_settings_with(
    config_file: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    match config_file {
        Some(path) => builder = builder.add_source(File::from(path).required(false)),
        None => {
            if let Some(config_path) = get_system_config_path() {
                log::debug!("Looking for settings in {}", config_path.display());
                builder = builder.add_source(File::from(config_path).required(false));
            }
            builder = builder.add_source(File::with_name("prettylog").required(false));
        }
    }

    let debug_log = match &env {
        Some(vars) => vars.get(DEBUG_LOG_VAR).cloned(),
        None => std::env::var(DEBUG_LOG_VAR).ok(),
    };

    builder = builder
        .add_source(Environment::with_prefix("PRETTYLOG").source(env))
        .set_override_option("debug_log", debug_log)?;

    let settings: Settings = builder.build()?.try_deserialize()?;
    log::debug!("Loaded prettylog settings: {settings:?}");
    Ok(settings)
}

/// Load the settings from a single file, ignoring the environment
///
/// ### Arguments
/// * `path` - Path to a TOML settings file, which must exist
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from(path))
        .build()?
        .try_deserialize()
}

/// Get the path to the system configuration file
fn get_system_config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "prettylog", "prettylog")?;
    Some(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::is_enabled;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn settings_file(contents: &str) -> std::io::Result<(TempDir, PathBuf)> {
        let dir = tempdir()?;
        let path = dir.path().join("prettylog.toml");
        fs::write(&path, contents)?;
        Ok((dir, path))
    }

    #[test]
    fn test_file_only() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = settings_file("debug_log = \"development\"\n")?;

        let settings = load_settings_with(Some(&path), Some(vars(&[])))?;
        assert_eq!(settings.debug_flag(), Some("development"));
        Ok(())
    }

    #[test]
    fn test_prefixed_var_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = settings_file("debug_log = \"development\"\n")?;

        let env = vars(&[("PRETTYLOG_DEBUG_LOG", "production")]);
        let settings = load_settings_with(Some(&path), Some(env))?;
        assert_eq!(settings.debug_flag(), Some("production"));
        Ok(())
    }

    #[test]
    fn test_debug_log_overrides_prefixed_var() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = settings_file("debug_log = \"staging\"\n")?;

        let env = vars(&[("PRETTYLOG_DEBUG_LOG", "production"), ("DEBUG_LOG", "development")]);
        let settings = load_settings_with(Some(&path), Some(env))?;
        assert_eq!(settings.debug_flag(), Some("development"));
        assert!(is_enabled(settings.debug_flag()));
        Ok(())
    }

    #[test]
    fn test_empty_debug_log_stays_disabled() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let missing = dir.path().join("prettylog.toml");

        let env = vars(&[("PRETTYLOG_DEBUG_LOG", "development"), ("DEBUG_LOG", "")]);
        let settings = load_settings_with(Some(&missing), Some(env))?;
        assert_eq!(settings.debug_flag(), Some(""));
        assert!(!is_enabled(settings.debug_flag()));
        Ok(())
    }

    #[test]
    fn test_no_sources_means_disabled() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let missing = dir.path().join("prettylog.toml");

        let settings = load_settings_with(Some(&missing), Some(vars(&[("PATH", "/usr/bin")])))?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_failed_load_falls_back_to_defaults() {
        let settings = settings_or_default(Err(ConfigError::Message("unreadable".to_string())));
        assert_eq!(settings, Settings::default());
        assert!(!is_enabled(settings.debug_flag()));

        let loaded = Settings {
            debug_log: Some("development".to_string()),
        };
        assert_eq!(settings_or_default(Ok(loaded.clone())), loaded);
    }

    #[test]
    fn test_load_settings_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("prettylog.toml");
        fs::write(&path, "debug_log = \"development\"\n")?;

        let settings = load_settings_from(&path)?;
        assert_eq!(settings.debug_flag(), Some("development"));
        Ok(())
    }

    #[test]
    fn test_missing_key_means_disabled() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("prettylog.toml");
        fs::write(&path, "")?;

        let settings = load_settings_from(&path)?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.debug_flag(), None);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_settings_from(&dir.path().join("nonexistent.toml")).is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("prettylog.toml");
        fs::write(&path, "debug_log = [\n")?;

        assert!(load_settings_from(&path).is_err());
        Ok(())
    }
}
