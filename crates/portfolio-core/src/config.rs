//! Configuration for the portfolio terminal.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.portfolio-terminal/
//! ├── config.json   # TerminalConfig (all fields optional)
//! ├── .env.local    # Environment overrides
//! └── logs/         # Log files written while the TUI owns the screen
//! ```
//!
//! # Environment Variables
//!
//! - `PORTFOLIO_TERMINAL_HOME`: Override the state directory
//! - `PORTFOLIO_TERMINAL_CLOSE_DELAY_MS`: Override `close_delay_ms`
//! - `PORTFOLIO_TERMINAL_PROMPT`: Override `prompt`

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable for a custom state directory.
pub const HOME_ENV: &str = "PORTFOLIO_TERMINAL_HOME";

/// Environment variable overriding the exit close delay.
pub const CLOSE_DELAY_ENV: &str = "PORTFOLIO_TERMINAL_CLOSE_DELAY_MS";

/// Environment variable overriding the prompt.
pub const PROMPT_ENV: &str = "PORTFOLIO_TERMINAL_PROMPT";

/// Longest accepted exit delay, one day.
pub const MAX_CLOSE_DELAY_MS: u64 = 86_400_000;

const DEFAULT_STATE_DIR: &str = ".portfolio-terminal";
const CONFIG_FILE: &str = "config.json";
const ENV_FILE: &str = ".env.local";
const LOGS_SUBDIR: &str = "logs";

/// Get the state directory.
///
/// 1. `PORTFOLIO_TERMINAL_HOME` if set
/// 2. `~/.portfolio-terminal` if a home directory is available
/// 3. `.portfolio-terminal` in the current directory
pub fn state_dir() -> PathBuf {
    std::env::var(HOME_ENV).map(PathBuf::from).unwrap_or_else(|_| {
        dirs::home_dir()
            .map(|h| h.join(DEFAULT_STATE_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
    })
}

/// Get the default config file path.
pub fn config_file() -> PathBuf {
    state_dir().join(CONFIG_FILE)
}

/// Get the `.env.local` path inside the state directory.
pub fn env_file() -> PathBuf {
    state_dir().join(ENV_FILE)
}

/// Get the logs directory.
pub fn logs_dir() -> PathBuf {
    state_dir().join(LOGS_SUBDIR)
}

/// Ensure the logs directory exists.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Load `.env.local` from the working directory and the state directory.
///
/// Variables already present in the environment win.
pub fn load_env() {
    let _ = dotenvy::from_filename(ENV_FILE);
    let path = env_file();
    if path.exists() {
        let _ = dotenvy::from_path(&path);
    }
}

/// What a pending `exit` close does when the window is reopened first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// Reopening cancels the pending close.
    #[default]
    CancelOnReopen,
    /// The pending close fires regardless of reopening.
    Unconditional,
}

/// Terminal settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt shown before typed commands
    pub prompt: String,
    /// Window title bar text
    pub title: String,
    /// Delay between `exit` and the window closing
    pub close_delay_ms: u64,
    pub close_policy: ClosePolicy,
    /// Record unrecognized commands in recall history
    pub record_unrecognized: bool,
    /// Event loop poll interval for interactive hosts
    pub tick_rate_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "kane@portfolio:~$".to_string(),
            title: "kane@portfolio:~".to_string(),
            close_delay_ms: 1000,
            close_policy: ClosePolicy::default(),
            record_unrecognized: false,
            tick_rate_ms: 100,
        }
    }
}

impl TerminalConfig {
    /// Load config from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults. Environment overrides are applied
    /// after the file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if a resulting value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_file);
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read config from a file, returning defaults if it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CLOSE_DELAY_ENV) {
            self.close_delay_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "close_delay_ms",
                reason: format!("'{}' is not a number of milliseconds", raw),
            })?;
        }
        if let Some(prompt) = lookup(PROMPT_ENV) {
            self.prompt = prompt;
        }
        Ok(())
    }

    /// Check values that would make hosts misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.close_delay_ms > MAX_CLOSE_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "close_delay_ms",
                reason: format!("must be at most {} (one day)", MAX_CLOSE_DELAY_MS),
            });
        }
        Ok(())
    }

    /// Delay between `exit` and the close transition.
    ///
    /// Clamped to [`MAX_CLOSE_DELAY_MS`] for configs that skipped validation.
    pub fn close_delay(&self) -> Duration {
        Duration::milliseconds(self.close_delay_ms.min(MAX_CLOSE_DELAY_MS) as i64)
    }

    /// Event loop poll interval.
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.prompt, "kane@portfolio:~$");
        assert_eq!(config.close_delay(), Duration::seconds(1));
        assert_eq!(config.close_policy, ClosePolicy::CancelOnReopen);
        assert!(!config.record_unrecognized);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig::from_file(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "close_delay_ms": 250, "close_policy": "unconditional", "record_unrecognized": true }"#,
        )
        .unwrap();

        let config = TerminalConfig::from_file(&path).unwrap();
        assert_eq!(config.close_delay_ms, 250);
        assert_eq!(config.close_policy, ClosePolicy::Unconditional);
        assert!(config.record_unrecognized);
        assert_eq!(config.title, "kane@portfolio:~");
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = TerminalConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_overrides() {
        let mut config = TerminalConfig::default();
        config
            .apply_overrides(|key| match key {
                CLOSE_DELAY_ENV => Some("50".to_string()),
                PROMPT_ENV => Some("guest$".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.close_delay_ms, 50);
        assert_eq!(config.prompt, "guest$");
    }

    #[test]
    fn test_invalid_override() {
        let mut config = TerminalConfig::default();
        let err = config
            .apply_overrides(|key| (key == CLOSE_DELAY_ENV).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "close_delay_ms", .. }));
    }

    #[test]
    fn test_huge_close_delay_override_rejected() {
        let mut config = TerminalConfig::default();
        config
            .apply_overrides(|key| (key == CLOSE_DELAY_ENV).then(|| "9000000000000000".to_string()))
            .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "close_delay_ms", .. }));
        assert_eq!(config.close_delay(), Duration::days(1));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = TerminalConfig {
            tick_rate_ms: 0,
            ..TerminalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_path_names() {
        assert!(config_file().ends_with("config.json"));
        assert!(env_file().ends_with(".env.local"));
        assert!(logs_dir().ends_with("logs"));
    }
}
