//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): built-in defaults, the persisted theme
//! preference, the config file, environment variables, CLI flags.

use crate::config::keybindings::KeyBindings;
use crate::model::{InvalidTheme, InvalidTranslation, Theme, Translation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A config value failed validation.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Field or environment variable that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to write the persisted theme preference.
    #[error("Failed to write {path}: {reason}")]
    WriteError {
        /// Path that failed to write.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/biblia-tui/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name ("claro", "dark", "homem", "mulher").
    #[serde(default)]
    pub theme: Option<String>,

    /// Translation code ("aa", "acf", "nvi").
    #[serde(default)]
    pub translation: Option<String>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings, key name to action name.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, the persisted theme preference, the config
/// file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Color theme.
    pub theme: Theme,
    /// Translation active at startup.
    pub translation: Translation,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key bindings after `[keybindings]` overrides.
    pub keybindings: KeyBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            translation: Translation::default(),
            log_file_path: default_log_path(),
            keybindings: KeyBindings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/biblia-tui/biblia-tui.log` on Unix-like systems,
/// or the appropriate platform path on other systems.
///
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("biblia-tui").join("biblia-tui.log")
    } else {
        PathBuf::from("biblia-tui.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/biblia-tui/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("biblia-tui").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `BIBLIA_CONFIG` environment variable
/// 3. Default path `~/.config/biblia-tui/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path (like CLI --config)
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. BIBLIA_CONFIG environment variable
    if let Ok(env_path) = std::env::var("BIBLIA_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// The remembered theme (`saved_theme`) sits below every explicit source:
/// it replaces the built-in default but loses to a theme named in the file.
/// String values from the file parse strictly; an unknown theme name,
/// translation code, or key binding rejects the whole config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for any value that fails to parse.
pub fn merge_config(
    config_file: Option<ConfigFile>,
    saved_theme: Option<Theme>,
) -> Result<ResolvedConfig, ConfigError> {
    let mut resolved = ResolvedConfig::default();

    if let Some(theme) = saved_theme {
        resolved.theme = theme;
    }

    let Some(config) = config_file else {
        return Ok(resolved);
    };

    if let Some(name) = config.theme {
        resolved.theme = name
            .parse()
            .map_err(|e: InvalidTheme| ConfigError::InvalidValue {
                field: "theme",
                reason: e.to_string(),
            })?;
    }

    if let Some(code) = config.translation {
        resolved.translation =
            code.parse()
                .map_err(|e: InvalidTranslation| ConfigError::InvalidValue {
                    field: "translation",
                    reason: e.to_string(),
                })?;
    }

    if let Some(path) = config.log_file_path {
        resolved.log_file_path = path;
    }

    if let Some(overrides) = config.keybindings {
        resolved
            .keybindings
            .apply_overrides(&overrides)
            .map_err(|e| ConfigError::InvalidValue {
                field: "keybindings",
                reason: e.to_string(),
            })?;
    }

    Ok(resolved)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BIBLIA_THEME`: Override theme
/// - `BIBLIA_TRANSLATION`: Override translation
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a set variable fails to parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(name) = std::env::var("BIBLIA_THEME") {
        config.theme = name
            .parse()
            .map_err(|e: InvalidTheme| ConfigError::InvalidValue {
                field: "BIBLIA_THEME",
                reason: e.to_string(),
            })?;
    }

    if let Ok(code) = std::env::var("BIBLIA_TRANSLATION") {
        config.translation =
            code.parse()
                .map_err(|e: InvalidTranslation| ConfigError::InvalidValue {
                    field: "BIBLIA_TRANSLATION",
                    reason: e.to_string(),
                })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Already typed by clap, so this stage cannot fail.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<Theme>,
    translation_override: Option<Translation>,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    if let Some(translation) = translation_override {
        config.translation = translation;
    }

    config
}

// ===== Persisted theme preference =====

/// Persisted preference file structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct ThemeState {
    theme: String,
}

/// Resolve the path of the persisted theme preference.
///
/// Returns `~/.local/state/biblia-tui/theme.toml` on Unix-like systems.
/// Returns `None` if the state directory cannot be determined.
pub fn theme_state_path() -> Option<PathBuf> {
    dirs::state_dir().map(|dir| dir.join("biblia-tui").join("theme.toml"))
}

/// Read the persisted theme preference.
///
/// Missing, unreadable, or unparseable state reads as `None`: the
/// remembered theme is best-effort and never blocks startup.
pub fn load_saved_theme() -> Option<Theme> {
    let path = theme_state_path()?;
    let contents = std::fs::read_to_string(path).ok()?;
    let state: ThemeState = toml::from_str(&contents).ok()?;
    state.theme.parse().ok()
}

/// Persist the theme preference to the state directory.
///
/// Called whenever the user cycles themes; the choice is restored on the
/// next startup (unless a config file, env var, or CLI flag overrides it).
///
/// # Errors
///
/// Returns error when the state directory cannot be created or the file
/// cannot be written.
pub fn save_theme(theme: Theme) -> Result<(), ConfigError> {
    let path = theme_state_path()
        .ok_or_else(|| ConfigError::InvalidPath("no state directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let state = ThemeState {
        theme: theme.as_str().to_string(),
    };
    let contents = toml::to_string(&state).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    std::fs::write(&path, contents).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_biblia_tui_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("biblia-tui.log"),
            "Default log path should end with 'biblia-tui.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            theme: None,
            translation: None,
            log_file_path: Some(custom_path.clone()),
            keybindings: None,
        };

        let resolved = merge_config(Some(config_file), None).unwrap();
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }
}
