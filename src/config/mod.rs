//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::{BindingError, KeyBindings};
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, load_saved_theme, merge_config, save_theme,
    theme_state_path, ConfigError, ConfigFile, ResolvedConfig,
};
