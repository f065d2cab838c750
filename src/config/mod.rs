//! Settings loading, persistence, and initialization.
//!
//! The settings file is located in this order of precedence (highest wins):
//! 1. `--config` CLI flag
//! 2. `BASE16_SWITCHER_CONFIG`
//! 3. `$XDG_CONFIG_HOME/base16-switcher/config.toml` (or
//!    `~/.config/base16-switcher/config.toml`)
//!
//! A missing file yields built-in defaults. The theme directory may be
//! overridden independently with `BASE16_SWITCHER_THEME_DIR`.

mod defaults;
mod env;
mod init;
mod loader;
mod persist;
mod resolve;
mod sources;
mod types;

pub use env::{CONFIG_PATH_ENV, THEME_DIR_ENV};
pub use init::{
    config_root_dir, default_log_path, default_settings_path, default_theme_dir,
    initialize_settings_file,
};
pub use loader::load_settings;
pub use persist::persist_current_theme;
pub use resolve::expand_path;
pub use types::{
    ApplicationConfig, ChooserConfig, LoadedSettings, Settings, SettingsDiagnostics,
    SettingsInitResult,
};
