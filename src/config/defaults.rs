//! Default settings constants and the embedded settings template.

/// Embedded default `config.toml` written by `init` and before first persist.
pub(super) const DEFAULT_SETTINGS_TEMPLATE: &str = include_str!("../templates/config.toml");
/// Directory name under the user config/data roots.
pub(super) const APP_DIR_NAME: &str = "base16-switcher";
/// Settings file name inside [`APP_DIR_NAME`].
pub(super) const SETTINGS_FILE_NAME: &str = "config.toml";
/// Default theme directory name inside [`APP_DIR_NAME`].
pub(super) const THEMES_DIR_NAME: &str = "themes";
/// Log file name inside the per-user state directory.
pub(super) const LOG_FILE_NAME: &str = "latest.log";
/// Directory of the earlier YAML-configured switcher.
pub(super) const LEGACY_APP_DIR_NAME: &str = "base16-theme-switcher";
/// Settings file name used by the earlier YAML-configured switcher.
pub(super) const LEGACY_SETTINGS_FILE_NAME: &str = "config.yml";
