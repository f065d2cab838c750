//! base16-switcher: apply a base16 color theme to several applications.
//!
//! A theme (16 colors, `base00`..`base0F`) is loaded from a theme directory,
//! handed to every configured application handler, and recorded in the
//! settings file so it can be re-applied later.
//!
//! # Quick start
//!
//! ```no_run
//! use base16_switcher::config::load_settings;
//! use base16_switcher::plugins::PluginRegistry;
//! use base16_switcher::switcher::switch_theme;
//! use base16_switcher::theme::ThemeCatalog;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loaded = load_settings(None)?;
//! let catalog = ThemeCatalog::scan(&loaded.settings.theme_dir)?;
//! let registry = PluginRegistry::from_settings(&loaded.settings);
//! let report = switch_theme(&mut loaded.settings, &catalog, &registry, "solarized-light", &[])?;
//! assert!(!report.has_failures());
//! # Ok(())
//! # }
//! ```

pub mod chooser;
pub mod config;
pub mod error;
pub mod logging;
pub mod plugins;
pub mod switcher;
pub mod template;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod tui;
