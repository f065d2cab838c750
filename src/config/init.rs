//! Default paths and settings-file initialization.
//!
//! Writes use create-new semantics so a concurrently created file is never
//! clobbered.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SettingsError;

use super::defaults::{
    APP_DIR_NAME, DEFAULT_SETTINGS_TEMPLATE, LOG_FILE_NAME, SETTINGS_FILE_NAME, THEMES_DIR_NAME,
};
use super::SettingsInitResult;

/// Default settings path (`~/.config/base16-switcher/config.toml`).
pub fn default_settings_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Default theme directory (`~/.config/base16-switcher/themes`).
pub fn default_theme_dir() -> Option<PathBuf> {
    config_root_dir().map(|root| theme_dir_under(&root))
}

/// Theme directory beneath a config root.
pub(super) fn theme_dir_under(root: &Path) -> PathBuf {
    root.join(APP_DIR_NAME).join(THEMES_DIR_NAME)
}

/// Default log file (`~/.local/state/base16-switcher/latest.log` on Linux).
pub fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Write the default template to `path` unless a file already exists.
pub(super) fn ensure_settings_file_at_path(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        return Ok(());
    }
    create_parent_dir(path)?;

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_SETTINGS_TEMPLATE.as_bytes())?;
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(SettingsError::Io(e)),
    }
}

/// Initialize a settings file at `path`.
///
/// - Without `force`, returns `AlreadyInitialized` if the file exists.
/// - With `force`, backs up the existing file next to it under a timestamped
///   name, then rewrites it from the embedded template.
pub fn initialize_settings_file(
    path: &Path,
    force: bool,
) -> Result<SettingsInitResult, SettingsError> {
    create_parent_dir(path)?;

    if path.exists() {
        if !force {
            return Ok(SettingsInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let backup_path = timestamped_backup_path(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_SETTINGS_TEMPLATE)?;
        return Ok(SettingsInitResult::Overwritten {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_SETTINGS_TEMPLATE.as_bytes())?;
            Ok(SettingsInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(SettingsInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(SettingsError::Io(e)),
    }
}

fn create_parent_dir(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Build a non-colliding backup path in the same directory as `path`.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| SETTINGS_FILE_NAME.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    for suffix in 0..1000usize {
        let candidate_name = if suffix == 0 {
            format!("{file_name}.{timestamp}.bak")
        } else {
            format!("{file_name}.{timestamp}.{suffix}.bak")
        };
        let candidate = path.with_file_name(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
    }

    path.with_file_name(format!(
        "{file_name}.{timestamp}.{}.bak",
        std::process::id()
    ))
}
