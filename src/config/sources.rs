//! Settings-file source discovery and legacy-source diagnostics.
//!
//! Source order: `--config` path > `BASE16_SWITCHER_CONFIG` > per-user
//! config directory.

use std::path::{Path, PathBuf};

use crate::error::SettingsError;

use super::defaults::{
    APP_DIR_NAME, LEGACY_APP_DIR_NAME, LEGACY_SETTINGS_FILE_NAME, SETTINGS_FILE_NAME,
};
use super::env::{env_path_with, CONFIG_PATH_ENV};
use super::SettingsDiagnostics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SettingsSource {
    /// Path given with `--config`.
    Explicit(PathBuf),
    /// Path taken from `BASE16_SWITCHER_CONFIG`.
    Env(PathBuf),
    /// Per-user default under the config root.
    Global(PathBuf),
}

impl SettingsSource {
    pub(super) fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Env(path) | Self::Global(path) => path,
        }
    }
}

/// Pick the settings path with the highest precedence.
pub(super) fn resolve_settings_source<FEnv, FRoot>(
    path_override: Option<&str>,
    env_lookup: &FEnv,
    config_root: &FRoot,
) -> Result<SettingsSource, SettingsError>
where
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override.map(str::trim).filter(|p| !p.is_empty()) {
        return Ok(SettingsSource::Explicit(PathBuf::from(path)));
    }
    if let Some(path) = env_path_with(env_lookup, CONFIG_PATH_ENV) {
        return Ok(SettingsSource::Env(PathBuf::from(path)));
    }
    config_root()
        .map(|root| SettingsSource::Global(root.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME)))
        .ok_or_else(|| {
            SettingsError::Invalid(
                "unable to resolve a settings path; pass --config".to_string(),
            )
        })
}

/// Read settings text; a missing file yields `None`, other errors are fatal.
pub(super) fn read_settings_text<FRead>(
    source: &SettingsSource,
    read_file: &FRead,
) -> Result<Option<String>, SettingsError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(source.path()) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SettingsError::Io(e)),
    }
}

/// Note when an earlier YAML settings file exists but the TOML one does not.
pub(super) fn collect_legacy_source_notes<FRead, FRoot>(
    source: &SettingsSource,
    existed: bool,
    read_file: &FRead,
    config_root: &FRoot,
    diagnostics: &mut SettingsDiagnostics,
) where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if existed || !matches!(source, SettingsSource::Global(_)) {
        return;
    }
    let Some(root) = config_root() else {
        return;
    };
    let legacy = root
        .join(LEGACY_APP_DIR_NAME)
        .join(LEGACY_SETTINGS_FILE_NAME);
    if read_file(&legacy).is_ok() {
        diagnostics.notes.push(format!(
            "Found `{}` from the YAML-configured switcher; it is not read. Run `base16-switcher init` and move its applications into `{}`.",
            legacy.display(),
            source.path().display()
        ));
    }
}
