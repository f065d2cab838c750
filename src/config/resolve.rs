//! Settings-file to runtime-settings resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

use super::defaults::THEMES_DIR_NAME;
use super::types::{ApplicationConfig, FileApplication, FileSettings, Settings};

/// Expand `~/` against `home` and resolve relative paths against `base_dir`.
///
/// Absolute paths, and relative paths without a base, are returned as-is.
pub fn expand_path(raw: &str, base_dir: Option<&Path>, home: Option<&Path>) -> PathBuf {
    let raw = raw.trim();
    if raw == "~" {
        if let Some(home) = home {
            return home.to_path_buf();
        }
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home {
            return home.join(rest);
        }
    }
    let path = PathBuf::from(raw);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

pub(super) fn resolve_settings_from_file(
    parsed: FileSettings,
    base_dir: Option<&Path>,
    home: Option<&Path>,
    theme_dir_override: Option<String>,
    default_theme_dir: Option<PathBuf>,
) -> Result<Settings, SettingsError> {
    let theme_dir = match theme_dir_override.or_else(|| normalized_option(&parsed.theme_dir)) {
        Some(raw) => expand_path(&raw, base_dir, home),
        None => default_theme_dir.unwrap_or_else(|| PathBuf::from(THEMES_DIR_NAME)),
    };

    let mut applications = BTreeMap::new();
    for (name, app) in parsed.applications {
        let Some(name) = normalized_string(&name) else {
            return Err(SettingsError::Invalid(
                "application names cannot be empty".to_string(),
            ));
        };
        let resolved = resolve_application(&name, app, base_dir, home)?;
        applications.insert(name, resolved);
    }

    let enabled = match parsed.enabled {
        Some(names) => {
            let mut resolved = Vec::with_capacity(names.len());
            for raw in names {
                let name = raw.trim().to_string();
                if !applications.contains_key(&name) {
                    return Err(SettingsError::Invalid(format!(
                        "enabled application `{name}` is not configured under `[applications]`"
                    )));
                }
                if !resolved.contains(&name) {
                    resolved.push(name);
                }
            }
            Some(resolved)
        }
        None => None,
    };

    Ok(Settings {
        current_theme: normalized_option(&parsed.current_theme),
        theme_dir,
        enabled,
        notify: parsed.notify,
        chooser: parsed.chooser,
        applications,
    })
}

fn resolve_application(
    name: &str,
    app: FileApplication,
    base_dir: Option<&Path>,
    home: Option<&Path>,
) -> Result<ApplicationConfig, SettingsError> {
    match app {
        FileApplication::Template {
            template,
            destination,
            reload,
        } => {
            let template = required_path(name, "template", &template, base_dir, home)?;
            let destination = required_path(name, "destination", &destination, base_dir, home)?;
            Ok(ApplicationConfig::Template {
                template,
                destination,
                reload: expand_argv(reload, home),
            })
        }
        FileApplication::Xresources { include, merge } => {
            let include = required_path(name, "include", &include, base_dir, home)?;
            let merge = normalized_option(&merge).map(|raw| expand_path(&raw, base_dir, home));
            Ok(ApplicationConfig::Xresources { include, merge })
        }
        FileApplication::Command { command } => {
            if command.first().map_or(true, |program| program.trim().is_empty()) {
                return Err(SettingsError::Invalid(format!(
                    "applications.{name}.command cannot be empty"
                )));
            }
            Ok(ApplicationConfig::Command {
                command: expand_argv(command, home),
            })
        }
    }
}

fn required_path(
    app: &str,
    field: &str,
    raw: &str,
    base_dir: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, SettingsError> {
    if raw.trim().is_empty() {
        return Err(SettingsError::Invalid(format!(
            "applications.{app}.{field} cannot be empty"
        )));
    }
    Ok(expand_path(raw, base_dir, home))
}

/// Only the program (first element) gets `~/` expansion; arguments are left
/// for the program to interpret.
fn expand_argv(mut argv: Vec<String>, home: Option<&Path>) -> Vec<String> {
    if let (Some(program), Some(home)) = (argv.first_mut(), home) {
        if let Some(rest) = program.strip_prefix("~/") {
            *program = home.join(rest).to_string_lossy().into_owned();
        }
    }
    argv
}

pub(super) fn normalized_option(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalized_string)
}

pub(super) fn normalized_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
