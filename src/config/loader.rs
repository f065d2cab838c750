//! Top-level settings loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::SettingsError;

use super::env::{env_path_with, THEME_DIR_ENV};
use super::init::{config_root_dir, theme_dir_under};
use super::resolve::resolve_settings_from_file;
use super::sources::{collect_legacy_source_notes, read_settings_text, resolve_settings_source};
use super::types::FileSettings;
use super::{LoadedSettings, SettingsDiagnostics};

/// Load settings from disk and environment.
///
/// `path_override` is an explicit settings path (from `--config`). A missing
/// file yields defaults with `existed == false`.
pub fn load_settings(path_override: Option<&str>) -> Result<LoadedSettings, SettingsError> {
    load_settings_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
        dirs::home_dir,
    )
}

pub(super) fn load_settings_from_sources<FRead, FEnv, FRoot, FHome>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
    home_dir: FHome,
) -> Result<LoadedSettings, SettingsError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
    FHome: Fn() -> Option<PathBuf>,
{
    let source = resolve_settings_source(path_override, &env_lookup, &config_root)?;
    let text = read_settings_text(&source, &read_file)?;
    let existed = text.is_some();

    let mut diagnostics = SettingsDiagnostics::default();
    collect_legacy_source_notes(&source, existed, &read_file, &config_root, &mut diagnostics);

    let parsed: FileSettings = match text {
        Some(text) => toml::from_str(&text)?,
        None => FileSettings::default(),
    };

    let home = home_dir();
    let base_dir = source.path().parent().filter(|p| !p.as_os_str().is_empty());
    let theme_dir_override = env_path_with(&env_lookup, THEME_DIR_ENV);
    let default_theme_dir = config_root().map(|root| theme_dir_under(&root));
    let settings = resolve_settings_from_file(
        parsed,
        base_dir,
        home.as_deref(),
        theme_dir_override,
        default_theme_dir,
    )?;

    tracing::debug!(
        path = %source.path().display(),
        existed,
        applications = settings.applications.len(),
        "loaded settings"
    );

    Ok(LoadedSettings {
        settings,
        path: source.path().to_path_buf(),
        existed,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io;

    fn fake_fs(files: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, io::Error> {
        let files: BTreeMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        move |path: &Path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn root() -> Option<PathBuf> {
        Some(PathBuf::from("/xdg"))
    }

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/u"))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = load_settings_from_sources(None, fake_fs(&[]), no_env, root, home).unwrap();
        assert!(!loaded.existed);
        assert_eq!(loaded.path, PathBuf::from("/xdg/base16-switcher/config.toml"));
        assert_eq!(loaded.settings.current_theme, None);
        assert!(loaded.settings.applications.is_empty());
        assert!(loaded.diagnostics.notes.is_empty());
    }

    #[test]
    fn default_theme_dir_follows_injected_config_root() {
        let loaded = load_settings_from_sources(None, fake_fs(&[]), no_env, root, home).unwrap();
        assert_eq!(loaded.settings.theme_dir, PathBuf::from("/xdg/base16-switcher/themes"));

        let other_root = || Some(PathBuf::from("/elsewhere"));
        let loaded =
            load_settings_from_sources(None, fake_fs(&[]), no_env, other_root, home).unwrap();
        assert_eq!(
            loaded.settings.theme_dir,
            PathBuf::from("/elsewhere/base16-switcher/themes")
        );
    }

    #[test]
    fn explicit_path_beats_env_and_default() {
        let fs = fake_fs(&[
            ("/explicit.toml", "current_theme = \"explicit\"\n"),
            ("/env.toml", "current_theme = \"env\"\n"),
            ("/xdg/base16-switcher/config.toml", "current_theme = \"global\"\n"),
        ]);
        let env = |name: &str| (name == "BASE16_SWITCHER_CONFIG").then(|| "/env.toml".to_string());

        let loaded =
            load_settings_from_sources(Some("/explicit.toml"), &fs, env, root, home).unwrap();
        assert_eq!(loaded.settings.current_theme.as_deref(), Some("explicit"));

        let loaded = load_settings_from_sources(None, &fs, env, root, home).unwrap();
        assert_eq!(loaded.settings.current_theme.as_deref(), Some("env"));

        let loaded = load_settings_from_sources(None, &fs, no_env, root, home).unwrap();
        assert_eq!(loaded.settings.current_theme.as_deref(), Some("global"));
        assert!(loaded.existed);
    }

    #[test]
    fn theme_dir_env_overrides_file_and_relative_paths_use_settings_dir() {
        let fs = fake_fs(&[(
            "/cfg/config.toml",
            "theme_dir = \"themes\"\n[applications.t]\nkind = \"template\"\ntemplate = \"t.tmpl\"\ndestination = \"~/out\"\n",
        )]);

        let loaded =
            load_settings_from_sources(Some("/cfg/config.toml"), &fs, no_env, root, home).unwrap();
        assert_eq!(loaded.settings.theme_dir, PathBuf::from("/cfg/themes"));

        let env =
            |name: &str| (name == "BASE16_SWITCHER_THEME_DIR").then(|| "~/env-themes".to_string());
        let loaded =
            load_settings_from_sources(Some("/cfg/config.toml"), &fs, env, root, home).unwrap();
        assert_eq!(loaded.settings.theme_dir, PathBuf::from("/home/u/env-themes"));
    }

    #[test]
    fn malformed_toml_is_fatal() {
        let fs = fake_fs(&[("/bad.toml", "current_theme = [unterminated")]);
        let err = load_settings_from_sources(Some("/bad.toml"), fs, no_env, root, home).unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)), "{err}");
    }

    #[test]
    fn unreadable_file_other_than_missing_is_fatal() {
        let read = |_: &Path| -> Result<String, io::Error> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        };
        let err = load_settings_from_sources(Some("/x.toml"), read, no_env, root, home).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)), "{err}");
    }

    #[test]
    fn legacy_yaml_settings_produce_note() {
        let fs = fake_fs(&[("/xdg/base16-theme-switcher/config.yml", "theme-search-dir-path: x\n")]);
        let loaded = load_settings_from_sources(None, fs, no_env, root, home).unwrap();
        assert_eq!(loaded.diagnostics.notes.len(), 1);
        assert!(loaded.diagnostics.notes[0].contains("config.yml"));
    }
}
