//! Settings data model.
//!
//! `File*` types mirror the TOML layout as written by users. Resolution into
//! [`Settings`] (path expansion, validation) lives in `config::resolve`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How the tool asks for a theme name when none is given.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChooserConfig {
    /// Arrow-key picker on a terminal, numbered prompt otherwise.
    #[default]
    Terminal,
    /// External menu program (rofi, dmenu, ...) fed theme names on stdin.
    Menu { command: Vec<String> },
}

/// One configured target application, with paths already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationConfig {
    /// Render `template` into `destination`, then run `reload` if non-empty.
    Template {
        template: PathBuf,
        destination: PathBuf,
        reload: Vec<String>,
    },
    /// Write the theme's `#define` block to `include`, optionally merging
    /// `merge` into the X resource database afterwards.
    Xresources {
        include: PathBuf,
        merge: Option<PathBuf>,
    },
    /// Run an argv with `{theme}` / `{path}` substituted.
    Command { command: Vec<String> },
}

impl ApplicationConfig {
    /// Stable kind label as written in the settings file.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Template { .. } => "template",
            Self::Xresources { .. } => "xresources",
            Self::Command { .. } => "command",
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name of the last successfully resolved and applied theme.
    pub current_theme: Option<String>,
    /// Directory searched recursively for theme files.
    pub theme_dir: PathBuf,
    /// Applications updated by default; `None` means all configured ones.
    pub enabled: Option<Vec<String>>,
    /// Send a desktop notification summarizing each switch.
    pub notify: bool,
    pub chooser: ChooserConfig,
    pub applications: BTreeMap<String, ApplicationConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_theme: None,
            theme_dir: super::init::default_theme_dir()
                .unwrap_or_else(|| PathBuf::from(super::defaults::THEMES_DIR_NAME)),
            enabled: None,
            notify: false,
            chooser: ChooserConfig::default(),
            applications: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Applications to update when the command line does not restrict them.
    pub fn default_targets(&self) -> Vec<String> {
        match &self.enabled {
            Some(enabled) => enabled.clone(),
            None => self.applications.keys().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub(super) enum FileApplication {
    Template {
        template: String,
        destination: String,
        #[serde(default)]
        reload: Vec<String>,
    },
    Xresources {
        include: String,
        #[serde(default)]
        merge: Option<String>,
    },
    Command {
        command: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileSettings {
    pub(super) current_theme: Option<String>,
    pub(super) theme_dir: Option<String>,
    pub(super) enabled: Option<Vec<String>>,
    pub(super) notify: bool,
    pub(super) chooser: ChooserConfig,
    pub(super) applications: BTreeMap<String, FileApplication>,
}

/// Notes gathered while locating and resolving settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsDiagnostics {
    pub notes: Vec<String>,
}

/// Settings plus the file they were (or will be) stored in.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub path: PathBuf,
    /// False when the file was missing and defaults were used.
    pub existed: bool,
    pub diagnostics: SettingsDiagnostics,
}

/// Result of `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}
