//! Unified error types for the theme switcher.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// What is wrong with one color definition inside a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDefinitionProblem {
    /// The value is not a `#rrggbb` / `rrggbb` color.
    Invalid,
    /// The same slot is defined more than once.
    Duplicate,
    /// The slot is never defined.
    Missing,
}

impl ColorDefinitionProblem {
    fn label(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Duplicate => "duplicate",
            Self::Missing => "missing",
        }
    }
}

/// Errors arising while locating or parsing theme files.
#[derive(Debug)]
pub enum ThemeError {
    /// No theme file with the requested name exists under `dir`.
    NotFound { name: String, dir: PathBuf },
    /// The theme file exists but its color definitions are unusable.
    Parse {
        path: PathBuf,
        slot: String,
        problem: ColorDefinitionProblem,
    },
    /// The theme file or search directory could not be read.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name, dir } => {
                write!(f, "theme `{name}` not found in {}", dir.display())
            }
            Self::Parse {
                path,
                slot,
                problem,
            } => write!(
                f,
                "{} color definition in {}: {slot}",
                problem.label(),
                path.display()
            ),
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ApplyError
// ---------------------------------------------------------------------------

/// Errors local to applying a theme to one application.
#[derive(Debug)]
pub enum ApplyError {
    /// The template could not be read or the destination could not be written.
    TemplateIo { path: PathBuf, source: std::io::Error },
    /// A handler-owned file (other than a template destination) failed.
    Io { path: PathBuf, source: std::io::Error },
    /// No handler is registered under this application name.
    UnknownApplication(String),
    /// A reload or hook command could not be spawned or exited unsuccessfully.
    Command { program: String, detail: String },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateIo { path, source } => {
                write!(f, "template io: {}: {source}", path.display())
            }
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
            Self::UnknownApplication(name) => write!(f, "unknown application `{name}`"),
            Self::Command { program, detail } => write!(f, "command `{program}` {detail}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TemplateIo { source, .. } | Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

/// Errors when loading, validating, or saving the settings file.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ChooserError
// ---------------------------------------------------------------------------

/// Errors from prompting the user for a theme name.
#[derive(Debug)]
pub enum ChooserError {
    Io(std::io::Error),
    /// The external menu program could not be run.
    Menu { program: String, detail: String },
    /// There is nothing to choose from.
    NoThemes(PathBuf),
}

impl fmt::Display for ChooserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Menu { program, detail } => write!(f, "menu `{program}` {detail}"),
            Self::NoThemes(dir) => write!(f, "there are no themes in {}", dir.display()),
        }
    }
}

impl std::error::Error for ChooserError {}

impl From<std::io::Error> for ChooserError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// SwitchError: top-level
// ---------------------------------------------------------------------------

/// Fatal errors that abort a command.
#[derive(Debug)]
pub enum SwitchError {
    Theme(ThemeError),
    Settings(SettingsError),
    Chooser(ChooserError),
    /// A fatal per-command dispatch failure (e.g. `--app` with no match).
    Apply(ApplyError),
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Settings(e) => write!(f, "settings: {e}"),
            Self::Chooser(e) => write!(f, "chooser: {e}"),
            Self::Apply(e) => write!(f, "apply: {e}"),
        }
    }
}

impl std::error::Error for SwitchError {}

impl From<ThemeError> for SwitchError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<SettingsError> for SwitchError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

impl From<ChooserError> for SwitchError {
    fn from(e: ChooserError) -> Self {
        Self::Chooser(e)
    }
}

impl From<ApplyError> for SwitchError {
    fn from(e: ApplyError) -> Self {
        Self::Apply(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_error_names_problem_path_and_slot() {
        let e = ThemeError::Parse {
            path: PathBuf::from("/themes/example.Xresources"),
            slot: "base01".into(),
            problem: ColorDefinitionProblem::Invalid,
        };
        assert_eq!(
            e.to_string(),
            "invalid color definition in /themes/example.Xresources: base01"
        );
    }

    #[test]
    fn theme_not_found_mentions_directory() {
        let e = ThemeError::NotFound {
            name: "nope".into(),
            dir: PathBuf::from("/themes"),
        };
        assert_eq!(e.to_string(), "theme `nope` not found in /themes");
    }

    #[test]
    fn apply_error_display_variants() {
        assert_eq!(
            ApplyError::UnknownApplication("kitty".into()).to_string(),
            "unknown application `kitty`"
        );
        assert_eq!(
            ApplyError::Command {
                program: "xrdb".into(),
                detail: "exited with status 1".into(),
            }
            .to_string(),
            "command `xrdb` exited with status 1"
        );
    }

    #[test]
    fn template_io_keeps_source() {
        use std::error::Error as _;
        let e = ApplyError::TemplateIo {
            path: PathBuf::from("/tmp/t"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().starts_with("template io:"));
        assert!(e.source().is_some());
    }

    #[test]
    fn settings_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = SettingsError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn switch_error_from_settings_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = SwitchError::from(SettingsError::from(io_err));
        assert!(e.to_string().starts_with("settings:"), "got: {e}");
    }
}
