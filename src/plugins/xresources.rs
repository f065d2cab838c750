//! X resources include-file handler.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::ApplyError;
use crate::theme::Theme;

use super::{run_command, ThemeApplier};

/// First line of every include file written by this handler.
pub const XRESOURCES_MARKER: &str = "! base16-switcher theme:";

const MERGE_PROGRAM: &str = "xrdb";

/// Writes the theme's `#define` block to a file included from
/// `~/.Xresources`, optionally merging the resource database afterwards.
#[derive(Debug, Clone)]
pub struct XresourcesPlugin {
    name: String,
    include: PathBuf,
    merge: Option<PathBuf>,
}

impl XresourcesPlugin {
    pub fn new(name: impl Into<String>, include: PathBuf, merge: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            include,
            merge,
        }
    }

    fn io_error(&self, source: std::io::Error) -> ApplyError {
        ApplyError::Io {
            path: self.include.clone(),
            source,
        }
    }
}

impl ThemeApplier for XresourcesPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "xresources"
    }

    fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
        if let Some(parent) = self.include.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = format!("{XRESOURCES_MARKER} {}\n{}", theme.name(), theme.to_xresources());
        std::fs::write(&self.include, text).map_err(|e| self.io_error(e))?;

        if let Some(merge) = &self.merge {
            run_command(&[
                MERGE_PROGRAM.to_string(),
                "-merge".to_string(),
                merge.to_string_lossy().into_owned(),
            ])?;
        }
        Ok(())
    }

    fn current_theme(&self) -> Result<Option<String>, ApplyError> {
        let text = match std::fs::read_to_string(&self.include) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        Ok(text
            .lines()
            .find_map(|line| line.strip_prefix(XRESOURCES_MARKER))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string))
    }
}
