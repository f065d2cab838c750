//! Theme discovery under a search directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

use super::{parse_theme, Theme};

/// File extensions recognized as theme files.
pub const THEME_FILE_EXTENSIONS: &[&str] = &["Xresources", "yaml", "yml"];

/// Theme names mapped to their source files, discovered recursively.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    dir: PathBuf,
    entries: BTreeMap<String, PathBuf>,
}

impl ThemeCatalog {
    /// Scan `dir` recursively for theme files.
    ///
    /// A missing directory yields an empty catalog. When two files share a
    /// name, the first in sorted path order wins.
    pub fn scan(dir: &Path) -> Result<Self, ThemeError> {
        let mut paths = Vec::new();
        match collect_theme_files(dir, &mut paths) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "theme directory does not exist");
            }
            Err(source) => {
                return Err(ThemeError::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        }
        paths.sort();

        let mut entries: BTreeMap<String, PathBuf> = BTreeMap::new();
        for path in paths {
            let Some(name) = theme_name_for(&path) else {
                continue;
            };
            if let Some(existing) = entries.get(&name) {
                tracing::warn!(
                    theme = %name,
                    kept = %existing.display(),
                    skipped = %path.display(),
                    "duplicate theme name"
                );
                continue;
            }
            entries.insert(name, path);
        }
        tracing::debug!(dir = %dir.display(), count = entries.len(), "scanned themes");

        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    /// Directory this catalog was scanned from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Theme names sorted by name.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name to its canonical spelling and source file.
    ///
    /// Exact matches win over ASCII case-insensitive ones.
    pub fn find(&self, name: &str) -> Option<(&str, &Path)> {
        let trimmed = name.trim();
        if let Some((key, path)) = self.entries.get_key_value(trimmed) {
            return Some((key.as_str(), path.as_path()));
        }
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(trimmed))
            .map(|(key, path)| (key.as_str(), path.as_path()))
    }

    /// Load and parse the named theme.
    pub fn load(&self, name: &str) -> Result<Theme, ThemeError> {
        let (canonical, path) = self.find(name).ok_or_else(|| ThemeError::NotFound {
            name: name.trim().to_string(),
            dir: self.dir.clone(),
        })?;
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = parse_theme(canonical, path, &text)?;
        tracing::debug!(theme = %canonical, path = %path.display(), "loaded theme");
        Ok(theme)
    }
}

/// Resolve one theme by name from a search directory.
pub fn load_theme(name: &str, dir: &Path) -> Result<Theme, ThemeError> {
    ThemeCatalog::scan(dir)?.load(name)
}

fn collect_theme_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            // Unreadable subdirectories are skipped so one bad entry does not
            // hide every other theme.
            if let Err(e) = collect_theme_files(&path, out) {
                tracing::warn!(dir = %path.display(), error = %e, "skipping unreadable directory");
            }
        } else if is_theme_file(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_theme_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| THEME_FILE_EXTENSIONS.contains(&ext))
}

fn theme_name_for(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?.trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
