//! Shared test fixtures for theme, template, and settings test modules.
//!
//! Keeping tiny reusable helpers here prevents each test module from
//! rebuilding ad-hoc temp dir and theme file code.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::theme::{parse_theme, Slot, Theme};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// Std-only so unit tests can use it without extra dev-dependencies.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "base16-switcher-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// X resources theme text where slot `i` is the gray `seed + i`.
pub fn theme_file_text(seed: u8) -> String {
    let mut text = String::new();
    for slot in Slot::all() {
        let v = seed.wrapping_add(slot.index() as u8);
        text.push_str(&format!("#define {} #{v:02x}{v:02x}{v:02x}\n", slot.key()));
    }
    text
}

/// Parsed gray theme built from [`theme_file_text`].
pub fn sample_theme(name: &str, seed: u8) -> Theme {
    let path = PathBuf::from(format!("/themes/{name}.Xresources"));
    parse_theme(name, &path, &theme_file_text(seed)).expect("fixture theme parses")
}

/// Template text referencing every slot once as `name=<placeholder>`.
pub fn all_slots_template() -> String {
    let mut text = String::new();
    for slot in Slot::all() {
        text.push_str(&format!("{}={{{{{}}}}}\n", slot.key(), slot.key()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn theme_fixture_defines_every_slot() {
        let text = theme_file_text(0xf8);
        assert_eq!(text.lines().count(), Slot::COUNT);
        assert!(text.starts_with("#define base00 #f8f8f8\n"));
        assert!(text.contains("#define base0F #070707"));
    }

    #[test]
    fn sample_theme_uses_seeded_grays() {
        let theme = sample_theme("gray", 0x10);
        assert_eq!(theme.name(), "gray");
        assert_eq!(theme.color(Slot::Base01).to_string(), "#111111");
    }

    #[test]
    fn template_fixture_uses_placeholders() {
        let text = all_slots_template();
        assert!(text.starts_with("base00={{base00}}\n"));
    }
}
