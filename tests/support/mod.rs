//! Shared fixtures for integration tests: temp directories, theme files, and
//! settings files wired to them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Solarized Light in the X resources form the switcher reads.
pub const SOLARIZED_LIGHT: &str = "\
! Solarized Light
#define base00 #fdf6e3
#define base01 #eee8d5
#define base02 #93a1a1
#define base03 #839496
#define base04 #657b83
#define base05 #586e75
#define base06 #073642
#define base07 #002b36
#define base08 #dc322f
#define base09 #cb4b16
#define base0A #b58900
#define base0B #859900
#define base0C #2aa198
#define base0D #268bd2
#define base0E #6c71c4
#define base0F #d33682
";

/// Base16 scheme YAML for a dark theme.
pub const OCEAN_YAML: &str = "\
scheme: \"Ocean\"
author: \"Chris Kempson\"
base00: \"2b303b\"
base01: \"343d46\"
base02: \"4f5b66\"
base03: \"65737e\"
base04: \"a7adba\"
base05: \"c0c5ce\"
base06: \"dfe1e8\"
base07: \"eff1f5\"
base08: \"bf616a\"
base09: \"d08770\"
base0A: \"ebcb8b\"
base0B: \"a3be8c\"
base0C: \"96b5b4\"
base0D: \"8fa1b3\"
base0E: \"b48ead\"
base0F: \"ab7967\"
";

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = std::env::temp_dir().join(format!(
            "base16-switcher-it-{prefix}-{}-{millis}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.child(relative)).expect("read fixture")
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Template referencing all 16 slots plus a few derived tokens.
pub fn full_template() -> String {
    let mut text = String::from("# {{scheme-name}}\n");
    for idx in 0..16 {
        let slot = format!("base0{idx:X}");
        text.push_str(&format!("{slot} = {{{{{slot}}}}} {{{{{slot}-rgb-r}}}}\n"));
    }
    text
}

/// Workspace with two themes and a settings file declaring a working `good`
/// application and a `bad` one whose template is missing.
pub struct Workspace {
    pub dir: TempDir,
    pub settings_path: PathBuf,
}

impl Workspace {
    pub fn new(prefix: &str) -> Self {
        let dir = TempDir::new(prefix);
        dir.write("themes/solarized-light.Xresources", SOLARIZED_LIGHT);
        dir.write("themes/dark/ocean.yaml", OCEAN_YAML);
        dir.write("templates/good.tmpl", &full_template());
        let settings_path = dir.write(
            "config.toml",
            "\
# test settings
theme_dir = \"themes\"

[applications.good]
kind = \"template\"
template = \"templates/good.tmpl\"
destination = \"out/good.conf\"

[applications.bad]
kind = \"template\"
template = \"templates/missing.tmpl\"
destination = \"out/bad.conf\"
",
        );
        Self { dir, settings_path }
    }

    pub fn settings_arg(&self) -> String {
        self.settings_path.to_string_lossy().into_owned()
    }

    pub fn settings_text(&self) -> String {
        fs::read_to_string(&self.settings_path).expect("read settings")
    }
}
