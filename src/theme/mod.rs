//! base16 theme model, parsing, and discovery.
//!
//! A theme is a name plus exactly one color for each of the sixteen base16
//! slots. Themes are loaded from `*.Xresources` or base16 scheme (`*.yaml`)
//! files and are immutable once loaded.

mod catalog;
mod parse;

pub use catalog::{load_theme, ThemeCatalog, THEME_FILE_EXTENSIONS};
pub use parse::parse_theme;

use std::fmt;
use std::path::{Path, PathBuf};

/// One of the sixteen base16 color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Base00,
    Base01,
    Base02,
    Base03,
    Base04,
    Base05,
    Base06,
    Base07,
    Base08,
    Base09,
    Base0A,
    Base0B,
    Base0C,
    Base0D,
    Base0E,
    Base0F,
}

impl Slot {
    /// Number of slots in a base16 theme.
    pub const COUNT: usize = 16;

    /// Canonical key for this slot (`base0A` style).
    pub fn key(self) -> &'static str {
        match self {
            Self::Base00 => "base00",
            Self::Base01 => "base01",
            Self::Base02 => "base02",
            Self::Base03 => "base03",
            Self::Base04 => "base04",
            Self::Base05 => "base05",
            Self::Base06 => "base06",
            Self::Base07 => "base07",
            Self::Base08 => "base08",
            Self::Base09 => "base09",
            Self::Base0A => "base0A",
            Self::Base0B => "base0B",
            Self::Base0C => "base0C",
            Self::Base0D => "base0D",
            Self::Base0E => "base0E",
            Self::Base0F => "base0F",
        }
    }

    /// All slots in base16 order.
    pub fn all() -> &'static [Slot; Slot::COUNT] {
        &[
            Self::Base00,
            Self::Base01,
            Self::Base02,
            Self::Base03,
            Self::Base04,
            Self::Base05,
            Self::Base06,
            Self::Base07,
            Self::Base08,
            Self::Base09,
            Self::Base0A,
            Self::Base0B,
            Self::Base0C,
            Self::Base0D,
            Self::Base0E,
            Self::Base0F,
        ]
    }

    /// Position of this slot in base16 order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a slot from its key, ignoring ASCII case (`base0a` == `base0A`).
    pub fn from_key(key: &str) -> Option<Slot> {
        let key = key.trim();
        Self::all()
            .iter()
            .copied()
            .find(|slot| slot.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An RGB color as written in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (hex digits in either case).
    pub fn parse(input: &str) -> Option<Color> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Lowercase hex digits without the leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fully resolved base16 theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    path: PathBuf,
    colors: [Color; Slot::COUNT],
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        colors: [Color; Slot::COUNT],
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            colors,
        }
    }

    /// Theme name (the source file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the theme was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn color(&self, slot: Slot) -> Color {
        self.colors[slot.index()]
    }

    /// Slot/color pairs in base16 order.
    pub fn colors(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::all().iter().map(|slot| (*slot, self.color(*slot)))
    }

    /// Serialize as X resources `#define` lines, one per slot.
    pub fn to_xresources(&self) -> String {
        let mut out = String::new();
        for (slot, color) in self.colors() {
            out.push_str(&format!("#define {slot} {color}\n"));
        }
        out
    }
}
