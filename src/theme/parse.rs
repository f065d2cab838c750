//! Line-oriented theme file parser.
//!
//! Accepted definitions:
//! - `#define base0X #rrggbb` (X resources)
//! - `base0X = #rrggbb` or `base0X: "rrggbb"` (key/value, base16 scheme YAML)
//!
//! Blank lines, comments (`!`, `//`, `#` other than `#define`), and keys that
//! are not base16 slots are ignored.

use std::path::Path;

use crate::error::{ColorDefinitionProblem, ThemeError};

use super::{Color, Slot, Theme};

/// Parse theme file contents into a [`Theme`].
///
/// Every slot must be defined exactly once with a valid color.
pub fn parse_theme(name: &str, path: &Path, text: &str) -> Result<Theme, ThemeError> {
    let mut colors: [Option<Color>; Slot::COUNT] = [None; Slot::COUNT];
    let error = |slot: Slot, problem| ThemeError::Parse {
        path: path.to_path_buf(),
        slot: slot.key().to_string(),
        problem,
    };

    for line in text.lines() {
        let Some((key, value)) = split_definition(line) else {
            continue;
        };
        let Some(slot) = Slot::from_key(key) else {
            continue;
        };
        let color =
            Color::parse(value).ok_or_else(|| error(slot, ColorDefinitionProblem::Invalid))?;
        let entry = &mut colors[slot.index()];
        if entry.is_some() {
            return Err(error(slot, ColorDefinitionProblem::Duplicate));
        }
        *entry = Some(color);
    }

    let mut resolved = [Color::new(0, 0, 0); Slot::COUNT];
    for slot in Slot::all() {
        resolved[slot.index()] =
            colors[slot.index()].ok_or_else(|| error(*slot, ColorDefinitionProblem::Missing))?;
    }
    Ok(Theme::new(name, path, resolved))
}

/// Split one line into a `(key, value)` definition, or `None` for lines that
/// carry no definition.
fn split_definition(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with("//") {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("#define") {
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut parts = rest.split_whitespace();
        let key = parts.next()?;
        let value = parts.next()?;
        return Some((key, value));
    }
    if trimmed.starts_with('#') {
        return None;
    }

    let separator = trimmed.find(['=', ':'])?;
    let key = trimmed[..separator].trim();
    let value = strip_trailing_comment(trimmed[separator + 1..].trim());
    let value = value.trim_matches(|c| c == '"' || c == '\'');
    Some((key, value))
}

/// Drop a trailing ` # comment` as written in base16 scheme files.
fn strip_trailing_comment(value: &str) -> &str {
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
