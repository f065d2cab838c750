//! Settings persistence.
//!
//! Only the top-level `current_theme` key is ever rewritten; everything else
//! in the file, comments included, is preserved line for line.

use std::path::Path;

use crate::error::SettingsError;

use super::init::ensure_settings_file_at_path;

const CURRENT_THEME_KEY: &str = "current_theme";

/// Persist `current_theme` to the settings file at `path`.
///
/// A missing file is first created from the embedded default template.
pub fn persist_current_theme(path: &Path, theme: &str) -> Result<(), SettingsError> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(SettingsError::Invalid(
            "current_theme cannot be empty".to_string(),
        ));
    }

    ensure_settings_file_at_path(path)?;
    let existing = std::fs::read_to_string(path)?;
    let updated = upsert_current_theme(&existing, theme);
    if updated != existing {
        std::fs::write(path, updated)?;
    }
    tracing::debug!(path = %path.display(), theme, "persisted current theme");
    Ok(())
}

/// Upsert top-level `current_theme` while preserving unrelated file contents.
fn upsert_current_theme(input: &str, theme: &str) -> String {
    let assignment = format!(
        "{CURRENT_THEME_KEY} = {}",
        toml::Value::String(theme.to_string())
    );
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };

    let first_section = lines
        .iter()
        .position(|line| is_section_header(line))
        .unwrap_or(lines.len());

    for line in lines.iter_mut().take(first_section) {
        if is_assignment_key(line, CURRENT_THEME_KEY) {
            *line = assignment;
            return ensure_trailing_newline(lines.join("\n"));
        }
    }

    // Insert after the top-level block, keeping a blank line before any
    // following section header.
    let mut insert_at = first_section;
    while insert_at > 0 && lines[insert_at - 1].trim().is_empty() {
        insert_at -= 1;
    }
    lines.insert(insert_at, assignment);
    if insert_at + 1 < lines.len() && !lines[insert_at + 1].trim().is_empty() {
        lines.insert(insert_at + 1, String::new());
    }
    ensure_trailing_newline(lines.join("\n"))
}

/// Return true for `[table]` and `[[array]]` headers, trailing comments allowed.
fn is_section_header(line: &str) -> bool {
    let trimmed = strip_trailing_comment(line).trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Cut a `#` comment that is not inside a quoted string.
fn strip_trailing_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if ch == '\\' => escaped = true,
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '#' => return &line[..idx],
            None => {}
        }
    }
    line
}

/// Return true when `line` assigns a value to `key`, bare or quoted
/// (`key = ...`, `"key" = ...`, `'key' = ...`).
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let rest = [
        trimmed.strip_prefix(key),
        trimmed
            .strip_prefix('"')
            .and_then(|r| r.strip_prefix(key))
            .and_then(|r| r.strip_prefix('"')),
        trimmed
            .strip_prefix('\'')
            .and_then(|r| r.strip_prefix(key))
            .and_then(|r| r.strip_prefix('\'')),
    ];
    rest.into_iter()
        .flatten()
        .any(|rest| rest.trim_start().starts_with('='))
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
