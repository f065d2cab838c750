//! Placeholder substitution for per-application templates.
//!
//! Placeholders use `{{token}}` syntax (inner whitespace allowed):
//!
//! | token              | output              |
//! |--------------------|---------------------|
//! | `base0X`           | `#rrggbb`           |
//! | `base0X-hex`       | `rrggbb`            |
//! | `base0X-hex-r`     | `rr` (also `g`/`b`) |
//! | `base0X-rgb-r`     | `0..255`            |
//! | `base0X-dec-r`     | `0.0000..1.0000`    |
//! | `scheme-name`      | theme name          |
//! | `scheme-slug`      | theme name          |
//!
//! Triple braces (`{{{token}}}`) are accepted too. Unknown tokens and an
//! unterminated `{{` are copied through unchanged.

use std::fs;
use std::path::Path;

use crate::error::ApplyError;
use crate::theme::{Color, Slot, Theme};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitute every known placeholder in `template` with theme values.
pub fn render(template: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        // `{{{token}}}` renders the same as `{{token}}`.
        let triple =
            after_open.starts_with('{') && after_open[end + CLOSE.len()..].starts_with('}');
        let (token, close_len) = if triple {
            (after_open[1..end].trim(), CLOSE.len() + 1)
        } else {
            (after_open[..end].trim(), CLOSE.len())
        };
        match resolve_token(token, theme) {
            Some(value) => out.push_str(&value),
            None => {
                tracing::debug!(token, "leaving unknown template token untouched");
                out.push_str(&rest[start..start + OPEN.len() + end + close_len]);
            }
        }
        rest = &after_open[end + close_len..];
    }

    out.push_str(rest);
    out
}

/// Render `template_path` with `theme` and write the result to `destination`.
///
/// Missing parent directories of `destination` are created; existing content
/// is overwritten.
pub fn render_file(
    template_path: &Path,
    destination: &Path,
    theme: &Theme,
) -> Result<(), ApplyError> {
    let template = fs::read_to_string(template_path).map_err(|source| ApplyError::TemplateIo {
        path: template_path.to_path_buf(),
        source,
    })?;
    let rendered = render(&template, theme);

    let write_error = |source| ApplyError::TemplateIo {
        path: destination.to_path_buf(),
        source,
    };
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(destination, rendered).map_err(write_error)?;
    tracing::debug!(
        template = %template_path.display(),
        destination = %destination.display(),
        theme = theme.name(),
        "rendered template"
    );
    Ok(())
}

fn resolve_token(token: &str, theme: &Theme) -> Option<String> {
    if token == "scheme-name" || token == "scheme-slug" {
        return Some(theme.name().to_string());
    }

    let (key, format) = match token.split_once('-') {
        Some((key, format)) => (key, Some(format)),
        None => (token, None),
    };
    let color = theme.color(Slot::from_key(key)?);

    let Some(format) = format else {
        return Some(color.to_string());
    };
    if format == "hex" {
        return Some(color.hex());
    }
    let (kind, channel) = format.split_once('-')?;
    let value = channel_value(color, channel)?;
    match kind {
        "hex" => Some(format!("{value:02x}")),
        "rgb" => Some(value.to_string()),
        "dec" => Some(format!("{:.4}", f64::from(value) / 255.0)),
        _ => None,
    }
}

fn channel_value(color: Color, channel: &str) -> Option<u8> {
    match channel {
        "r" => Some(color.r),
        "g" => Some(color.g),
        "b" => Some(color.b),
        _ => None,
    }
}
