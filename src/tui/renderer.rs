//! Terminal output renderer for status lines and listings.
//!
//! Status output (sections, fields, warnings, errors) goes to stderr so stdout
//! stays clean for listings that scripts may parse.

use crossterm::style::Stylize;

use crate::tui::settings;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether ANSI styling is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print a key/value line under a status section.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("{}", plain_field(key, value));
        }
    }

    /// Print one application outcome under a section.
    pub fn outcome(&self, name: &str, result: Result<(), &str>) {
        match (self.color, result) {
            (true, Ok(())) => eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                settings::GLYPH_OK.with(settings::COLOR_OK),
                name.with(settings::COLOR_FIELD_VALUE)
            ),
            (true, Err(detail)) => eprintln!(
                "{}{} {} {}",
                settings::INDENT_1,
                settings::GLYPH_FAILED.with(settings::COLOR_ERROR).bold(),
                name.with(settings::COLOR_FIELD_VALUE),
                detail.with(settings::COLOR_FIELD_KEY)
            ),
            (false, result) => eprintln!("{}", plain_outcome(name, result)),
        }
    }

    /// Print a warning line.
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an informational note.
    pub fn note(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_NOTE.with(settings::COLOR_FIELD_KEY).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_NOTE);
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Print one theme name to stdout, marking the current one.
    pub fn theme_entry(&self, name: &str, current: bool) {
        if self.color && current {
            println!(
                "{} {}",
                settings::GLYPH_CURRENT.with(settings::COLOR_CURRENT).bold(),
                name.with(settings::COLOR_CURRENT)
            );
        } else {
            println!("{}", plain_theme_entry(name, current));
        }
    }
}

fn plain_field(key: &str, value: &str) -> String {
    format!("{}{key}: {value}", settings::INDENT_1)
}

fn plain_outcome(name: &str, result: Result<(), &str>) -> String {
    match result {
        Ok(()) => format!("{}{} {name}", settings::INDENT_1, settings::GLYPH_OK),
        Err(detail) => format!(
            "{}{} {name} {detail}",
            settings::INDENT_1,
            settings::GLYPH_FAILED
        ),
    }
}

fn plain_theme_entry(name: &str, current: bool) -> String {
    if current {
        format!("{} {name}", settings::GLYPH_CURRENT)
    } else {
        format!("  {name}")
    }
}
