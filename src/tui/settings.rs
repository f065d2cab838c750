//! Centralized, hardcoded UI settings for terminal output.
//!
//! This is the single place to tweak glyphs, labels, colors, and indentation.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Sections / labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_NOTE: &str = "note:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_CURRENT: &str = "*";
pub const GLYPH_OK: &str = "✓";
pub const GLYPH_FAILED: &str = "✗";

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

pub const PICKER_SELECTED: &str = "▶";
pub const PICKER_UNSELECTED: &str = "·";
pub const PICKER_TITLE: &str = "choose a theme";
pub const PICKER_HELP: &str = "↑/↓ move, Enter apply, Esc cancel";
pub const PICKER_FALLBACK_PROMPT: &str = "pick (empty to cancel): ";
pub const PICKER_EVENT_POLL_MS: u64 = 80;
/// Rows kept visible around the selection in long lists.
pub const PICKER_MAX_VISIBLE: usize = 15;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::White;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::Grey;
pub const COLOR_CURRENT: Color = Color::Green;
pub const COLOR_OK: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_PICKER_SELECTED: Color = Color::Cyan;
pub const COLOR_PICKER_UNSELECTED: Color = Color::DarkGrey;
