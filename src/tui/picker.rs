//! Arrow-key list picker with a numbered-prompt fallback.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use crate::tui::settings;

/// Present an interactive list picker and return the selected index.
///
/// In TTY mode, use arrow keys and Enter to select, or Esc to cancel.
/// In non-interactive mode, a numeric selection prompt is shown.
pub fn pick_from_list(
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    initial_selection: usize,
) -> io::Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return pick_from_list_fallback(title, options);
    }

    pick_from_list_interactive(color, title, help, options, initial_selection)
}

fn pick_from_list_fallback(title: &str, options: &[String]) -> io::Result<Option<usize>> {
    eprintln!("{} {title}", settings::GLYPH_SECTION_BULLET);
    for (idx, option) in options.iter().enumerate() {
        eprintln!("{}{}. {}", settings::INDENT_1, idx + 1, option);
    }
    eprint!("{}{}", settings::INDENT_1, settings::PICKER_FALLBACK_PROMPT);
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        eprintln!();
        return Ok(None);
    }
    Ok(parse_fallback_choice(&line, options.len()))
}

/// Map a 1-based typed choice to an index; anything else cancels.
fn parse_fallback_choice(line: &str, len: usize) -> Option<usize> {
    let index = line.trim().parse::<usize>().ok()?;
    (1..=len).contains(&index).then(|| index - 1)
}

fn pick_from_list_interactive(
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    initial_selection: usize,
) -> io::Result<Option<usize>> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let last = options.len() - 1;
    let mut selected = initial_selection.min(last);
    let mut previous_rows = 0usize;

    loop {
        previous_rows = render_picker(
            &mut stderr,
            color,
            title,
            help,
            options,
            selected,
            previous_rows,
        )?;

        if !event::poll(Duration::from_millis(settings::PICKER_EVENT_POLL_MS))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = if selected == 0 { last } else { selected - 1 };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = if selected == last { 0 } else { selected + 1 };
            }
            KeyCode::PageUp => {
                selected = selected.saturating_sub(settings::PICKER_MAX_VISIBLE);
            }
            KeyCode::PageDown => {
                selected = (selected + settings::PICKER_MAX_VISIBLE).min(last);
            }
            KeyCode::Home => selected = 0,
            KeyCode::End => selected = last,
            KeyCode::Enter => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(Some(selected));
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

/// Range of option indices drawn for `selected`, keeping it centered where
/// possible.
fn visible_window(len: usize, selected: usize, max_visible: usize) -> (usize, usize) {
    if len <= max_visible {
        return (0, len);
    }
    let half = max_visible / 2;
    let start = selected.saturating_sub(half).min(len - max_visible);
    (start, start + max_visible)
}

/// Draw picker chrome/options and return the last drawn row index.
fn render_picker(
    stderr: &mut io::Stderr,
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    selected: usize,
    previous_rows: usize,
) -> io::Result<usize> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;

    let cols = terminal_columns();
    let mut total_rows = 0usize;
    let title_plain = format!("{} {title}", settings::GLYPH_SECTION_BULLET);
    total_rows += wrapped_rows(&title_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        stderr.queue(Print(" "))?;
        stderr.queue(PrintStyledContent(
            title.with(settings::COLOR_SECTION_TITLE).bold(),
        ))?;
    } else {
        stderr.queue(Print(&title_plain))?;
    }

    let help_plain = format!("{}{help} ({}/{})", settings::INDENT_1, selected + 1, options.len());
    stderr.queue(Print("\r\n"))?;
    total_rows += wrapped_rows(&help_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            help_plain.as_str().with(settings::COLOR_FIELD_KEY),
        ))?;
    } else {
        stderr.queue(Print(&help_plain))?;
    }

    let (start, end) = visible_window(options.len(), selected, settings::PICKER_MAX_VISIBLE);
    for (idx, option) in options.iter().enumerate().take(end).skip(start) {
        let active = idx == selected;
        let marker = if active {
            settings::PICKER_SELECTED
        } else {
            settings::PICKER_UNSELECTED
        };
        let line_plain = format!("{}{marker} {option}", settings::INDENT_1);
        stderr.queue(Print("\r\n"))?;
        total_rows += wrapped_rows(&line_plain, cols);
        if color {
            let tone = if active {
                settings::COLOR_PICKER_SELECTED
            } else {
                settings::COLOR_PICKER_UNSELECTED
            };
            stderr.queue(Print(settings::INDENT_1))?;
            stderr.queue(PrintStyledContent(marker.with(tone)))?;
            stderr.queue(Print(" "))?;
            let text = if active {
                option.as_str().with(tone).bold()
            } else {
                option.as_str().with(settings::COLOR_FIELD_VALUE)
            };
            stderr.queue(PrintStyledContent(text))?;
        } else {
            stderr.queue(Print(&line_plain))?;
        }
    }

    stderr.flush()?;
    Ok(total_rows.saturating_sub(1))
}

/// Clear rows previously painted by the picker.
fn clear_surface(stderr: &mut io::Stderr, previous_rows: usize) -> io::Result<()> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;
    stderr.flush()?;
    Ok(())
}

/// Read terminal width or fall back to 80 columns.
fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(80)
}

/// Rows consumed by a single line of text once soft-wrapped at `cols`.
fn wrapped_rows(text: &str, cols: usize) -> usize {
    let width = text.chars().count();
    if cols == 0 || width == 0 {
        return 1;
    }
    width.div_ceil(cols)
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
