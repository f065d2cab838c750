//! Asking the user for a theme when none is given on the command line.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::ChooserConfig;
use crate::error::ChooserError;
use crate::theme::ThemeCatalog;
use crate::tui::{pick_from_list, settings};

/// Ask for a theme name from `catalog`.
///
/// Returns `Ok(None)` when the user cancels. `current` preselects the recorded
/// theme in the terminal picker.
pub fn choose_theme(
    config: &ChooserConfig,
    catalog: &ThemeCatalog,
    current: Option<&str>,
    color: bool,
) -> Result<Option<String>, ChooserError> {
    if catalog.is_empty() {
        return Err(ChooserError::NoThemes(catalog.dir().to_path_buf()));
    }
    let names = catalog.names();

    let choice = match config {
        ChooserConfig::Terminal => {
            let initial = current
                .and_then(|current| names.iter().position(|name| name == current))
                .unwrap_or(0);
            pick_from_list(
                color,
                settings::PICKER_TITLE,
                settings::PICKER_HELP,
                &names,
                initial,
            )?
            .map(|idx| names[idx].clone())
        }
        ChooserConfig::Menu { command } => run_menu(command, &names)?,
    };

    match &choice {
        Some(name) => tracing::debug!(theme = %name, "theme chosen"),
        None => tracing::debug!("theme selection cancelled"),
    }
    Ok(choice)
}

/// Feed newline-separated `names` to a dmenu-style program and read its pick.
///
/// Non-zero exit or blank output means the user cancelled.
fn run_menu(argv: &[String], names: &[String]) -> Result<Option<String>, ChooserError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(ChooserError::Menu {
            program: String::new(),
            detail: "command is empty".to_string(),
        });
    };
    let menu_error = |detail: String| ChooserError::Menu {
        program: program.clone(),
        detail,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| menu_error(format!("failed to start: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        let mut input = names.join("\n");
        input.push('\n');
        // A menu that exits early closes the pipe; its exit status decides.
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            tracing::debug!(error = %e, "menu stopped reading theme names");
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| menu_error(format!("failed to wait: {e}")))?;
    if !output.status.success() {
        tracing::debug!(status = %output.status, "menu exited unsuccessfully");
        return Ok(None);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string))
}
