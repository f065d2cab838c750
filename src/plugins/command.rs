//! External command handler and the shared child-process runner.

use std::process::{Command, Stdio};

use crate::error::ApplyError;
use crate::theme::Theme;

use super::ThemeApplier;

/// Runs an argv with `{theme}` and `{path}` substituted.
#[derive(Debug, Clone)]
pub struct CommandPlugin {
    name: String,
    argv: Vec<String>,
}

impl CommandPlugin {
    pub fn new(name: impl Into<String>, argv: Vec<String>) -> Self {
        Self {
            name: name.into(),
            argv,
        }
    }

    fn expand(&self, theme: &Theme) -> Vec<String> {
        let path = theme.path().to_string_lossy();
        self.argv
            .iter()
            .map(|arg| arg.replace("{theme}", theme.name()).replace("{path}", &path))
            .collect()
    }
}

impl ThemeApplier for CommandPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "command"
    }

    fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
        run_command(&self.expand(theme))
    }
}

/// Run `argv` to completion with stdin closed.
///
/// Spawn failures and non-zero exits become [`ApplyError::Command`]; the last
/// line of stderr is kept as detail.
pub fn run_command(argv: &[String]) -> Result<(), ApplyError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(ApplyError::Command {
            program: String::new(),
            detail: "is empty".to_string(),
        });
    };

    tracing::debug!(program, ?args, "running command");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ApplyError::Command {
            program: program.clone(),
            detail: format!("failed to start: {e}"),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let detail = match stderr.lines().rev().find(|line| !line.trim().is_empty()) {
        Some(line) => format!("exited with {}: {}", output.status, line.trim()),
        None => format!("exited with {}", output.status),
    };
    Err(ApplyError::Command {
        program: program.clone(),
        detail,
    })
}
