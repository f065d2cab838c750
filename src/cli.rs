//! CLI argument parsing via clap.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

/// Apply a base16 color theme to your applications.
///
/// Without a THEME or subcommand, the configured chooser asks for one.
#[derive(Debug, Parser)]
#[command(name = "base16-switcher", version)]
pub struct Args {
    /// Theme to apply (file stem under the theme directory).
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings file (default: ~/.config/base16-switcher/config.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Theme directory, overriding the settings file.
    #[arg(long = "themes", value_name = "DIR", global = true)]
    pub themes: Option<String>,

    /// Only update this application (repeatable).
    #[arg(short = 'a', long = "app", value_name = "NAME", global = true)]
    pub apps: Vec<String>,

    /// Log file path (default: ~/.local/state/base16-switcher/latest.log).
    #[arg(short = 'l', long = "log", value_name = "PATH", global = true)]
    pub log: Option<String>,

    /// Print debug logs to stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

impl Args {
    /// Parse process arguments, rejecting a THEME combined with a subcommand.
    pub fn try_parse_checked() -> Result<Self, clap::Error> {
        Self::try_parse_checked_from(std::env::args_os())
    }

    pub fn try_parse_checked_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(itr)?;
        if let (Some(theme), Some(_)) = (&args.theme, &args.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("THEME `{theme}` cannot be combined with a subcommand"),
            ));
        }
        Ok(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply THEME (use when a theme is named like a subcommand).
    Apply { theme: String },
    /// List available themes, marking the current one.
    List {
        /// Print JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Show the recorded theme and what each application reports.
    Current {
        /// Print JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Re-apply the recorded theme.
    Reload,
    /// List configured applications.
    Apps,
    /// Write the default settings file.
    Init {
        /// Overwrite an existing file (a timestamped backup is kept).
        #[arg(long)]
        force: bool,
    },
}
