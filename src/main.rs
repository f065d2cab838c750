//! CLI entry point for base16-switcher.

mod cli;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use base16_switcher::chooser::choose_theme;
use base16_switcher::config::{
    default_log_path, default_settings_path, expand_path, initialize_settings_file, load_settings,
    persist_current_theme, LoadedSettings, SettingsInitResult, CONFIG_PATH_ENV,
};
use base16_switcher::error::{SettingsError, SwitchError};
use base16_switcher::logging::{init_logging, LogOptions};
use base16_switcher::plugins::PluginRegistry;
use base16_switcher::switcher::{reload_theme, reported_themes, switch_theme, SwitchReport};
use base16_switcher::theme::ThemeCatalog;
use base16_switcher::tui::Renderer;
use serde_json::json;

use cli::{Args, Command};

const EXIT_FATAL: u8 = 1;
const EXIT_PARTIAL: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse_checked() {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { EXIT_FATAL } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    let color = !args.no_color && io::stderr().is_terminal();
    let renderer = Renderer::new(color);

    match run(&args, &renderer) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            renderer.error(&e.to_string());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(args: &Args, renderer: &Renderer) -> Result<ExitCode, SwitchError> {
    let home = dirs::home_dir();
    let loaded = load_settings(args.config.as_deref());

    let logging = init_logging(&LogOptions {
        verbose: args.verbose,
        log_file: args
            .log
            .as_deref()
            .map(|raw| expand_path(raw, None, home.as_deref()))
            .or_else(default_log_path),
        notify: loaded.as_ref().is_ok_and(|l| l.settings.notify),
        color: renderer.color(),
    });
    for warning in &logging.warnings {
        renderer.warn(warning);
    }
    tracing::debug!(?args, "starting");

    if let Some(Command::Init { force }) = &args.command {
        return init(args, *force, renderer);
    }

    let mut loaded = loaded?;
    for note in &loaded.diagnostics.notes {
        renderer.note(note);
    }
    if let Some(themes) = args.themes.as_deref() {
        loaded.settings.theme_dir = expand_path(themes, None, home.as_deref());
    }

    let catalog = ThemeCatalog::scan(&loaded.settings.theme_dir)?;
    let registry = PluginRegistry::from_settings(&loaded.settings);

    match &args.command {
        None => {
            let name = match &args.theme {
                Some(name) => name.clone(),
                None => {
                    let settings = &loaded.settings;
                    let current = settings.current_theme.as_deref();
                    let choice =
                        choose_theme(&settings.chooser, &catalog, current, renderer.color())?;
                    match choice {
                        Some(name) => name,
                        None => return Ok(ExitCode::SUCCESS),
                    }
                }
            };
            apply(&mut loaded, &catalog, &registry, &name, args, renderer)
        }
        Some(Command::Apply { theme }) => {
            apply(&mut loaded, &catalog, &registry, theme, args, renderer)
        }
        Some(Command::Reload) => {
            let report = reload_theme(&mut loaded.settings, &catalog, &registry, &args.apps)?;
            finish_switch(&loaded, report, renderer)
        }
        Some(Command::List { json }) => {
            list(&loaded, &catalog, *json, renderer);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Current { json }) => {
            current(&loaded, &registry, *json, renderer);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Apps) => {
            apps(&loaded, renderer);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Init { force }) => init(args, *force, renderer),
    }
}

fn apply(
    loaded: &mut LoadedSettings,
    catalog: &ThemeCatalog,
    registry: &PluginRegistry,
    name: &str,
    args: &Args,
    renderer: &Renderer,
) -> Result<ExitCode, SwitchError> {
    let report = switch_theme(&mut loaded.settings, catalog, registry, name, &args.apps)?;
    finish_switch(loaded, report, renderer)
}

/// Print per-application results, then persist the recorded theme.
///
/// Outcomes are shown even when saving the settings fails afterwards, since
/// the applications have already been rewritten by then.
fn finish_switch(
    loaded: &LoadedSettings,
    report: SwitchReport,
    renderer: &Renderer,
) -> Result<ExitCode, SwitchError> {
    renderer.section(&format!("applied {}", report.theme.name()));
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => renderer.outcome(&outcome.name, Ok(())),
            Err(e) => {
                let detail = e.to_string();
                renderer.outcome(&outcome.name, Err(&detail));
            }
        }
    }

    persist_current_theme(&loaded.path, report.theme.name())?;

    if report.has_failures() {
        Ok(ExitCode::from(EXIT_PARTIAL))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn list(loaded: &LoadedSettings, catalog: &ThemeCatalog, json: bool, renderer: &Renderer) {
    let current = loaded.settings.current_theme.as_deref();
    let names = catalog.names();
    if json {
        let value = json!({
            "theme_dir": catalog.dir().display().to_string(),
            "current": current,
            "themes": names,
        });
        println!("{value}");
        return;
    }
    if names.is_empty() {
        renderer.warn(&format!("no themes found in {}", catalog.dir().display()));
        return;
    }
    for name in &names {
        renderer.theme_entry(name, Some(name.as_str()) == current);
    }
}

fn current(loaded: &LoadedSettings, registry: &PluginRegistry, json: bool, renderer: &Renderer) {
    let recorded = loaded.settings.current_theme.as_deref();
    let reported = reported_themes(registry);

    if json {
        let applications: serde_json::Map<String, serde_json::Value> = reported
            .iter()
            .map(|(name, result)| {
                let value = match result {
                    Ok(theme) => json!({ "theme": theme }),
                    Err(e) => json!({ "error": e.to_string() }),
                };
                (name.clone(), value)
            })
            .collect();
        println!("{}", json!({ "current": recorded, "applications": applications }));
        return;
    }

    match recorded {
        Some(name) => println!("{name}"),
        None => renderer.warn("no theme recorded yet"),
    }
    if reported.is_empty() {
        return;
    }
    renderer.section("applications");
    for (name, result) in &reported {
        let value = match result {
            Ok(Some(theme)) => theme.clone(),
            Ok(None) => "unknown".to_string(),
            Err(e) => format!("error: {e}"),
        };
        renderer.field(name, &value);
    }
}

fn apps(loaded: &LoadedSettings, renderer: &Renderer) {
    let settings = &loaded.settings;
    if settings.applications.is_empty() {
        renderer.warn(&format!(
            "no applications configured in {}",
            loaded.path.display()
        ));
        return;
    }
    let targets = settings.default_targets();
    renderer.section("applications");
    for (name, app) in &settings.applications {
        let value = if targets.contains(name) {
            app.kind().to_string()
        } else {
            format!("{} (disabled)", app.kind())
        };
        renderer.field(name, &value);
    }
}

fn init(args: &Args, force: bool, renderer: &Renderer) -> Result<ExitCode, SwitchError> {
    let path = settings_path_for_init(args.config.as_deref()).ok_or_else(|| {
        SettingsError::Invalid("unable to resolve a settings path; pass --config".to_string())
    })?;
    match initialize_settings_file(&path, force)? {
        SettingsInitResult::Created { path } => {
            renderer.section("created settings");
            renderer.field("path", &path.display().to_string());
        }
        SettingsInitResult::AlreadyInitialized { path } => {
            renderer.warn(&format!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ));
        }
        SettingsInitResult::Overwritten { path, backup_path } => {
            renderer.section("overwrote settings");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn settings_path_for_init(path_override: Option<&str>) -> Option<PathBuf> {
    path_override
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var(CONFIG_PATH_ENV)
                .ok()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_settings_path)
}
