//! Theme switching: resolve, apply to each application, record.
//!
//! Application updates are sequential and best-effort. A failure in one
//! application is reported in the [`SwitchReport`] and never rolls back or
//! skips the others.

use crate::config::Settings;
use crate::error::{ApplyError, SettingsError, SwitchError};
use crate::logging::SUMMARY_TARGET;
use crate::plugins::PluginRegistry;
use crate::theme::{Theme, ThemeCatalog};

/// Result of applying a theme to one application.
#[derive(Debug)]
pub struct AppOutcome {
    pub name: String,
    pub result: Result<(), ApplyError>,
}

/// Per-application results of one switch.
#[derive(Debug)]
pub struct SwitchReport {
    pub theme: Theme,
    pub outcomes: Vec<AppOutcome>,
}

impl SwitchReport {
    /// True when at least one application failed.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.result.is_err())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AppOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &AppOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok())
    }
}

/// Apply theme `name` to the targeted applications and record it in
/// `settings`.
///
/// `only` restricts the update to the named applications; when empty, the
/// settings' default targets are used. Theme resolution failures and unknown
/// `only` names are fatal and leave `settings` untouched. Once the theme
/// resolves, it is recorded even if some applications fail.
pub fn switch_theme(
    settings: &mut Settings,
    catalog: &ThemeCatalog,
    registry: &PluginRegistry,
    name: &str,
    only: &[String],
) -> Result<SwitchReport, SwitchError> {
    let theme = catalog.load(name)?;
    let targets = if only.is_empty() {
        settings.default_targets()
    } else {
        only.to_vec()
    };
    for target in &targets {
        registry.get(target)?;
    }
    if targets.is_empty() {
        tracing::warn!("no applications configured; only recording the theme");
    }

    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        let result = registry.apply(&target, &theme);
        match &result {
            Ok(()) => tracing::info!(application = %target, theme = theme.name(), "applied theme"),
            Err(e) => tracing::error!(application = %target, error = %e, "failed to apply theme"),
        }
        outcomes.push(AppOutcome {
            name: target,
            result,
        });
    }

    settings.current_theme = Some(theme.name().to_string());
    let report = SwitchReport { theme, outcomes };
    log_summary(&report);
    Ok(report)
}

/// Re-apply the recorded current theme.
pub fn reload_theme(
    settings: &mut Settings,
    catalog: &ThemeCatalog,
    registry: &PluginRegistry,
    only: &[String],
) -> Result<SwitchReport, SwitchError> {
    let Some(name) = settings.current_theme.clone() else {
        return Err(SettingsError::Invalid(
            "no current theme recorded; apply one with `base16-switcher <THEME>` first".to_string(),
        )
        .into());
    };
    switch_theme(settings, catalog, registry, &name, only)
}

/// Ask every registered application which theme it currently uses.
pub fn reported_themes(
    registry: &PluginRegistry,
) -> Vec<(String, Result<Option<String>, ApplyError>)> {
    registry
        .iter()
        .map(|plugin| (plugin.name().to_string(), plugin.current_theme()))
        .collect()
}

fn log_summary(report: &SwitchReport) {
    let theme = report.theme.name();
    if report.has_failures() {
        let failed: Vec<&str> = report.failed().map(|o| o.name.as_str()).collect();
        tracing::error!(
            target: SUMMARY_TARGET,
            "Switched to {theme}, but {} failed",
            failed.join(", ")
        );
    } else {
        tracing::info!(target: SUMMARY_TARGET, "Switched to {theme}");
    }
}
