//! Application handlers and the registry that dispatches to them.
//!
//! Each configured application maps to one [`ThemeApplier`]. Dispatch is a
//! direct lookup by name; names without a handler fail with
//! [`ApplyError::UnknownApplication`] before any file is touched.

mod command;
mod template;
mod xresources;

pub use command::{run_command, CommandPlugin};
pub use template::TemplatePlugin;
pub use xresources::{XresourcesPlugin, XRESOURCES_MARKER};

use std::collections::BTreeMap;

use crate::config::{ApplicationConfig, Settings};
use crate::error::ApplyError;
use crate::theme::Theme;

/// A handler that knows how to push a theme into one application.
///
/// Implement this trait to add custom handlers. Register instances with
/// [`PluginRegistry`] before switching.
pub trait ThemeApplier {
    /// Application name as configured under `[applications.<name>]`.
    fn name(&self) -> &str;

    /// Short kind label for listings.
    fn kind(&self) -> &'static str;

    /// Apply `theme` to the application.
    fn apply(&self, theme: &Theme) -> Result<(), ApplyError>;

    /// Theme the application currently uses, when it can tell.
    fn current_theme(&self) -> Result<Option<String>, ApplyError> {
        Ok(None)
    }
}

/// Build the built-in handler for one configured application.
pub fn handler_for(name: &str, config: &ApplicationConfig) -> Box<dyn ThemeApplier> {
    match config {
        ApplicationConfig::Template {
            template,
            destination,
            reload,
        } => Box::new(TemplatePlugin::new(
            name,
            template.clone(),
            destination.clone(),
            reload.clone(),
        )),
        ApplicationConfig::Xresources { include, merge } => {
            Box::new(XresourcesPlugin::new(name, include.clone(), merge.clone()))
        }
        ApplicationConfig::Command { command } => {
            Box::new(CommandPlugin::new(name, command.clone()))
        }
    }
}

/// Registry of application handlers keyed by name.
pub struct PluginRegistry {
    plugins: BTreeMap<String, Box<dyn ThemeApplier>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// Register one handler per configured application.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();
        for (name, config) in &settings.applications {
            registry.register_boxed(handler_for(name, config));
        }
        registry
    }

    /// Register a handler, replacing any previous one with the same name.
    pub fn register(&mut self, plugin: impl ThemeApplier + 'static) {
        self.register_boxed(Box::new(plugin));
    }

    fn register_boxed(&mut self, plugin: Box<dyn ThemeApplier>) {
        let name = plugin.name().to_string();
        if self.plugins.insert(name.clone(), plugin).is_some() {
            tracing::debug!(application = %name, "replaced registered handler");
        }
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Result<&dyn ThemeApplier, ApplyError> {
        self.plugins
            .get(name)
            .map(|plugin| plugin.as_ref())
            .ok_or_else(|| ApplyError::UnknownApplication(name.to_string()))
    }

    /// Find a handler by name and apply `theme` with it.
    pub fn apply(&self, name: &str, theme: &Theme) -> Result<(), ApplyError> {
        let plugin = self.get(name)?;
        tracing::debug!(
            application = name,
            kind = plugin.kind(),
            theme = theme.name(),
            "applying theme"
        );
        plugin.apply(theme)
    }

    /// Ask a handler which theme its application currently uses.
    pub fn current_theme(&self, name: &str) -> Result<Option<String>, ApplyError> {
        self.get(name)?.current_theme()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ThemeApplier> {
        self.plugins.values().map(|plugin| plugin.as_ref())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{sample_theme, TestTempDir};
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct RecordingPlugin {
        name: &'static str,
        applied: RefCell<Vec<String>>,
    }

    impl RecordingPlugin {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                applied: RefCell::new(Vec::new()),
            }
        }
    }

    impl ThemeApplier for RecordingPlugin {
        fn name(&self) -> &str {
            self.name
        }
        fn kind(&self) -> &'static str {
            "recording"
        }
        fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
            self.applied.borrow_mut().push(theme.name().to_string());
            Ok(())
        }
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(PluginRegistry::new().is_empty());
        assert!(PluginRegistry::default().is_empty());
    }

    #[test]
    fn dispatches_by_name() {
        let mut registry = PluginRegistry::new();
        registry.register(RecordingPlugin::new("kitty"));
        registry.apply("kitty", &sample_theme("gray", 0)).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("kitty").unwrap().kind(), "recording");
        assert_eq!(registry.current_theme("kitty").unwrap(), None);
    }

    #[test]
    fn unknown_application_is_rejected() {
        let registry = PluginRegistry::new();
        let err = registry.apply("nope", &sample_theme("gray", 0)).unwrap_err();
        assert!(matches!(err, ApplyError::UnknownApplication(ref name) if name == "nope"));
    }

    #[test]
    fn from_settings_registers_every_application_sorted() {
        let dir = TestTempDir::new("registry");
        let mut settings = Settings::default();
        settings.applications.insert(
            "xorg".to_string(),
            ApplicationConfig::Xresources {
                include: dir.child("theme.Xresources"),
                merge: None,
            },
        );
        settings.applications.insert(
            "kitty".to_string(),
            ApplicationConfig::Template {
                template: PathBuf::from("kitty.tmpl"),
                destination: dir.child("kitty.conf"),
                reload: Vec::new(),
            },
        );
        settings.applications.insert(
            "hook".to_string(),
            ApplicationConfig::Command {
                command: vec!["true".to_string()],
            },
        );

        let registry = PluginRegistry::from_settings(&settings);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hook", "kitty", "xorg"]);
        let kinds: Vec<_> = registry.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec!["command", "template", "xresources"]);
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = PluginRegistry::new();
        registry.register(RecordingPlugin::new("a"));
        registry.register(RecordingPlugin::new("a"));
        assert_eq!(registry.len(), 1);
    }
}
