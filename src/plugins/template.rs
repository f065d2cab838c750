//! Template-rendering handler.

use std::path::PathBuf;

use crate::error::ApplyError;
use crate::template::render_file;
use crate::theme::Theme;

use super::{run_command, ThemeApplier};

/// Renders a template into a destination file, then runs an optional reload
/// command.
#[derive(Debug, Clone)]
pub struct TemplatePlugin {
    name: String,
    template: PathBuf,
    destination: PathBuf,
    reload: Vec<String>,
}

impl TemplatePlugin {
    pub fn new(
        name: impl Into<String>,
        template: PathBuf,
        destination: PathBuf,
        reload: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template,
            destination,
            reload,
        }
    }
}

impl ThemeApplier for TemplatePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "template"
    }

    fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
        render_file(&self.template, &self.destination, theme)?;
        if !self.reload.is_empty() {
            run_command(&self.reload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{sample_theme, TestTempDir};

    #[test]
    fn renders_into_destination() {
        let dir = TestTempDir::new("template-plugin");
        let template = dir.write_text("kitty.tmpl", "background {{base00}}\n");
        let destination = dir.child("out/kitty.conf");
        let plugin = TemplatePlugin::new("kitty", template, destination.clone(), Vec::new());

        plugin.apply(&sample_theme("gray", 0x20)).unwrap();
        assert_eq!(
            std::fs::read_to_string(destination).unwrap(),
            "background #202020\n"
        );
    }

    #[test]
    fn missing_template_is_template_io_error() {
        let dir = TestTempDir::new("template-plugin-missing");
        let plugin = TemplatePlugin::new(
            "kitty",
            dir.child("missing.tmpl"),
            dir.child("out.conf"),
            Vec::new(),
        );
        let err = plugin.apply(&sample_theme("gray", 0)).unwrap_err();
        assert!(matches!(err, ApplyError::TemplateIo { .. }), "{err}");
        assert!(!dir.child("out.conf").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_reload_is_reported_after_writing() {
        let dir = TestTempDir::new("template-plugin-reload");
        let template = dir.write_text("t.tmpl", "{{base01}}");
        let destination = dir.child("t.conf");
        let plugin = TemplatePlugin::new(
            "t",
            template,
            destination.clone(),
            vec!["false".to_string()],
        );

        let err = plugin.apply(&sample_theme("gray", 0)).unwrap_err();
        assert!(matches!(err, ApplyError::Command { ref program, .. } if program == "false"));
        assert_eq!(std::fs::read_to_string(destination).unwrap(), "#010101");
    }
}
