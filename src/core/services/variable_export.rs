use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::app_configs::AppConfigs;
use crate::core::models::app_name::AppName;
use crate::core::services::config_merger::{ConfigMerger, DEFAULT_CONFIGS_TEMPLATE};
use crate::core::services::variable_flattener::VariableFlattener;
use crate::core::traits::artifact_writer::ArtifactWriter;
use crate::core::traits::diagnostics::DiagnosticSink;
use crate::core::traits::renderer::TemplateRenderer;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub app: String,
    pub environments: Vec<String>,
    pub variables: usize,
    pub artifacts: Vec<PathBuf>,
}

/// Runs merge → flatten → write for one invocation.
///
/// Everything is computed before the first artifact is touched, so a
/// render or parse failure leaves the output paths untouched.
pub struct VariableExporter<'a> {
    renderer: &'a dyn TemplateRenderer,
    writer: &'a dyn ArtifactWriter,
    diagnostics: &'a dyn DiagnosticSink,
    template: String,
}

impl<'a> VariableExporter<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        writer: &'a dyn ArtifactWriter,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            renderer,
            writer,
            diagnostics,
            template: DEFAULT_CONFIGS_TEMPLATE.to_string(),
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn export(&self, app_configs: &AppConfigs, git_short: &str) -> Result<ExportSummary> {
        let app = AppName::from_git_short(git_short)?;
        self.diagnostics
            .debug(&format!("Application name for {git_short}: {app}"));

        let merged = ConfigMerger::new(self.renderer, self.diagnostics)
            .with_template(self.template.as_str())
            .merge(app_configs, &app)?;

        let records = VariableFlattener::new(self.diagnostics).flatten(&merged)?;

        self.writer.write(&records, &merged)?;

        Ok(ExportSummary {
            app: app.to_string(),
            environments: merged.env_names().into_iter().map(String::from).collect(),
            variables: records.len(),
            artifacts: self.writer.artifact_paths(),
        })
    }
}
