use serde_json::Value;

use crate::core::errors::{PipesError, Result};
use crate::core::models::app_configs::{AppConfigs, ResourceConfig};
use crate::core::models::app_name::AppName;
use crate::core::models::merged_config::{EnvironmentConfig, MergedConfig};
use crate::core::traits::diagnostics::DiagnosticSink;
use crate::core::traits::renderer::{RenderContext, TemplateRenderer};

/// Template holding the default resource settings for an environment.
pub const DEFAULT_CONFIGS_TEMPLATE: &str = "configs.json.j2";

/// Layers caller overrides on top of template-rendered defaults.
///
/// Precedence is per top-level resource key: an override for `elb`
/// replaces the whole default `elb` block, even if the default sets
/// properties the override does not mention. There is no deep merge.
pub struct ConfigMerger<'a> {
    renderer: &'a dyn TemplateRenderer,
    diagnostics: &'a dyn DiagnosticSink,
    template: String,
}

impl<'a> ConfigMerger<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            renderer,
            diagnostics,
            template: DEFAULT_CONFIGS_TEMPLATE.to_string(),
        }
    }

    /// Use a different template name for the defaults.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Merge every environment in input order.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` / `RenderError` if the defaults cannot be
    ///   rendered for an environment.
    /// - `ParseError` if the rendered text is not a JSON object.
    ///
    /// The first failure aborts the merge; no partial result is returned.
    pub fn merge(&self, app_configs: &AppConfigs, app: &AppName) -> Result<MergedConfig> {
        let mut environments = Vec::with_capacity(app_configs.len());

        for (env, overrides) in app_configs.iter() {
            let defaults = self.render_defaults(env, app)?;
            environments.push(EnvironmentConfig {
                name: env.to_string(),
                resources: Self::overlay(overrides, defaults),
            });
        }

        Ok(MergedConfig { environments })
    }

    /// Render and parse the default resources for one environment.
    fn render_defaults(&self, env: &str, app: &AppName) -> Result<ResourceConfig> {
        let context = RenderContext {
            env,
            app: app.as_str(),
        };
        let text = self.renderer.render(&self.template, &context)?;
        self.diagnostics
            .debug(&format!("Rendered {} for {env}:\n{text}", self.template));

        let source_name = format!("{} ({env})", self.template);
        let value: Value = serde_json::from_str(&text).map_err(|e| PipesError::ParseError {
            source_name: source_name.clone(),
            detail: e.to_string(),
        })?;

        match value {
            Value::Object(resources) => Ok(resources),
            _ => Err(PipesError::ParseError {
                source_name,
                detail: "rendered defaults must be a JSON object".into(),
            }),
        }
    }

    /// Overrides win per resource key.
    ///
    /// Default keys keep their rendered order; keys only present in the
    /// overrides follow in override order.
    fn overlay(overrides: &ResourceConfig, defaults: ResourceConfig) -> ResourceConfig {
        let mut merged = defaults;
        for (resource, value) in overrides {
            merged.insert(resource.clone(), value.clone());
        }
        merged
    }
}
