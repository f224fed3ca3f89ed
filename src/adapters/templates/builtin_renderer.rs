use crate::core::errors::{PipesError, Result};
use crate::core::services::config_merger::DEFAULT_CONFIGS_TEMPLATE;
use crate::core::traits::renderer::{RenderContext, TemplateRenderer};

use super::placeholders::render_placeholders;

/// Default resource settings shipped with the binary.
const CONFIGS_TEMPLATE: &str = include_str!("../../../templates/configs.json.j2");

/// Renders the templates compiled into the binary.
///
/// Used when no templates directory is configured.
pub struct BuiltinTemplateRenderer;

impl BuiltinTemplateRenderer {
    fn source(name: &str) -> Option<&'static str> {
        match name {
            DEFAULT_CONFIGS_TEMPLATE => Some(CONFIGS_TEMPLATE),
            _ => None,
        }
    }
}

impl TemplateRenderer for BuiltinTemplateRenderer {
    fn render(&self, name: &str, context: &RenderContext<'_>) -> Result<String> {
        let source = Self::source(name).ok_or_else(|| PipesError::TemplateNotFound {
            searched: format!("✗ {name} (built-in)"),
        })?;
        render_placeholders(name, source, context)
    }
}
