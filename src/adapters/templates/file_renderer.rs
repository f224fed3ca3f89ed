use std::path::PathBuf;

use crate::core::errors::{PipesError, Result};
use crate::core::traits::renderer::{RenderContext, TemplateRenderer};

use super::placeholders::render_placeholders;

/// Renders templates read from a directory.
///
/// Lookup order for template `name` and environment `env`:
/// 1. `{templates_dir}/{env}/{name}` (per-environment override)
/// 2. `{templates_dir}/{name}`
pub struct FileTemplateRenderer {
    templates_dir: PathBuf,
}

impl FileTemplateRenderer {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    fn candidates(&self, name: &str, env: &str) -> [PathBuf; 2] {
        [
            self.templates_dir.join(env).join(name),
            self.templates_dir.join(name),
        ]
    }

    fn resolve(&self, name: &str, env: &str) -> Result<PathBuf> {
        let candidates = self.candidates(name, env);
        if let Some(found) = candidates.iter().find(|p| p.is_file()) {
            return Ok(found.clone());
        }

        let searched = candidates
            .iter()
            .map(|p| format!("✗ {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n    ");
        Err(PipesError::TemplateNotFound { searched })
    }
}

impl TemplateRenderer for FileTemplateRenderer {
    fn render(&self, name: &str, context: &RenderContext<'_>) -> Result<String> {
        let path = self.resolve(name, context.env)?;
        let source = std::fs::read_to_string(&path).map_err(|e| PipesError::RenderError {
            template: path.display().to_string(),
            env: context.env.to_string(),
            detail: e.to_string(),
        })?;
        render_placeholders(name, &source, context)
    }
}
