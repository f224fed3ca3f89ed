use crate::core::errors::Result;

/// Bindings available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub env: &'a str,
    pub app: &'a str,
}

/// Port for rendering named templates into text.
///
/// Implementations must be deterministic: the same name and context
/// always produce the same text.
pub trait TemplateRenderer: Send + Sync {
    /// Render `name` with the given bindings.
    ///
    /// Fails with `TemplateNotFound` when no such template exists and
    /// with `RenderError` when the template cannot be rendered.
    fn render(&self, name: &str, context: &RenderContext<'_>) -> Result<String>;
}
