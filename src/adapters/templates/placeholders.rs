//! `{{ name }}` substitution shared by the template renderers.

use crate::core::errors::{PipesError, Result};
use crate::core::traits::renderer::RenderContext;

/// Replaces every `{{ env }}` and `{{ app }}` in `source`.
///
/// Whitespace inside the braces is optional. Single braces pass through
/// untouched, so JSON bodies need no escaping.
pub(super) fn render_placeholders(
    template: &str,
    source: &str,
    context: &RenderContext<'_>,
) -> Result<String> {
    let error = |detail: String| PipesError::RenderError {
        template: template.to_string(),
        env: context.env.to_string(),
        detail,
    };

    let mut result = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open
            .find("}}")
            .ok_or_else(|| error("unclosed '{{'".into()))?;

        let name = after_open[..end].trim();
        let value = lookup(name, context)
            .ok_or_else(|| error(format!("unknown placeholder '{name}'")))?;
        result.push_str(value);

        rest = &after_open[end + 2..];
    }
    result.push_str(rest);

    Ok(result)
}

fn lookup<'a>(name: &str, context: &RenderContext<'a>) -> Option<&'a str> {
    match name {
        "env" => Some(context.env),
        "app" => Some(context.app),
        _ => None,
    }
}
