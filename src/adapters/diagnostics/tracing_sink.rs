use crate::core::traits::diagnostics::DiagnosticSink;

/// Forwards diagnostics to `tracing` under the given target.
pub struct TracingSink {
    component: &'static str,
}

impl TracingSink {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl DiagnosticSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(component = self.component, "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(component = self.component, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = self.component, "{message}");
    }
}
