/// Port for diagnostic messages.
///
/// Passed into each component instead of reaching for a process-wide
/// logger, so callers decide where messages go.
pub trait DiagnosticSink: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
