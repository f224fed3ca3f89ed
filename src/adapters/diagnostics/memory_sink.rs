use std::sync::Mutex;

use crate::core::traits::diagnostics::DiagnosticSink;

/// Records every message with its level, for assertions in tests.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(&'static str, String)>>,
}

impl MemorySink {
    /// True if a message at `level` contains `needle`.
    pub fn contains(&self, level: &str, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == "warn")
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: &'static str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl DiagnosticSink for MemorySink {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
}
