#[cfg(test)]
pub mod memory_sink;
pub mod tracing_sink;
