pub mod artifact_writer;
pub mod config_source;
pub mod diagnostics;
pub mod renderer;
pub mod subnet_source;
