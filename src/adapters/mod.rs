pub mod diagnostics;
pub mod gate;
pub mod sources;
pub mod templates;
pub mod writers;
