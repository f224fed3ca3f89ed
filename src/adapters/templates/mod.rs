pub mod builtin_renderer;
pub mod file_renderer;
mod placeholders;
