use std::path::PathBuf;

/// All domain errors for pipes.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum PipesError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Failed to render template '{template}' for environment '{env}': {detail}\n\n  \
         Templates support the placeholders {{{{ env }}}} and {{{{ app }}}} only."
    )]
    RenderError {
        template: String,
        env: String,
        detail: String,
    },

    #[error(
        "No template file found\n\n  \
         pipes searched for:\n    \
         {searched}\n\n  \
         Solutions:\n    \
         → Pass a templates directory: pipes write-variables --templates <dir>\n    \
         → Or set it in .pipes/config.toml:\n      \
           [pipes]\n      \
           templates_dir = \"path/to/templates\""
    )]
    TemplateNotFound { searched: String },

    #[error(
        "Parse error in {source_name}: {detail}\n\n  \
         Expected a JSON object mapping resource names to settings,\n  \
         e.g. {{\"elb\": {{\"subnet_purpose\": \"internal\"}}}}."
    )]
    ParseError { source_name: String, detail: String },

    #[error("Failed to encode value: {detail}")]
    EncodeError { detail: String },

    #[error(
        "Invalid git short name '{value}'\n\n  \
         Expected the form group/repo, e.g. forrest/core."
    )]
    InvalidGitShort { value: String },

    #[error(
        "Invalid environment name '{name}'\n\n  \
         Environment names may contain only letters, digits, '-' and '_'."
    )]
    InvalidEnvironment { name: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Gate request failed: {reason}\n\n  \
         Check the Gate URL (--gate-url or [pipes] gate_url in .pipes/config.toml)\n  \
         or use --sample <file> to read subnets from a local JSON file."
    )]
    GateRequestFailed { reason: String },

    #[error("Failed to write {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipesError>;
