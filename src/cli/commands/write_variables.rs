use std::path::PathBuf;

use crate::adapters::diagnostics::tracing_sink::TracingSink;
use crate::adapters::sources::json_file_source::JsonFileSource;
use crate::adapters::sources::runway_dir_source::RunwayDirSource;
use crate::adapters::templates::builtin_renderer::BuiltinTemplateRenderer;
use crate::adapters::templates::file_renderer::FileTemplateRenderer;
use crate::adapters::writers::file_artifact_writer::FileArtifactWriter;
use crate::cli::WriteVariablesArgs;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::app_configs::validate_env_name;
use crate::core::services::variable_export::VariableExporter;
use crate::core::traits::config_source::AppConfigSource;
use crate::core::traits::renderer::TemplateRenderer;

/// Default runway directory when neither `--app-configs` nor
/// `--runway-dir` is given.
const DEFAULT_RUNWAY_DIR: &str = "runway";

/// Execute `pipes write-variables`.
///
/// Loads the app configs, merges them with the rendered defaults and
/// writes `out_file`, `out_file.exports` and `out_file.json`.
pub fn execute(args: &WriteVariablesArgs, config: &AppConfig) -> Result<()> {
    let sink = TracingSink::new("write_variables");

    let envs = if args.envs.is_empty() {
        config.envs()
    } else {
        for env in &args.envs {
            validate_env_name(env)?;
        }
        args.envs.clone()
    };

    let source: Box<dyn AppConfigSource + '_> = match &args.app_configs {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            let dir = args
                .runway_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNWAY_DIR));
            Box::new(RunwayDirSource::new(dir, envs, &sink))
        }
    };

    let renderer: Box<dyn TemplateRenderer> = match args
        .templates
        .clone()
        .or_else(|| config.pipes.templates_dir.clone())
    {
        Some(dir) => Box::new(FileTemplateRenderer::new(dir)),
        None => Box::new(BuiltinTemplateRenderer),
    };

    let out_file = args.out_file.clone().unwrap_or_else(|| config.out_file());

    output::header(&format!("Generating variables for {}", args.git_short));

    let app_configs = source.load()?;
    if app_configs.is_empty() {
        output::warning("No environments to process; variable files will be empty");
    }
    output::success(&format!(
        "Loaded {} environment(s) from {}",
        app_configs.len(),
        source.describe()
    ));

    let writer = FileArtifactWriter::new(out_file, &sink);
    let mut exporter = VariableExporter::new(renderer.as_ref(), &writer, &sink);
    if let Some(template) = &config.templates.configs {
        exporter = exporter.with_template(template.as_str());
    }

    let summary = exporter.export(&app_configs, &args.git_short)?;

    output::success(&format!(
        "Merged {} environment(s) for app {}: {}",
        summary.environments.len(),
        summary.app,
        summary.environments.join(", ")
    ));
    output::success(&format!("Wrote {} variable(s)", summary.variables));
    for path in &summary.artifacts {
        output::success(&format!("Written to {}", path.display()));
    }

    Ok(())
}
