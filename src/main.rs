mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();
    cli::logging::init(args.verbose, args.quiet);

    let result = AppConfig::load(args.config.as_deref()).and_then(|config| match &args.command {
        Commands::WriteVariables(cmd) => cli::commands::write_variables::execute(cmd, &config),
        Commands::Subnets {
            target,
            sample,
            gate_url,
        } => cli::commands::subnets::execute(
            *target,
            sample.as_deref(),
            gate_url.as_deref(),
            &config,
        ),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
