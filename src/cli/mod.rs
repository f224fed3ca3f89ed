pub mod commands;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::models::subnet::SubnetTarget;

/// Merge per-environment app configs with template defaults and export them.
#[derive(Parser, Debug)]
#[command(name = "pipes", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge app configs with template defaults and write variable files
    WriteVariables(WriteVariablesArgs),

    /// List availability zones per account and region
    Subnets {
        /// Subnet purpose to collect zones for
        #[arg(long, value_enum, default_value_t = SubnetTarget::Ec2)]
        target: SubnetTarget,
        /// Read subnets from a saved JSON response instead of Gate
        #[arg(long)]
        sample: Option<PathBuf>,
        /// Gate API base URL
        #[arg(long, env = "GATE_URL")]
        gate_url: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct WriteVariablesArgs {
    /// Git short name of the application repository, e.g. forrest/core
    #[arg(long, env = "GIT_SHORT")]
    pub git_short: String,

    /// JSON file mapping environment to resource settings
    /// Takes precedence over --runway-dir and RUNWAY_DIR
    #[arg(long)]
    pub app_configs: Option<PathBuf>,

    /// Directory with application-master-{env}.json files (default: ./runway)
    #[arg(long, env = "RUNWAY_DIR")]
    pub runway_dir: Option<PathBuf>,

    /// Base path of the variable files (default: ./raw.properties)
    #[arg(long)]
    pub out_file: Option<PathBuf>,

    /// Directory containing configs.json.j2 (default: built-in template)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Environment to read from the runway directory. Repeatable.
    #[arg(long = "env")]
    pub envs: Vec<String>,
}
