//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Subcommands of the annotator CLI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the identity providers available for login
    Providers,
    /// Start an OAuth login with the given provider
    Login {
        /// Provider name (huggingface, github, google)
        provider: String,
    },
    /// Show a record and its answer
    Show {
        /// Record id
        record_id: String,
    },
    /// Delete a record's answer and reset it locally
    Clear {
        /// Record id
        record_id: String,
    },
}

/// CLI arguments for annotator
#[derive(Parser, Debug)]
#[command(name = "annotator")]
#[command(author, version, about = "Annotation client - records, answers and OAuth login")]
#[command(long_about = r#"
Annotator works with annotation records and the login providers of an
annotation server.

Configuration files are loaded from (in priority order):
1. ANNOTATOR_* environment variables (e.g. ANNOTATOR_OAUTH__AUTHORIZE_URL)
2. --config <path>     Explicit config file
3. ./annotator.toml    Project-level config
4. ~/.config/annotator/config.toml   Global config

Example:
  annotator providers
  annotator login huggingface
  annotator --records records.json clear rec-1
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file holding the records (overrides records.data_file)
    #[arg(long, value_name = "PATH", global = true)]
    pub records: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write diagnostic logs to this file as well
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
