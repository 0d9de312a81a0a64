pub mod check;
pub mod init;
pub mod keys;
pub mod show;

pub use check::handle_check;
pub use init::handle_init;
pub use keys::handle_keys;
pub use show::{handle_show, OutputFormat};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "researcher")]
#[command(about = "Inspect and bootstrap AI Researcher settings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to .taskmaster/config.yaml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured log_level
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and validate the settings
    Check,
    /// Print the effective settings (secrets omitted)
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Create data directories and write the settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Report which provider API keys are available
    Keys,
}
