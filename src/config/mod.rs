pub mod config_file;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "data-fixtures"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Check the fixtures directory resolved from an application configuration file")
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Configuration file (.toml or .json) holding `doctrine.fixtures`
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "config/doctrine.toml"))]
    pub config: String,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}
