use crate::types::{LogLevel, StatsFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archtally")]
#[command(about = "Codebase statistics and layered architecture reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "archtally.toml", global = true)]
    pub config: PathBuf,

    /// Line-counting binary to invoke (falls back to ARCHTALLY_CLOC, then "cloc")
    #[arg(long, global = true)]
    pub cloc_bin: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count lines and print per-project and per-language totals
    Stats {
        /// Paths to measure (defaults to the configured targets)
        paths: Vec<PathBuf>,

        #[arg(long, default_value = "plain")]
        format: StatsFormat,

        /// How many combined languages to list
        #[arg(long, default_value = "12")]
        top: usize,

        /// Keep measuring remaining paths when one fails
        #[arg(long)]
        keep_going: bool,
    },

    /// Count lines and write the interactive HTML report
    Report {
        /// Paths to measure (defaults to the configured targets)
        paths: Vec<PathBuf>,

        #[arg(long, short = 'o', default_value = "out/reports/archtally_report.html")]
        output: PathBuf,

        /// Report title (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        keep_going: bool,
    },

    /// Inspect the configured architecture topology
    Topology {
        #[command(subcommand)]
        command: TopologyCommand,
    },

    /// Write a starter config for the given paths
    Init {
        /// Paths the starter config should target
        paths: Vec<PathBuf>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TopologyCommand {
    /// Print the effective layers and edges
    Show,

    /// Validate the topology and list every problem found
    Check,
}
