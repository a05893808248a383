// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `dagraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagraph",
    version,
    about = "Load a DAG description and query it.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the description file (TOML).
    #[arg(long, value_name = "PATH", default_value = "Dag.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Cap on the number of paths printed; overrides `[config].max_paths`.
    #[arg(long, value_name = "N")]
    pub max_paths: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every node with its children.
    Render,
    /// Print a topological order of all nodes.
    Order,
    /// Print every simple path between two nodes.
    Paths { from: String, to: String },
    /// Try to add an edge to the loaded graph and print the result.
    Link { from: String, to: String },
    /// Validate the description file only.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
