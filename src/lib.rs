// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::config::model::GraphFile;

pub use crate::dag::{Dag, Node, NodeId};
pub use crate::errors::DagError;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the description file, builds the graph and answers
/// the requested command on `out`.
pub fn run(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let file = load_and_validate(&config_path)?;
    let mut dag = file.build_dag()?;

    info!(
        path = %config_path.display(),
        nodes = dag.node_count(),
        edges = dag.edge_count(),
        "loaded DAG description"
    );

    match args.command {
        Command::Check => {
            writeln!(
                out,
                "ok: {} nodes, {} edges",
                dag.node_count(),
                dag.edge_count()
            )?;
        }
        Command::Render => {
            write!(out, "{}", dag.render())?;
        }
        Command::Order => {
            let order = dag.topological_names()?;
            writeln!(out, "{}", order.join(" -> "))?;
        }
        Command::Paths { from, to } => {
            let max_paths = effective_max_paths(args.max_paths, &file);
            print_paths(&dag, &from, &to, max_paths, out)?;
        }
        Command::Link { from, to } => {
            let added = dag.add_edge(&from, &to)?;
            writeln!(out, "added edge {from} -> {to}: {added}")?;
            write!(out, "{}", dag.render())?;
        }
    }

    Ok(())
}

/// The CLI flag wins over `[config].max_paths`.
fn effective_max_paths(cli: Option<usize>, file: &GraphFile) -> Option<usize> {
    cli.or(file.config.max_paths)
}

fn print_paths(
    dag: &Dag<String>,
    from: &str,
    to: &str,
    max_paths: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let paths: Vec<Vec<NodeId>> = match max_paths {
        Some(max) => dag.all_paths_limited(from, to, max)?,
        None => dag.all_paths(from, to)?,
    };

    if paths.is_empty() {
        writeln!(out, "no path from {from} to {to}")?;
        return Ok(());
    }

    for path in paths.iter() {
        writeln!(out, "{}", dag.names_of(path).join(" -> "))?;
    }

    debug!(count = paths.len(), ?max_paths, "printed paths");
    Ok(())
}
