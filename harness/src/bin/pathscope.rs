//! pathscope - find paths through the built-in graphs with BFS, DFS or A*.
//!
//! ```text
//! pathscope CampusMap Gate Hostel astar
//! pathscope UrbanGrid-6x6 "(0, 0)" "(5, 5)" bfs --steps
//! pathscope --config run.json --json
//! pathscope --list
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use pathscope_harness::catalogue::{catalogue, graph_by_name, render_listing, render_nodes};
use pathscope_harness::config::{load_run_config, RunConfig};
use pathscope_harness::logging;
use pathscope_harness::runner::{run_recorded, RunError};
use pathscope_search::algorithm::Algorithm;

/// Shortest-path finder over the built-in graphs (BFS, DFS, A*)
#[derive(Parser, Debug)]
#[command(name = "pathscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph to use (see --list)
    graph: Option<String>,

    /// Start node, e.g. 'Gate', '7' or '(0, 0)'
    start: Option<String>,

    /// Goal node
    goal: Option<String>,

    /// Algorithm: bfs | dfs | astar
    algorithm: Option<Algorithm>,

    /// List graphs, and the nodes of GRAPH if given
    #[arg(long)]
    list: bool,

    /// Read the run from a JSON config file instead of positionals
    #[arg(long, value_name = "FILE", conflicts_with_all = ["graph", "start", "goal", "algorithm"])]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print every expansion before the report
    #[arg(long)]
    steps: bool,

    /// Charge 1 per edge regardless of weight
    #[arg(long)]
    unit_costs: bool,

    /// Stop after this many expansions
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    max_expansions: Option<u64>,

    /// Debug logging on stderr
    #[arg(long, short)]
    verbose: bool,

    /// Log filter, e.g. 'trace' or 'pathscope_search=trace'
    #[arg(long, env = "PATHSCOPE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.list {
        return list(cli.graph.as_deref());
    }

    let mut config = match &cli.config {
        Some(path) => load_run_config(path)?,
        None => positional_config(cli).unwrap_or_else(|e| e.exit()),
    };
    if cli.unit_costs {
        config.policy.unit_costs = true;
    }
    if cli.max_expansions.is_some() {
        config.policy.max_expansions = cli.max_expansions;
    }
    tracing::debug!(?config, "resolved run config");

    let max_frames = if cli.steps { usize::MAX } else { 0 };
    let (report, frames) = run_recorded(&config, max_frames)?;

    if cli.json {
        let mut value = report.to_json_value();
        if cli.steps {
            value["frames"] = frames.iter().map(|f| f.to_json_value()).collect();
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for frame in &frames {
            println!("{}", frame.render_line());
        }
        print!("{}", report.render_text());
    }
    Ok(())
}

/// Build a config from the four positionals; a usage error if any is missing.
fn positional_config(cli: &Cli) -> Result<RunConfig, clap::Error> {
    match (&cli.graph, &cli.start, &cli.goal, cli.algorithm) {
        (Some(graph), Some(start), Some(goal), Some(algorithm)) => {
            Ok(RunConfig::new(graph, start, goal, algorithm))
        }
        _ => Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "GRAPH, START, GOAL and ALGORITHM are required unless --config or --list is given",
        )),
    }
}

fn list(graph: Option<&str>) -> Result<(), CliError> {
    print!("{}", listing(graph)?);
    Ok(())
}

/// Catalogue listing, followed by the nodes of `graph` if given.
fn listing(graph: Option<&str>) -> Result<String, CliError> {
    let entries = catalogue().map_err(RunError::from)?;
    let mut out = render_listing(&entries);
    if let Some(name) = graph {
        let entry = graph_by_name(name)
            .map_err(RunError::from)?
            .ok_or_else(|| RunError::UnknownGraph {
                name: name.to_string(),
            })?;
        out.push_str(&render_nodes(&entry.graph));
    }
    Ok(out)
}
