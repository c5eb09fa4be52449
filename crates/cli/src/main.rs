//! `algo-trace` CLI entry-point.
//!
//! Available sub-commands:
//! - `graph`    — trace DFS, BFS or Dijkstra over a graph JSON file.
//! - `sort`     — trace QuickSort over a JSON array of numbers.
//! - `validate` — check a graph JSON file against the tracer preconditions.
//!
//! Traces go to stdout as JSON (or one narrated line per step with
//! `--narrate`); logs go to stderr, filtered by `RUST_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use steps::StepSequence;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracer::{Graph, GraphAlgorithm, GraphConfig, NodeId, PivotMethod, SortConfig};

#[derive(Parser)]
#[command(
    name = "algo-trace",
    about = "Replayable step traces of classic graph and sorting algorithms",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace a graph traversal.
    Graph {
        /// Path to the graph JSON file (`{nodes, links, directed}`).
        path: PathBuf,
        /// dfs, bfs or dijkstra.
        #[arg(long, short, default_value = "dfs")]
        algorithm: GraphAlgorithm,
        /// Id of the start node.
        #[arg(long, short)]
        start: NodeId,
        /// Weight assumed for links without one.
        #[arg(long, default_value_t = 1.0)]
        default_weight: f64,
        /// Print one human-readable line per step instead of JSON.
        #[arg(long)]
        narrate: bool,
    },
    /// Trace QuickSort over an array of numbers.
    Sort {
        /// Path to a JSON array of numbers.
        path: PathBuf,
        /// last, first, middle, random or median. Unknown names mean `last`.
        #[arg(long, short, default_value = "last")]
        pivot: String,
        /// Seed for the `random` pivot strategy.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        narrate: bool,
    },
    /// Validate a graph JSON file.
    Validate {
        path: PathBuf,
        /// Also require finite, nonnegative weights (needed by dijkstra).
        #[arg(long)]
        weights: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Graph { path, algorithm, start, default_weight, narrate } => {
            let graph: Graph = read_json(&path)?;
            let config = GraphConfig { default_weight };

            tracer::validate_graph(&graph)
                .with_context(|| format!("invalid graph in {}", path.display()))?;
            if algorithm == GraphAlgorithm::Dijkstra {
                tracer::validate_weights(&graph, &config)
                    .with_context(|| format!("weights in {} unusable by dijkstra", path.display()))?;
            }

            info!("Tracing {algorithm} from node {start}");
            let trace = algorithm.trace(&graph, start, &config);
            emit(&trace, narrate)
        }
        Command::Sort { path, pivot, seed, narrate } => {
            let mut array: Vec<f64> = read_json(&path)?;
            let config = SortConfig { pivot: PivotMethod::from_name(&pivot), seed };

            info!("Tracing quicksort of {} elements with '{}' pivot", array.len(), config.pivot);
            let trace = tracer::quicksort::trace(&mut array, &config);
            emit(&trace, narrate)
        }
        Command::Validate { path, weights } => {
            let graph: Graph = read_json(&path)?;
            let mut outcome = tracer::validate_graph(&graph);
            if weights {
                outcome = outcome.and_then(|()| tracer::validate_weights(&graph, &GraphConfig::default()));
            }

            match outcome {
                Ok(()) => {
                    println!(
                        "✅ Graph is valid: {} nodes, {} links",
                        graph.nodes.len(),
                        graph.links.len()
                    );
                    Ok(())
                }
                Err(e) => {
                    eprintln!("❌ Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn emit(trace: &StepSequence, narrate: bool) -> Result<()> {
    if narrate {
        for (index, step) in trace.iter().enumerate() {
            println!("{index:>4}  {step}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(trace)?);
    }
    Ok(())
}
