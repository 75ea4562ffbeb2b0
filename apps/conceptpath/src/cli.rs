//! # CLI Commands
//!
//! Argument definitions and command implementations. Every command returns
//! the text it would print, so the binary only parses, dispatches and
//! writes to stdout.

use clap::{Parser, Subcommand, ValueEnum};
use conceptpath_core::{
    gather_knowledge, graph_from_bytes, graph_to_bytes, BriefRenderer, ConceptGraph,
    ConceptPathError, ConceptUriNormalizer, NaturalRenderer, PathFinder, PathRenderer,
    SerializableGraph, VerboseRenderer, DEFAULT_MAX_PATHS, DEFAULT_MAX_PATH_LEN,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ConceptPathError),

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "conceptpath", version, about = "Connect terms through a concept graph")]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find and render the shortest path between two terms
    Path {
        /// Graph snapshot (.json or binary)
        #[arg(long)]
        graph: PathBuf,
        start: String,
        end: String,
        /// Maximum number of nodes in a path
        #[arg(long, default_value_t = DEFAULT_MAX_PATH_LEN)]
        max_len: usize,
        #[arg(long, value_enum, default_value_t = RenderStyle::Brief)]
        style: RenderStyle,
        #[arg(long)]
        json: bool,
    },

    /// Summarize paths between two comma-separated term sets
    Knowledge {
        #[arg(long)]
        graph: PathBuf,
        #[arg(long)]
        premise: String,
        #[arg(long)]
        choice: String,
        #[arg(long, default_value_t = DEFAULT_MAX_PATH_LEN)]
        max_len: usize,
        /// Maximum number of paths kept in the summary
        #[arg(long, default_value_t = DEFAULT_MAX_PATHS)]
        max_paths: usize,
        #[arg(long)]
        json: bool,
    },

    /// Print graph sizes
    Stats {
        #[arg(long)]
        graph: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Convert a JSON graph into a binary snapshot
    Snapshot {
        #[arg(long)]
        graph: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

/// How `path` renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    /// Node ids only
    Raw,
    /// `a --Rel--> b`
    Brief,
    /// Every node and parallel edge with ids and weights
    Verbose,
    /// One sentence per hop
    Natural,
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Path {
            graph,
            start,
            end,
            max_len,
            style,
            json,
        } => {
            let graph = load_graph(&graph)?;
            cmd_path(&graph, &start, &end, max_len, style, json)
        }
        Command::Knowledge {
            graph,
            premise,
            choice,
            max_len,
            max_paths,
            json,
        } => {
            let graph = load_graph(&graph)?;
            cmd_knowledge(
                &graph,
                &split_terms(&premise),
                &split_terms(&choice),
                max_len,
                max_paths,
                json,
            )
        }
        Command::Stats { graph, json } => {
            let graph = load_graph(&graph)?;
            cmd_stats(&graph, json)
        }
        Command::Snapshot { graph, output } => cmd_snapshot(&graph, &output),
    }
}

// =============================================================================
// GRAPH LOADING
// =============================================================================

/// Load a graph: `.json` files as JSON, anything else as a binary snapshot.
pub fn load_graph(path: &Path) -> Result<ConceptGraph, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = if is_json(path) {
        let sg: SerializableGraph = serde_json::from_slice(&bytes)?;
        ConceptGraph::try_from(sg)?
    } else {
        graph_from_bytes(&bytes)?
    };

    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Split a comma-separated term list, dropping blanks.
pub fn split_terms(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Shortest path between two terms in the chosen style.
pub fn cmd_path(
    graph: &ConceptGraph,
    start: &str,
    end: &str,
    max_len: usize,
    style: RenderStyle,
    json: bool,
) -> Result<String, CliError> {
    if max_len == 0 {
        return Err(CliError::InvalidArgument("--max-len must be at least 1".into()));
    }

    let finder = PathFinder::new(graph, ConceptUriNormalizer).with_max_path_len(max_len);
    let path = finder.find_word_path(start, end)?;

    if json {
        let rendered = match style {
            RenderStyle::Raw => serde_json::Value::Null,
            RenderStyle::Brief => json!(BriefRenderer.render(&path, graph)?),
            RenderStyle::Verbose => json!(VerboseRenderer.render(&path, graph)?),
            RenderStyle::Natural => serde_json::to_value(NaturalRenderer.render(&path, graph)?)?,
        };
        let out = json!({
            "start": start,
            "end": end,
            "max_len": max_len,
            "path": path.iter().map(|n| n.0).collect::<Vec<_>>(),
            "rendered": rendered,
        });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    if path.is_empty() {
        return Ok(format!(
            "no path between '{start}' and '{end}' within {max_len} nodes"
        ));
    }

    Ok(match style {
        RenderStyle::Raw => path
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        RenderStyle::Brief => BriefRenderer.render(&path, graph)?,
        RenderStyle::Verbose => VerboseRenderer.render(&path, graph)?.join("\n"),
        RenderStyle::Natural => {
            let told = NaturalRenderer.render(&path, graph)?;
            format!("{}\nweights: {:?}", told.text, told.weights)
        }
    })
}

/// Knowledge summary connecting two term sets.
pub fn cmd_knowledge(
    graph: &ConceptGraph,
    premise: &[String],
    choice: &[String],
    max_len: usize,
    max_paths: usize,
    json: bool,
) -> Result<String, CliError> {
    if premise.is_empty() || choice.is_empty() {
        return Err(CliError::InvalidArgument(
            "both --premise and --choice need at least one term".into(),
        ));
    }
    if max_len == 0 {
        return Err(CliError::InvalidArgument("--max-len must be at least 1".into()));
    }

    let finder = PathFinder::new(graph, ConceptUriNormalizer).with_max_path_len(max_len);
    let knowledge = gather_knowledge(&finder, premise, choice, max_paths)?;

    if json {
        let out = json!({
            "summary": knowledge.summary(),
            "paths": knowledge.paths,
        });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(knowledge.summary())
}

/// Graph sizes.
pub fn cmd_stats(graph: &ConceptGraph, json: bool) -> Result<String, CliError> {
    if json {
        let out = json!({
            "nodes": graph.node_count(),
            "labels": graph.label_count(),
            "edges": graph.edge_count(),
            "descriptors": graph.descriptor_count(),
        });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(format!(
        "nodes: {}\nlabels: {}\nedges: {}\ndescriptors: {}",
        graph.node_count(),
        graph.label_count(),
        graph.edge_count(),
        graph.descriptor_count()
    ))
}

/// Convert a JSON graph to a binary snapshot.
pub fn cmd_snapshot(input: &Path, output: &Path) -> Result<String, CliError> {
    if !is_json(input) {
        return Err(CliError::InvalidArgument(format!(
            "{} is not a .json graph",
            input.display()
        )));
    }

    let graph = load_graph(input)?;
    let bytes = graph_to_bytes(&graph)?;
    std::fs::write(output, &bytes).map_err(|source| CliError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(format!(
        "wrote {} nodes, {} edges ({} bytes) to {}",
        graph.node_count(),
        graph.edge_count(),
        bytes.len(),
        output.display()
    ))
}
