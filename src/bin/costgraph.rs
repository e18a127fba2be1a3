use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use costgraph::{io, Cost, CostPath, Graph, HopPath, PathOutcome, RandomGraphConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "costgraph")]
#[command(about = "Query, edit and generate directed graphs with integer edge costs", long_about = None)]
struct Cli {
    /// Graph file: `.json` snapshot, anything else is the text format
    #[arg(long, short, global = true)]
    graph: Option<PathBuf>,

    /// Print algorithm results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a random graph
    Generate {
        #[arg(long)]
        vertices: usize,
        #[arg(long)]
        edges: usize,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min_cost: i64,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max_cost: i64,
        #[arg(long)]
        seed: Option<u64>,
        /// Output file, format chosen by extension
        #[arg(long)]
        out: PathBuf,
    },
    #[command(flatten)]
    Query(Query),
    #[command(flatten)]
    Edit(Edit),
}

/// Subcommands that read the `--graph` file.
#[derive(Subcommand)]
enum Query {
    /// Vertex count, edge count and whether the graph is acyclic
    Info,
    /// List vertices in insertion order
    Vertices,
    /// List every edge as `source target cost`
    Edges,
    /// In- and out-degree of a vertex
    Degree { vertex: String },
    /// Neighbors of a vertex with edge costs
    Neighbors {
        vertex: String,
        /// List sources of incoming edges instead of targets of outgoing ones
        #[arg(long, default_value_t = false)]
        inbound: bool,
    },
    /// Whether an edge exists, and its cost
    Edge { source: String, target: String },
    /// Path with the fewest edges
    Bfs { source: String, destination: String },
    /// Minimum-cost walk, negative costs allowed (Bellman-Ford)
    MinCost { source: String, destination: String },
    /// Topological order of an acyclic graph
    Toposort,
    /// Highest-cost path in an acyclic graph
    Longest { source: String, destination: String },
    /// Re-encode the graph, format chosen by the output extension
    #[command(alias = "copy")]
    Convert {
        #[arg(long)]
        out: PathBuf,
    },
}

/// Subcommands that change the `--graph` file and write it back.
#[derive(Subcommand)]
enum Edit {
    /// Add an isolated vertex
    AddVertex {
        vertex: String,
        #[command(flatten)]
        target: Target,
    },
    /// Remove a vertex and its incident edges
    RemoveVertex {
        vertex: String,
        #[command(flatten)]
        target: Target,
    },
    /// Add an edge
    AddEdge {
        source: String,
        destination: String,
        #[arg(allow_negative_numbers = true)]
        cost: Cost,
        #[command(flatten)]
        target: Target,
    },
    /// Remove an edge
    RemoveEdge {
        source: String,
        destination: String,
        #[command(flatten)]
        target: Target,
    },
    /// Change the cost of an existing edge
    UpdateEdge {
        source: String,
        destination: String,
        #[arg(allow_negative_numbers = true)]
        cost: Cost,
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Args)]
struct Target {
    /// Write the edited graph here instead of back to --graph
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Edit {
    fn target(&self) -> &Target {
        match self {
            Edit::AddVertex { target, .. }
            | Edit::RemoveVertex { target, .. }
            | Edit::AddEdge { target, .. }
            | Edit::RemoveEdge { target, .. }
            | Edit::UpdateEdge { target, .. } => target,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Generate {
            vertices,
            edges,
            min_cost,
            max_cost,
            seed,
            out: path,
        } => {
            let mut config =
                RandomGraphConfig::new(*vertices, *edges).with_costs(*min_cost, *max_cost);
            if let Some(seed) = seed {
                config = config.with_seed(*seed);
            }
            let graph = config.generate()?;
            save(&graph, path, &mut out)?;
        }
        Commands::Query(query) => {
            let graph = load(graph_path(cli.graph.as_deref())?)?;
            run(&graph, query, cli.json, &mut out)?;
        }
        Commands::Edit(edit) => {
            edit_file(graph_path(cli.graph.as_deref())?, edit, &mut out)?;
        }
    }

    Ok(())
}

/// RUST_LOG wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn graph_path(path: Option<&Path>) -> Result<&Path> {
    match path {
        Some(path) => Ok(path),
        None => bail!("this command needs a graph: pass --graph <FILE>"),
    }
}

fn load(path: &Path) -> Result<Graph<String>> {
    let graph = io::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );
    Ok(graph)
}

fn save<W: Write>(graph: &Graph<String>, path: &Path, out: &mut W) -> Result<()> {
    io::save(graph, path).with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(
        out,
        "wrote {} vertices and {} edges to {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    )?;
    Ok(())
}

/// Loads `path`, applies one edit and saves to `--out` or back to `path`.
/// Nothing is written if the edit fails.
fn edit_file<W: Write>(path: &Path, edit: &Edit, out: &mut W) -> Result<()> {
    let mut graph = load(path)?;
    apply(&mut graph, edit, out)?;
    let destination = edit.target().out.as_deref().unwrap_or(path);
    save(&graph, destination, out)
}

fn apply<W: Write>(graph: &mut Graph<String>, edit: &Edit, out: &mut W) -> Result<()> {
    match edit {
        Edit::AddVertex { vertex, .. } => {
            graph.add_vertex(vertex.clone())?;
            writeln!(out, "added vertex {vertex}")?;
        }
        Edit::RemoveVertex { vertex, .. } => {
            graph.remove_vertex(vertex)?;
            writeln!(out, "removed vertex {vertex}")?;
        }
        Edit::AddEdge {
            source,
            destination,
            cost,
            ..
        } => {
            graph.add_edge(source, destination, *cost)?;
            writeln!(out, "added {source} -> {destination}: cost {cost}")?;
        }
        Edit::RemoveEdge {
            source,
            destination,
            ..
        } => {
            let cost = graph.remove_edge(source, destination)?;
            writeln!(out, "removed {source} -> {destination}: cost {cost}")?;
        }
        Edit::UpdateEdge {
            source,
            destination,
            cost,
            ..
        } => {
            let previous = graph.update_edge(source, destination, *cost)?;
            writeln!(out, "updated {source} -> {destination}: cost {previous} -> {cost}")?;
        }
    }
    Ok(())
}

fn run<W: Write>(graph: &Graph<String>, query: &Query, json: bool, out: &mut W) -> Result<()> {
    match query {
        Query::Info => {
            writeln!(out, "vertices: {}", graph.vertex_count())?;
            writeln!(out, "edges: {}", graph.edge_count())?;
            writeln!(out, "acyclic: {}", if graph.is_acyclic() { "yes" } else { "no" })?;
        }
        Query::Vertices => {
            for v in graph.vertices() {
                writeln!(out, "{v}")?;
            }
        }
        Query::Edges => {
            if json {
                writeln!(out, "{}", serde_json::to_string(&graph.snapshot().edges)?)?;
            } else {
                for (source, target, cost) in graph.edges() {
                    writeln!(out, "{source} {target} {cost}")?;
                }
            }
        }
        Query::Degree { vertex } => {
            writeln!(out, "in: {}", graph.in_degree(vertex)?)?;
            writeln!(out, "out: {}", graph.out_degree(vertex)?)?;
        }
        Query::Neighbors { vertex, inbound } => {
            let neighbors = if *inbound {
                graph.in_neighbors(vertex)?
            } else {
                graph.out_neighbors(vertex)?
            };
            for (w, cost) in neighbors {
                writeln!(out, "{w} {cost}")?;
            }
        }
        Query::Edge { source, target } => {
            if graph.is_edge(source, target)? {
                writeln!(out, "{source} -> {target}: cost {}", graph.cost(source, target)?)?;
            } else {
                writeln!(out, "{source} -> {target}: no edge")?;
            }
        }
        Query::Bfs {
            source,
            destination,
        } => {
            let outcome = graph.shortest_path(source, destination)?;
            report(&outcome, json, source, destination, out, |p: &HopPath<String>| {
                format!("{} ({} edges)", p.vertices.join(" -> "), p.length)
            })?;
        }
        Query::MinCost {
            source,
            destination,
        } => {
            let outcome = graph.min_cost_walk(source, destination)?;
            report(&outcome, json, source, destination, out, describe_cost)?;
        }
        Query::Longest {
            source,
            destination,
        } => {
            let outcome = graph.highest_cost_path(source, destination)?;
            report(&outcome, json, source, destination, out, describe_cost)?;
        }
        Query::Toposort => {
            let order = graph.topological_order()?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&order)?)?;
            } else {
                writeln!(out, "{}", order.join(" "))?;
            }
        }
        Query::Convert { out: path } => save(graph, path, out)?,
    }
    Ok(())
}

fn describe_cost(p: &CostPath<String>) -> String {
    format!("{} (cost {})", p.vertices.join(" -> "), p.cost)
}

fn report<P: Serialize, W: Write>(
    outcome: &PathOutcome<P>,
    json: bool,
    source: &str,
    destination: &str,
    out: &mut W,
    describe: impl Fn(&P) -> String,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(outcome)?)?;
        return Ok(());
    }
    match outcome {
        PathOutcome::Found(path) => writeln!(out, "{}", describe(path))?,
        PathOutcome::NoPath => writeln!(out, "no path from {source} to {destination}")?,
    }
    Ok(())
}
