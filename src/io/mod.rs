//! Loading, saving and generating graphs.
//!
//! Vertical split:
//! - this module: the serde snapshot (`{ vertices, edges }`) and JSON encoding
//! - `text`: the line-oriented `n m` text format
//! - `random`: seeded random graph generation
//!
//! [`load`] and [`save`] pick a format from the file extension: `.json` is a
//! snapshot, anything else is text.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{Cost, Graph, Label};

pub mod random;
pub mod text;

pub use random::RandomGraphConfig;

/// Errors raised while reading or writing a graph.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON snapshot could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input decoded but describes an invalid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A text input line is malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A label cannot be written as a single whitespace-free text token.
    #[error("label {0:?} cannot be written as a text token")]
    Unwritable(String),
}

/// One edge of a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTriple<V> {
    /// Source label.
    pub source: V,
    /// Target label.
    pub target: V,
    /// Edge cost.
    pub cost: Cost,
}

/// Plain-data image of a graph: vertices in store order and edges in
/// [`Graph::edges`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    /// Vertex labels.
    pub vertices: Vec<V>,
    /// Edges as `(source, target, cost)` records.
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeTriple<V>>,
}

impl<V: Label> GraphSnapshot<V> {
    /// Rebuilds the graph. Order is preserved, so
    /// `graph.snapshot().into_graph()` enumerates exactly like `graph`.
    ///
    /// # Errors
    /// The errors of [`Graph::from_parts`].
    pub fn into_graph(self) -> crate::Result<Graph<V>> {
        Graph::from_parts(
            self.vertices,
            self.edges.into_iter().map(|e| (e.source, e.target, e.cost)),
        )
    }
}

impl<V: Label> Graph<V> {
    /// Captures the graph as a [`GraphSnapshot`].
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        GraphSnapshot {
            vertices: self.vertices().cloned().collect(),
            edges: self
                .edges()
                .map(|(source, target, cost)| EdgeTriple {
                    source: source.clone(),
                    target: target.clone(),
                    cost,
                })
                .collect(),
        }
    }
}

/// Decodes a JSON snapshot and builds the graph.
///
/// # Errors
/// `Json` for malformed input, `Graph` if the snapshot is inconsistent.
pub fn read_json<V, R>(reader: R) -> Result<Graph<V>, LoadError>
where
    V: Label + DeserializeOwned,
    R: Read,
{
    let snapshot: GraphSnapshot<V> = serde_json::from_reader(reader)?;
    Ok(snapshot.into_graph()?)
}

/// Encodes the graph as a pretty-printed JSON snapshot.
///
/// # Errors
/// `Json` or `Io` if writing fails.
pub fn write_json<V, W>(graph: &Graph<V>, mut writer: W) -> Result<(), LoadError>
where
    V: Label + Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, &graph.snapshot())?;
    writeln!(writer)?;
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reads a graph file, JSON snapshot or text by extension.
///
/// # Errors
/// Any [`LoadError`].
pub fn load(path: &Path) -> Result<Graph<String>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let graph = if is_json(path) {
        read_json(reader)?
    } else {
        text::read(reader)?
    };
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Writes a graph file, JSON snapshot or text by extension.
///
/// # Errors
/// Any [`LoadError`].
pub fn save(graph: &Graph<String>, path: &Path) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    if is_json(path) {
        write_json(graph, &mut writer)?;
    } else {
        text::write(graph, &mut writer)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), "graph saved");
    Ok(())
}
