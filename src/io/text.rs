//! Line-oriented text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! 3 2        <- header: vertex count, edge count
//! A          <- one token: vertex declaration
//! B
//! C
//! A B 5      <- three tokens: source target cost
//! B C -1
//! ```
//!
//! When the body declares no vertices at all, vertices `"0"` to `"n-1"` are
//! created from the header, so a header followed only by edge lines over
//! numeric labels is accepted. Vertex and edge counts must match the header
//! once the body is read.

use std::io::{BufRead, Write};

use super::LoadError;
use crate::graph::{Cost, Graph, Label};

struct Header {
    line: usize,
    vertices: usize,
    edges: usize,
}

fn parse_error(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::Parse {
        line,
        reason: reason.into(),
    }
}

fn parse_header(line: usize, tokens: &[&str]) -> Result<Header, LoadError> {
    let [n, m] = tokens else {
        return Err(parse_error(line, "expected header `<vertices> <edges>`"));
    };
    let count = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| parse_error(line, format!("invalid count {token:?}")))
    };
    Ok(Header {
        line,
        vertices: count(*n)?,
        edges: count(*m)?,
    })
}

/// Reads a graph in the text format.
///
/// # Errors
/// `Io` if reading fails; `Parse` for a malformed line, a body that does not
/// form a valid graph, or counts that disagree with the header.
pub fn read<R: BufRead>(reader: R) -> Result<Graph<String>, LoadError> {
    let mut header: Option<Header> = None;
    let mut vertices: Vec<(usize, String)> = Vec::new();
    let mut edges: Vec<(usize, String, String, Cost)> = Vec::new();
    let mut lines_read = 0;

    for (idx, raw) in reader.lines().enumerate() {
        let raw = raw?;
        let line = idx + 1;
        lines_read = line;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if header.is_none() {
            header = Some(parse_header(line, &tokens)?);
            continue;
        }
        match tokens.as_slice() {
            [label] => vertices.push((line, (*label).to_string())),
            [source, target, cost] => {
                let cost = cost
                    .parse::<Cost>()
                    .map_err(|_| parse_error(line, format!("invalid cost {cost:?}")))?;
                edges.push((line, (*source).to_string(), (*target).to_string(), cost));
            }
            _ => {
                return Err(parse_error(
                    line,
                    "expected a vertex label or `<source> <target> <cost>`",
                ));
            }
        }
    }

    let header =
        header.ok_or_else(|| parse_error(lines_read + 1, "missing `<vertices> <edges>` header"))?;

    let mut graph = Graph::new();
    if vertices.is_empty() {
        for i in 0..header.vertices {
            graph
                .add_vertex(i.to_string())
                .map_err(|e| parse_error(header.line, e.to_string()))?;
        }
    }
    for (line, label) in vertices {
        graph
            .add_vertex(label)
            .map_err(|e| parse_error(line, e.to_string()))?;
    }
    for (line, source, target, cost) in edges {
        graph
            .add_edge(&source, &target, cost)
            .map_err(|e| parse_error(line, e.to_string()))?;
    }

    if graph.vertex_count() != header.vertices {
        return Err(parse_error(
            header.line,
            format!(
                "header declares {} vertices, body has {}",
                header.vertices,
                graph.vertex_count()
            ),
        ));
    }
    if graph.edge_count() != header.edges {
        return Err(parse_error(
            header.line,
            format!(
                "header declares {} edges, body has {}",
                header.edges,
                graph.edge_count()
            ),
        ));
    }
    Ok(graph)
}

fn token<V: Label>(label: &V) -> Result<String, LoadError> {
    let rendered = label.to_string();
    if rendered.is_empty() || rendered.starts_with('#') || rendered.contains(char::is_whitespace) {
        return Err(LoadError::Unwritable(rendered));
    }
    Ok(rendered)
}

/// Writes the header, every vertex in store order, then every edge in
/// [`Graph::edges`] order. Reading the output back yields an identical graph.
///
/// # Errors
/// `Unwritable` if a label renders empty, starts with `#` or contains
/// whitespace; `Io` if writing fails.
pub fn write<V: Label, W: Write>(graph: &Graph<V>, mut writer: W) -> Result<(), LoadError> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for label in graph.vertices() {
        writeln!(writer, "{}", token(label)?)?;
    }
    for (source, target, cost) in graph.edges() {
        writeln!(writer, "{} {} {cost}", token(source)?, token(target)?)?;
    }
    Ok(())
}
