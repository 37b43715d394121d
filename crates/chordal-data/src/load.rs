//! Graph file parsers.
//!
//! # Edge lists
//!
//! One `u v` pair per line, whitespace separated. Lines starting with `#` or
//! `%` are comments; a third column (a weight) is ignored. An optional header
//! line `n <count>` fixes the vertex count, otherwise it is one more than the
//! largest index seen. Either way the count is bounded by [`MAX_VERTICES`].
//!
//! Bipartite edge lists read `row col` pairs with an optional
//! `shape <rows> <cols>` header.
//!
//! # JSON
//!
//! ```json
//! {"n": 4, "edges": [[0, 1], [1, 2]]}
//! {"adjacency": [[1], [0, 2], [1]]}
//! {"shape": [2, 3], "edges": [[0, 2], [1, 0]]}
//! ```
//!
//! The `adjacency` form is directional and must be symmetric.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chordal_core::{AdjacencyGraph, BipartiteGraph, GraphError, MAX_VERTICES};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Supported file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    EdgeList,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON, anything else is an edge list.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::EdgeList,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeList => "edges",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edges" | "edgelist" | "edge-list" | "txt" => Ok(Self::EdgeList),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown input format '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Edge lists
// ---------------------------------------------------------------------------

/// A non-comment line split into tokens, with its 1-based line number.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            None
        } else {
            Some((idx + 1, line.split_whitespace().collect()))
        }
    })
}

fn parse_index(token: &str, line: usize) -> Result<usize, GraphError> {
    token.parse::<usize>().map_err(|_| GraphError::Parse {
        line,
        message: format!("'{token}' is not a vertex index"),
    })
}

fn parse_pair(tokens: &[&str], line: usize) -> Result<(usize, usize), GraphError> {
    match tokens {
        [a, b] | [a, b, _] => Ok((parse_index(a, line)?, parse_index(b, line)?)),
        _ => Err(GraphError::Parse {
            line,
            message: format!("expected 2 or 3 columns, found {}", tokens.len()),
        }),
    }
}

/// One more than the largest index, `0` for none.
///
/// Indices at or above [`MAX_VERTICES`] are rejected here, so the count never
/// overflows and never requests an unbounded allocation.
fn inferred_count(indices: impl IntoIterator<Item = usize>) -> Result<usize, GraphError> {
    let mut n = 0;
    for v in indices {
        if v >= MAX_VERTICES {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                n: MAX_VERTICES,
            });
        }
        n = n.max(v + 1);
    }
    Ok(n)
}

fn inferred_vertex_count(edges: &[(usize, usize)]) -> Result<usize, GraphError> {
    inferred_count(edges.iter().flat_map(|&(u, v)| [u, v]))
}

fn inferred_shape(edges: &[(usize, usize)]) -> Result<(usize, usize), GraphError> {
    let rows = inferred_count(edges.iter().map(|&(r, _)| r))?;
    let cols = inferred_count(edges.iter().map(|&(_, c)| c))?;
    Ok((rows, cols))
}

/// Parse a one-sided edge list.
///
/// # Errors
///
/// [`GraphError::Parse`] for malformed lines or a misplaced header, and
/// [`GraphError::VertexOutOfRange`] when an index exceeds the declared `n`.
pub fn parse_edge_list(text: &str) -> Result<AdjacencyGraph, GraphError> {
    let mut declared: Option<usize> = None;
    let mut edges = Vec::new();

    for (line, tokens) in data_lines(text) {
        if tokens.first() == Some(&"n") {
            if declared.is_some() || !edges.is_empty() {
                return Err(GraphError::Parse {
                    line,
                    message: "the `n` header must come first and only once".to_string(),
                });
            }
            let [_, count] = tokens.as_slice() else {
                return Err(GraphError::Parse {
                    line,
                    message: "expected `n <count>`".to_string(),
                });
            };
            declared = Some(parse_index(count, line)?);
            continue;
        }
        edges.push(parse_pair(&tokens, line)?);
    }

    let n = match declared {
        Some(n) => n,
        None => inferred_vertex_count(&edges)?,
    };
    AdjacencyGraph::from_edges(n, edges)
}

/// Parse a bipartite `row col` edge list.
///
/// # Errors
///
/// As [`parse_edge_list`], with the header `shape <rows> <cols>`.
pub fn parse_biadjacency_edge_list(text: &str) -> Result<BipartiteGraph, GraphError> {
    let mut declared: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (line, tokens) in data_lines(text) {
        if tokens.first() == Some(&"shape") {
            if declared.is_some() || !edges.is_empty() {
                return Err(GraphError::Parse {
                    line,
                    message: "the `shape` header must come first and only once".to_string(),
                });
            }
            let [_, rows, cols] = tokens.as_slice() else {
                return Err(GraphError::Parse {
                    line,
                    message: "expected `shape <rows> <cols>`".to_string(),
                });
            };
            declared = Some((parse_index(rows, line)?, parse_index(cols, line)?));
            continue;
        }
        edges.push(parse_pair(&tokens, line)?);
    }

    let (n_row, n_col) = match declared {
        Some(shape) => shape,
        None => inferred_shape(&edges)?,
    };
    BipartiteGraph::new(n_row, n_col, edges)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonGraph {
    Edges {
        n: Option<usize>,
        edges: Vec<(usize, usize)>,
    },
    Adjacency {
        adjacency: Vec<Vec<usize>>,
    },
}

#[derive(Debug, Deserialize)]
struct JsonBipartite {
    shape: Option<(usize, usize)>,
    edges: Vec<(usize, usize)>,
}

fn json_error(err: &serde_json::Error) -> GraphError {
    GraphError::Parse {
        line: err.line(),
        message: err.to_string(),
    }
}

/// Parse the JSON graph schema.
///
/// # Errors
///
/// [`GraphError::Parse`] for invalid JSON, otherwise any construction error.
pub fn parse_json(text: &str) -> Result<AdjacencyGraph, GraphError> {
    match serde_json::from_str::<JsonGraph>(text).map_err(|e| json_error(&e))? {
        JsonGraph::Edges { n, edges } => {
            let n = match n {
                Some(n) => n,
                None => inferred_vertex_count(&edges)?,
            };
            AdjacencyGraph::from_edges(n, edges)
        }
        JsonGraph::Adjacency { adjacency } => AdjacencyGraph::from_adjacency_lists(adjacency),
    }
}

/// Parse the JSON bipartite schema.
///
/// # Errors
///
/// [`GraphError::Parse`] for invalid JSON, otherwise any construction error.
pub fn parse_bipartite_json(text: &str) -> Result<BipartiteGraph, GraphError> {
    let JsonBipartite { shape, edges } =
        serde_json::from_str(text).map_err(|e| json_error(&e))?;
    let (n_row, n_col) = match shape {
        Some(shape) => shape,
        None => inferred_shape(&edges)?,
    };
    BipartiteGraph::new(n_row, n_col, edges)
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load a one-sided graph; the format defaults to the file extension.
///
/// # Errors
///
/// Fails if the file cannot be read or its content is rejected. Content
/// errors keep their [`GraphError`] so callers can downcast for the code.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_path(path: &Path, format: Option<InputFormat>) -> Result<AdjacencyGraph> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let text = read(path)?;
    let graph = match format {
        InputFormat::EdgeList => parse_edge_list(&text),
        InputFormat::Json => parse_json(&text),
    }?;
    debug!(
        %format,
        n = graph.vertex_count(),
        m = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Load a bipartite graph; the format defaults to the file extension.
///
/// # Errors
///
/// As [`load_path`].
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_bipartite_path(path: &Path, format: Option<InputFormat>) -> Result<BipartiteGraph> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let text = read(path)?;
    let graph = match format {
        InputFormat::EdgeList => parse_biadjacency_edge_list(&text),
        InputFormat::Json => parse_bipartite_json(&text),
    }?;
    debug!(
        %format,
        n_row = graph.n_row(),
        n_col = graph.n_col(),
        edges = graph.edges().len(),
        "loaded bipartite graph"
    );
    Ok(graph)
}
