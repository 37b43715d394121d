//! Error taxonomy for graph construction and input handling.
//!
//! Nothing inside the ordering or validation passes can fail; every error
//! here is raised while turning caller input into an [`AdjacencyGraph`].
//!
//! [`AdjacencyGraph`]: crate::graph::AdjacencyGraph

use std::fmt;

/// Machine-readable error codes for scripting against the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    VertexOutOfRange,
    NotSquare,
    MalformedCsr,
    GraphTooLarge,
    AsymmetricInput,
    ParseError,
    ConfigParseError,
    UnknownDataset,
    InputReadFailed,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "E1001",
            Self::NotSquare => "E1002",
            Self::MalformedCsr => "E1003",
            Self::GraphTooLarge => "E1004",
            Self::AsymmetricInput => "E2001",
            Self::ParseError => "E2002",
            Self::ConfigParseError => "E3001",
            Self::UnknownDataset => "E3002",
            Self::InputReadFailed => "E3003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "Vertex index out of range",
            Self::NotSquare => "Adjacency shape is not square",
            Self::MalformedCsr => "Malformed sparse row structure",
            Self::GraphTooLarge => "Vertex count exceeds the supported maximum",
            Self::AsymmetricInput => "Adjacency relation is not symmetric",
            Self::ParseError => "Graph input parse error",
            Self::ConfigParseError => "Config file parse error",
            Self::UnknownDataset => "Unknown dataset",
            Self::InputReadFailed => "Input file could not be read",
        }
    }

    /// Optional remediation hint surfaced next to the error.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::VertexOutOfRange => {
                Some("Vertex indices must lie in [0, n); check the declared vertex count.")
            }
            Self::NotSquare => Some("Use `chordal bipartite` for rectangular (row/column) input."),
            Self::MalformedCsr => {
                Some("indptr must start at 0, be non-decreasing and end at indices.len().")
            }
            Self::GraphTooLarge => {
                Some("Check the `n`/`shape` header and the largest vertex index in the input.")
            }
            Self::AsymmetricInput => {
                Some("List every edge in both directions, or supply an undirected edge list.")
            }
            Self::ParseError => Some("Expected one `u v` pair per line or the JSON graph schema."),
            Self::ConfigParseError => Some("Fix syntax in chordal.toml and retry."),
            Self::UnknownDataset => Some("Run `chordal datasets` to list the built-in graphs."),
            Self::InputReadFailed => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure while building a graph from external input.
///
/// No partial graph is ever produced: construction either yields a complete
/// [`AdjacencyGraph`](crate::graph::AdjacencyGraph) or one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An endpoint lies outside `[0, n)`.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },

    /// A one-sided graph was supplied with a rectangular shape.
    #[error("adjacency must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The compressed row pointer array is inconsistent.
    #[error("malformed CSR structure: {0}")]
    MalformedCsr(String),

    /// More vertices than [`MAX_VERTICES`](crate::graph::MAX_VERTICES).
    #[error("a graph with {n} vertices exceeds the supported maximum of {max}")]
    TooLarge { n: usize, max: usize },

    /// `from` lists `to` as a neighbour but `to` does not list `from`.
    #[error("asymmetric adjacency: {from} -> {to} has no reverse entry")]
    Asymmetric { from: usize, to: usize },

    /// Text or JSON input could not be understood.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl GraphError {
    /// The stable code for this error kind.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => ErrorCode::VertexOutOfRange,
            Self::NotSquare { .. } => ErrorCode::NotSquare,
            Self::MalformedCsr(_) => ErrorCode::MalformedCsr,
            Self::TooLarge { .. } => ErrorCode::GraphTooLarge,
            Self::Asymmetric { .. } => ErrorCode::AsymmetricInput,
            Self::Parse { .. } => ErrorCode::ParseError,
        }
    }
}
