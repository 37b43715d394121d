//! Run one-sided graph algorithms on two-sided (row/column) relations.
//!
//! A biadjacency `B` of shape `n_row x n_col` is embedded as the symmetric
//! block graph `[[0, B], [Bᵗ, 0]]`: rows keep indices `0..n_row`, column `c`
//! becomes vertex `n_row + c`. [`Bipartite`] runs the wrapped algorithm on
//! that graph and splits any per-vertex output back into row and column
//! halves through [`SplitRows`].

use std::borrow::Cow;

use serde::Serialize;
use tracing::instrument;

use crate::algorithm::{Algorithm, Param};
use crate::error::GraphError;
use crate::graph::{AdjacencyGraph, MAX_VERTICES, csr_rows};
use crate::mcs::Ranking;
use crate::peo::PeoViolation;
use crate::query::ChordalityReport;

/// Edges between `n_row` row vertices and `n_col` column vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    n_row: usize,
    n_col: usize,
    edges: Vec<(usize, usize)>,
}

impl BipartiteGraph {
    /// # Errors
    ///
    /// - [`GraphError::TooLarge`] when `n_row + n_col` exceeds
    ///   [`MAX_VERTICES`].
    /// - [`GraphError::VertexOutOfRange`] when a row index is not below
    ///   `n_row` or a column index is not below `n_col`.
    pub fn new(n_row: usize, n_col: usize, edges: Vec<(usize, usize)>) -> Result<Self, GraphError> {
        match n_row.checked_add(n_col) {
            Some(n) if n <= MAX_VERTICES => {}
            n => {
                return Err(GraphError::TooLarge {
                    n: n.unwrap_or(usize::MAX),
                    max: MAX_VERTICES,
                });
            }
        }
        for &(r, c) in &edges {
            if r >= n_row {
                return Err(GraphError::VertexOutOfRange { vertex: r, n: n_row });
            }
            if c >= n_col {
                return Err(GraphError::VertexOutOfRange { vertex: c, n: n_col });
            }
        }
        Ok(Self { n_row, n_col, edges })
    }

    /// Rectangular CSR pattern; row `r` lists its columns.
    ///
    /// # Errors
    ///
    /// [`GraphError::MalformedCsr`] for an inconsistent `indptr`, otherwise as
    /// [`BipartiteGraph::new`].
    pub fn from_csr(
        n_row: usize,
        n_col: usize,
        indptr: &[usize],
        indices: &[usize],
    ) -> Result<Self, GraphError> {
        let edges = csr_rows(n_row, indptr, indices)?
            .into_iter()
            .enumerate()
            .flat_map(|(r, cols)| cols.into_iter().map(move |c| (r, c)))
            .collect();
        Self::new(n_row, n_col, edges)
    }

    #[must_use]
    pub const fn n_row(&self) -> usize {
        self.n_row
    }

    #[must_use]
    pub const fn n_col(&self) -> usize {
        self.n_col
    }

    #[must_use]
    pub const fn edges(&self) -> &[(usize, usize)] {
        self.edges.as_slice()
    }

    /// The symmetric `(n_row + n_col)`-vertex block graph.
    #[must_use]
    pub fn to_block_graph(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_valid_edges(
            self.n_row + self.n_col,
            self.edges.iter().map(|&(r, c)| (r, self.n_row + c)),
        )
    }

    /// Side and local index of a block-graph vertex.
    #[must_use]
    pub const fn side_of(&self, vertex: usize) -> Side {
        side_of(vertex, self.n_row)
    }
}

/// A block-graph vertex mapped back to its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Row(usize),
    Col(usize),
}

const fn side_of(vertex: usize, n_row: usize) -> Side {
    if vertex < n_row {
        Side::Row(vertex)
    } else {
        Side::Col(vertex - n_row)
    }
}

/// A per-vertex value split into row- and column-indexed halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowCol<T> {
    pub row: T,
    pub col: T,
}

/// Outputs that carry one entry per block-graph vertex.
pub trait SplitRows {
    type Split;

    /// Split at the row/column boundary.
    fn split_rows(self, n_row: usize) -> Self::Split;
}

impl<T> SplitRows for Vec<T> {
    type Split = RowCol<Self>;

    fn split_rows(mut self, n_row: usize) -> Self::Split {
        let col = self.split_off(n_row.min(self.len()));
        RowCol { row: self, col }
    }
}

impl SplitRows for Ranking {
    type Split = RowCol<Vec<usize>>;

    fn split_rows(self, n_row: usize) -> Self::Split {
        self.into_ranks().split_rows(n_row)
    }
}

/// [`PeoViolation`] with each vertex mapped to its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiViolation {
    pub vertex: Side,
    pub parent: Side,
    pub unmatched: Side,
}

/// Chordality verdict for a block graph with ranks split per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiChordalityReport {
    pub chordal: bool,
    pub rank: RowCol<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<BiViolation>,
}

impl SplitRows for ChordalityReport {
    type Split = BiChordalityReport;

    fn split_rows(self, n_row: usize) -> Self::Split {
        let violation = self.violation.map(|PeoViolation { vertex, parent, unmatched }| {
            BiViolation {
                vertex: side_of(vertex, n_row),
                parent: side_of(parent, n_row),
                unmatched: side_of(unmatched, n_row),
            }
        });
        BiChordalityReport {
            chordal: self.chordal,
            rank: self.ranking.split_rows(n_row),
            violation,
        }
    }
}

/// Adapter running `A` on the block embedding of a [`BipartiteGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bipartite<A> {
    pub inner: A,
}

impl<A> Bipartite<A> {
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A> Algorithm for Bipartite<A>
where
    A: Algorithm<Input = AdjacencyGraph>,
    A::Output: SplitRows,
{
    type Input = BipartiteGraph;
    type Output = <A::Output as SplitRows>::Split;

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Bi{}", self.inner.name()))
    }

    fn params(&self) -> Vec<Param> {
        self.inner.params()
    }

    #[instrument(skip_all, fields(n_row = input.n_row, n_col = input.n_col))]
    fn run(&self, input: &BipartiteGraph) -> Self::Output {
        self.inner
            .run(&input.to_block_graph())
            .split_rows(input.n_row)
    }
}
