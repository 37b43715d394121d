//! Read-only adjacency view over vertices `0..n`.
//!
//! # Overview
//!
//! [`AdjacencyGraph`] normalizes whatever symmetric relation the caller has
//! (edge pairs, per-vertex neighbour lists, a CSR structure, a petgraph
//! `UnGraph`) into one representation: a sorted, deduplicated neighbour
//! vector per vertex.
//!
//! Sorted vectors keep iteration order deterministic, which makes the MCS
//! ordering reproducible, and give `O(log d)` adjacency tests by binary
//! search over the shorter of the two lists. No dense matrix is ever built.
//!
//! ## Normalization
//!
//! - Self-loops are dropped silently.
//! - Parallel edges are collapsed.
//! - Out-of-range endpoints fail construction.
//! - Vertex counts above [`MAX_VERTICES`] fail construction before anything
//!   is allocated.
//! - Directional inputs (neighbour lists, CSR) must be symmetric; the first
//!   entry without a reverse entry is reported as [`GraphError::Asymmetric`].

#![allow(clippy::module_name_repetitions)]

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

use crate::error::GraphError;

/// A vertex handle in `[0, n)`.
pub type Vertex = usize;

/// Largest vertex count accepted from external input (`2^26`).
pub const MAX_VERTICES: usize = 1 << 26;

/// `n` empty neighbour lists, or [`GraphError::TooLarge`] when `n` is over
/// [`MAX_VERTICES`] or the allocation fails.
pub(crate) fn vertex_lists(n: usize) -> Result<Vec<Vec<Vertex>>, GraphError> {
    let too_large = GraphError::TooLarge {
        n,
        max: MAX_VERTICES,
    };
    if n > MAX_VERTICES {
        return Err(too_large);
    }
    let mut lists = Vec::new();
    lists.try_reserve_exact(n).map_err(|_| too_large)?;
    lists.resize_with(n, Vec::new);
    Ok(lists)
}

/// Immutable simple undirected graph with sorted neighbour lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// `n` isolated vertices.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Build from an undirected edge enumeration over `n` vertices.
    ///
    /// Every pair is inserted in both directions, so the result is symmetric
    /// by construction.
    ///
    /// # Errors
    ///
    /// - [`GraphError::TooLarge`] when `n` exceeds [`MAX_VERTICES`].
    /// - [`GraphError::VertexOutOfRange`] for the first endpoint that is not
    ///   below `n`.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut adjacency = vertex_lists(n)?;
        for (u, v) in edges {
            check_range(u, n)?;
            check_range(v, n)?;
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Ok(Self::assemble(adjacency))
    }

    /// Build from per-vertex neighbour lists; `lists[v]` holds the
    /// neighbours of `v`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] when a listed neighbour is not a
    ///   vertex.
    /// - [`GraphError::Asymmetric`] when `u` lists `v` but `v` does not list
    ///   `u`.
    pub fn from_adjacency_lists(lists: Vec<Vec<Vertex>>) -> Result<Self, GraphError> {
        let n = lists.len();
        for neighbors in &lists {
            for &v in neighbors {
                check_range(v, n)?;
            }
        }

        let graph = Self::assemble(lists);
        graph.check_symmetric()?;
        Ok(graph)
    }

    /// Build from a compressed sparse row structure of shape
    /// `n_rows x n_cols`. Values are irrelevant; only the pattern is read.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotSquare`] when `n_rows != n_cols`.
    /// - [`GraphError::TooLarge`] when `n_rows` exceeds [`MAX_VERTICES`].
    /// - [`GraphError::MalformedCsr`] when `indptr` is inconsistent.
    /// - Any error of [`AdjacencyGraph::from_adjacency_lists`].
    pub fn from_csr(
        n_rows: usize,
        n_cols: usize,
        indptr: &[usize],
        indices: &[Vertex],
    ) -> Result<Self, GraphError> {
        if n_rows != n_cols {
            return Err(GraphError::NotSquare {
                rows: n_rows,
                cols: n_cols,
            });
        }
        if n_rows > MAX_VERTICES {
            return Err(GraphError::TooLarge {
                n: n_rows,
                max: MAX_VERTICES,
            });
        }
        Self::from_adjacency_lists(csr_rows(n_rows, indptr, indices)?)
    }

    /// Adapt a petgraph undirected graph. Node indices become vertices;
    /// weights are ignored.
    #[must_use]
    pub fn from_petgraph<N, E>(graph: &UnGraph<N, E>) -> Self {
        Self::from_valid_edges(
            graph.node_count(),
            graph
                .edge_references()
                .map(|edge| (edge.source().index(), edge.target().index())),
        )
    }

    /// Edge enumeration whose endpoints are already known to be below `n`.
    pub(crate) fn from_valid_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut adjacency = vec![Vec::new(); n];
        for (u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::assemble(adjacency)
    }

    /// Strip loops, sort, dedup and count.
    fn assemble(mut adjacency: Vec<Vec<Vertex>>) -> Self {
        let mut degree_sum = 0;
        for (v, neighbors) in adjacency.iter_mut().enumerate() {
            neighbors.retain(|&u| u != v);
            neighbors.sort_unstable();
            neighbors.dedup();
            degree_sum += neighbors.len();
        }
        Self {
            adjacency,
            edge_count: degree_sum / 2,
        }
    }

    fn check_symmetric(&self) -> Result<(), GraphError> {
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if self.adjacency[v].binary_search(&u).is_err() {
                    return Err(GraphError::Asymmetric { from: u, to: v });
                }
            }
        }
        Ok(())
    }

    /// Number of vertices `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges `m`.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` for the graph on zero vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sorted neighbours of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of this graph.
    #[must_use]
    pub const fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.as_slice()[v].as_slice()
    }

    /// Degree of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of this graph.
    #[must_use]
    pub const fn degree(&self, v: Vertex) -> usize {
        self.adjacency.as_slice()[v].len()
    }

    /// Adjacency test in `O(log min(deg u, deg v))`. Vertices outside the
    /// graph are adjacent to nothing.
    #[must_use]
    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        let (Some(nu), Some(nv)) = (self.adjacency.get(u), self.adjacency.get(v)) else {
            return false;
        };
        if nu.len() <= nv.len() {
            nu.binary_search(&v).is_ok()
        } else {
            nv.binary_search(&u).is_ok()
        }
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`, in lexicographic
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Copy of this graph with vertex `v` renamed to `perm[v]`.
    ///
    /// Returns `None` when `perm` is not a permutation of `0..n`.
    #[must_use]
    pub fn relabel(&self, perm: &[Vertex]) -> Option<Self> {
        let n = self.vertex_count();
        if perm.len() != n {
            return None;
        }
        let mut seen = vec![false; n];
        for &p in perm {
            if p >= n || std::mem::replace(&mut seen[p], true) {
                return None;
            }
        }

        let mut adjacency = vec![Vec::new(); n];
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            adjacency[perm[v]] = neighbors.iter().map(|&u| perm[u]).collect();
        }
        Some(Self::assemble(adjacency))
    }
}

fn check_range(v: Vertex, n: usize) -> Result<(), GraphError> {
    if v < n {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange { vertex: v, n })
    }
}

/// Split a CSR pattern into per-row column lists without range checking
/// the column indices.
pub(crate) fn csr_rows(
    n_rows: usize,
    indptr: &[usize],
    indices: &[usize],
) -> Result<Vec<Vec<usize>>, GraphError> {
    if indptr.len().checked_sub(1) != Some(n_rows) {
        return Err(GraphError::MalformedCsr(format!(
            "indptr has {} entries, expected {n_rows} + 1",
            indptr.len()
        )));
    }
    if indptr.first() != Some(&0) {
        return Err(GraphError::MalformedCsr("indptr must start at 0".to_string()));
    }
    if indptr.last() != Some(&indices.len()) {
        return Err(GraphError::MalformedCsr(format!(
            "indptr ends at {:?} but there are {} indices",
            indptr.last(),
            indices.len()
        )));
    }

    if let Some(row) = indptr.windows(2).position(|w| w[0] > w[1]) {
        return Err(GraphError::MalformedCsr(format!(
            "indptr decreases at row {row}"
        )));
    }

    Ok(indptr
        .windows(2)
        .map(|w| indices[w[0]..w[1]].to_vec())
        .collect())
}
