//! Maximum Cardinality Search.
//!
//! # Overview
//!
//! MCS numbers vertices `n, n-1, …, 1`, each time picking an unnumbered
//! vertex with the most already-numbered neighbours ("weight"). The
//! resulting [`Ranking`] is a perfect elimination ordering exactly when the
//! graph is chordal; the sweep itself never inspects chordality and never
//! fails.
//!
//! # Strategies
//!
//! - [`McsStrategy::Bucketed`] keeps one intrusive doubly linked list per
//!   weight value. Weights only grow and stay below `n`, so selection is
//!   amortized `O(1)` and the sweep is `O(n + m)`.
//! - [`McsStrategy::Linear`] scans every unnumbered vertex per step,
//!   `O(n²)`. Kept as a reference for small graphs.
//!
//! # Tie-break
//!
//! Any deterministic tie-break yields the same chordality verdict but a
//! different ordering, so the rule is fixed per strategy:
//!
//! - `Bucketed`: the vertex most recently promoted into the top bucket;
//!   among vertices still at weight 0, the lowest index.
//! - `Linear`: the lowest index among vertices of maximal weight.

use std::fmt;
use std::str::FromStr;

use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::graph::{AdjacencyGraph, Vertex};

const NIL: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Injective numbering `vertex → [1, n]` produced by MCS.
///
/// Higher rank means numbered earlier in the sweep and eliminated later.
/// `order[k]` is the vertex of rank `k + 1`, i.e. the elimination order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    rank: Vec<usize>,
    order: Vec<Vertex>,
}

impl Ranking {
    /// Build a ranking from an explicit elimination order (first element is
    /// eliminated first and gets rank 1).
    ///
    /// Returns `None` unless `order` is a permutation of `0..order.len()`.
    #[must_use]
    pub fn from_elimination_order(order: Vec<Vertex>) -> Option<Self> {
        let n = order.len();
        let mut rank = vec![0; n];
        for (k, &v) in order.iter().enumerate() {
            if v >= n || rank[v] != 0 {
                return None;
            }
            rank[v] = k + 1;
        }
        Some(Self { rank, order })
    }

    /// Rank of `v`, in `[1, n]`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a ranked vertex.
    #[must_use]
    pub const fn rank_of(&self, v: Vertex) -> usize {
        self.rank.as_slice()[v]
    }

    /// Ranks indexed by vertex.
    #[must_use]
    pub const fn ranks(&self) -> &[usize] {
        self.rank.as_slice()
    }

    /// Vertices in increasing rank, i.e. in elimination order.
    #[must_use]
    pub const fn elimination_order(&self) -> &[Vertex] {
        self.order.as_slice()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rank.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }

    /// `true` if this ranks exactly `n` vertices with distinct values in
    /// `[1, n]` and `order` is its inverse.
    #[must_use]
    pub fn is_valid_for(&self, n: usize) -> bool {
        self.rank.len() == n
            && self.order.len() == n
            && self
                .order
                .iter()
                .enumerate()
                .all(|(k, &v)| v < n && self.rank[v] == k + 1)
    }

    pub(crate) fn into_ranks(self) -> Vec<usize> {
        self.rank
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// How the maximum-weight vertex is selected at each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McsStrategy {
    /// Weight buckets, `O(n + m)`.
    #[default]
    Bucketed,
    /// Full scan per step, `O(n²)`.
    Linear,
}

impl McsStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bucketed => "bucketed",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for McsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for McsStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bucketed" | "bucket" => Ok(Self::Bucketed),
            "linear" | "naive" => Ok(Self::Linear),
            other => Err(format!(
                "unknown MCS strategy '{other}' (expected 'bucketed' or 'linear')"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Run MCS with the default bucketed strategy.
#[must_use]
pub fn maximum_cardinality_search(graph: &AdjacencyGraph) -> Ranking {
    maximum_cardinality_search_with(graph, McsStrategy::Bucketed)
}

/// Run MCS with an explicit selection strategy.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn maximum_cardinality_search_with(graph: &AdjacencyGraph, strategy: McsStrategy) -> Ranking {
    match strategy {
        McsStrategy::Bucketed => bucketed(graph),
        McsStrategy::Linear => linear(graph),
    }
}

/// Per-weight doubly linked lists threaded through vertex-indexed arrays.
struct Buckets {
    head: Vec<usize>,
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl Buckets {
    fn new(n: usize) -> Self {
        Self {
            head: vec![NIL; n],
            next: vec![NIL; n],
            prev: vec![NIL; n],
        }
    }

    fn push_front(&mut self, v: Vertex, weight: usize) {
        let old = self.head[weight];
        self.next[v] = old;
        self.prev[v] = NIL;
        if old != NIL {
            self.prev[old] = v;
        }
        self.head[weight] = v;
    }

    fn remove(&mut self, v: Vertex, weight: usize) {
        let (p, nx) = (self.prev[v], self.next[v]);
        if p == NIL {
            self.head[weight] = nx;
        } else {
            self.next[p] = nx;
        }
        if nx != NIL {
            self.prev[nx] = p;
        }
    }

    fn first(&self, weight: usize) -> Option<Vertex> {
        let v = self.head[weight];
        (v != NIL).then_some(v)
    }
}

fn bucketed(graph: &AdjacencyGraph) -> Ranking {
    let n = graph.vertex_count();
    let mut rank = vec![0; n];
    let mut order = vec![0; n];
    if n == 0 {
        return Ranking { rank, order };
    }

    let mut weight = vec![0_usize; n];
    let mut numbered = FixedBitSet::with_capacity(n);
    let mut buckets = Buckets::new(n);
    // Reverse insertion leaves vertex 0 at the head of bucket 0.
    for v in (0..n).rev() {
        buckets.push_front(v, 0);
    }

    let mut top = 0;
    for number in (1..=n).rev() {
        let v = loop {
            if let Some(v) = buckets.first(top) {
                break v;
            }
            // Some unnumbered vertex always remains, so a non-empty bucket
            // exists at or below `top`.
            top -= 1;
        };

        buckets.remove(v, top);
        numbered.insert(v);
        rank[v] = number;
        order[number - 1] = v;

        for &u in graph.neighbors(v) {
            if numbered.contains(u) {
                continue;
            }
            buckets.remove(u, weight[u]);
            weight[u] += 1;
            buckets.push_front(u, weight[u]);
        }

        // Neighbours can only have climbed one bucket above the old maximum.
        top = (top + 1).min(n - 1);
    }

    Ranking { rank, order }
}

fn linear(graph: &AdjacencyGraph) -> Ranking {
    let n = graph.vertex_count();
    let mut rank = vec![0; n];
    let mut order = vec![0; n];
    let mut weight = vec![0_usize; n];
    let mut numbered = FixedBitSet::with_capacity(n);

    for number in (1..=n).rev() {
        let Some(v) = (0..n)
            .filter(|&v| !numbered.contains(v))
            .max_by_key(|&v| (weight[v], std::cmp::Reverse(v)))
        else {
            break;
        };

        numbered.insert(v);
        rank[v] = number;
        order[number - 1] = v;

        for &u in graph.neighbors(v) {
            if !numbered.contains(u) {
                weight[u] += 1;
            }
        }
    }

    Ranking { rank, order }
}
