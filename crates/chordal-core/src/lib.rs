#![forbid(unsafe_code)]
//! chordal-core library.
//!
//! Decides whether an undirected graph is chordal: Maximum Cardinality
//! Search produces a candidate elimination ordering and a single pass checks
//! that it is a perfect elimination ordering. Both run in `O(n + m)` up to
//! the logarithmic adjacency test.
//!
//! ```text
//! input ─▶ graph::AdjacencyGraph ─▶ mcs::Ranking ─▶ peo::find_violation ─▶ bool
//! ```
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums ([`GraphError`]) for input validation;
//!   `anyhow::Result` for config loading.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod algorithm;
pub mod bipartite;
pub mod config;
pub mod error;
pub mod graph;
pub mod mcs;
pub mod peo;
pub mod query;

pub use algorithm::{Algorithm, Param, ParamValue, display_params};
pub use bipartite::{
    BiChordalityReport, BiViolation, Bipartite, BipartiteGraph, RowCol, Side, SplitRows,
};
pub use error::{ErrorCode, GraphError};
pub use graph::{AdjacencyGraph, MAX_VERTICES, Vertex};
pub use mcs::{McsStrategy, Ranking, maximum_cardinality_search, maximum_cardinality_search_with};
pub use peo::{PeoViolation, elimination_parents, find_violation, is_perfect_elimination_ordering};
pub use query::{
    ChordalityConfig, ChordalityReport, ChordalityTest, McsOrdering, check_chordality, is_chordal,
};
