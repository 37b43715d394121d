#![forbid(unsafe_code)]
//! chordal-data library.
//!
//! Fixed example graphs ([`datasets`]) and parsers for graph files
//! ([`load`]). Everything produces a [`chordal_core::AdjacencyGraph`] or a
//! [`chordal_core::BipartiteGraph`].

pub mod datasets;
pub mod load;

pub use datasets::Dataset;
pub use load::{InputFormat, load_bipartite_path, load_path};
