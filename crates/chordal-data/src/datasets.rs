//! Small named example graphs.
//!
//! The fixed graphs double as regression fixtures: each has a chordality
//! verdict that can be checked by hand.
//!
//! | name          | n  | m  | chordal |
//! |---------------|----|----|---------|
//! | `empty`       | 10 | 0  | yes     |
//! | `clique`      | 10 | 45 | yes     |
//! | `cycle`       | 10 | 10 | no      |
//! | `house`       | 5  | 6  | no      |
//! | `bow-tie`     | 5  | 6  | yes     |
//! | `karate-club` | 34 | 78 | no      |
//! | `paper`       | 6  | 7  | no      |

use std::fmt;
use std::str::FromStr;

use chordal_core::AdjacencyGraph;
use petgraph::graph::{NodeIndex, UnGraph};

/// Default size of the parametrized graphs.
pub const DEFAULT_SIZE: usize = 10;

/// Largest `n` accepted when parsing `name:n`. `clique:4096` already has
/// about 8.4 million edges.
pub const MAX_DATASET_SIZE: usize = 4096;

/// Assemble through petgraph; `pairs` must stay below `n`.
fn build(n: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> AdjacencyGraph {
    let mut graph = UnGraph::<(), ()>::with_capacity(n, 0);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    for (u, v) in pairs {
        graph.add_edge(nodes[u], nodes[v], ());
    }
    AdjacencyGraph::from_petgraph(&graph)
}

/// `n` isolated vertices.
#[must_use]
pub fn empty(n: usize) -> AdjacencyGraph {
    AdjacencyGraph::empty(n)
}

/// Complete graph `K_n`.
#[must_use]
pub fn clique(n: usize) -> AdjacencyGraph {
    build(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

/// Cycle `0 - 1 - … - (n-1) - 0`.
#[must_use]
pub fn cycle(n: usize) -> AdjacencyGraph {
    build(n, (0..n).map(|v| (v, (v + 1) % n)))
}

/// Square `0-1-2-3-0` with apex `4` joined to `0` and `1`.
#[must_use]
pub fn house() -> AdjacencyGraph {
    build(5, [(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1)])
}

/// Triangles `{0,1,2}` and `{2,3,4}` sharing vertex `2`.
#[must_use]
pub fn bow_tie() -> AdjacencyGraph {
    build(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)])
}

/// Zachary's karate club: 34 members, 78 friendships.
#[must_use]
pub fn karate_club() -> AdjacencyGraph {
    build(34, KARATE_CLUB_EDGES.iter().copied())
}

/// Six vertices whose cycle `0-2-5-3-0` has no chord.
#[must_use]
pub fn paper_graph() -> AdjacencyGraph {
    build(
        6,
        [(0, 2), (0, 3), (1, 2), (1, 4), (2, 5), (3, 5), (4, 5)],
    )
}

/// Ten isolated vertices.
#[must_use]
pub fn test_graph_empty() -> AdjacencyGraph {
    empty(DEFAULT_SIZE)
}

/// `K_10`.
#[must_use]
pub fn test_graph_clique() -> AdjacencyGraph {
    clique(DEFAULT_SIZE)
}

const KARATE_CLUB_EDGES: [(usize, usize); 78] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 10), (0, 11),
    (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31),
    (1, 2), (1, 3), (1, 7), (1, 13), (1, 17), (1, 19), (1, 21), (1, 30),
    (2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28), (2, 32),
    (3, 7), (3, 12), (3, 13),
    (4, 6), (4, 10),
    (5, 6), (5, 10), (5, 16),
    (6, 16),
    (8, 30), (8, 32), (8, 33),
    (9, 33),
    (13, 33),
    (14, 32), (14, 33),
    (15, 32), (15, 33),
    (18, 32), (18, 33),
    (19, 33),
    (20, 32), (20, 33),
    (22, 32), (22, 33),
    (23, 25), (23, 27), (23, 29), (23, 32), (23, 33),
    (24, 25), (24, 27), (24, 31),
    (25, 31),
    (26, 29), (26, 33),
    (27, 33),
    (28, 31), (28, 33),
    (29, 32), (29, 33),
    (30, 32), (30, 33),
    (31, 32), (31, 33),
    (32, 33),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A built-in graph, optionally sized (`clique:6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Empty(usize),
    Clique(usize),
    Cycle(usize),
    House,
    BowTie,
    KarateClub,
    Paper,
}

impl Dataset {
    /// Every dataset at its default size.
    pub const ALL: [Self; 7] = [
        Self::Empty(DEFAULT_SIZE),
        Self::Clique(DEFAULT_SIZE),
        Self::Cycle(DEFAULT_SIZE),
        Self::House,
        Self::BowTie,
        Self::KarateClub,
        Self::Paper,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty(_) => "empty",
            Self::Clique(_) => "clique",
            Self::Cycle(_) => "cycle",
            Self::House => "house",
            Self::BowTie => "bow-tie",
            Self::KarateClub => "karate-club",
            Self::Paper => "paper",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Empty(_) => "isolated vertices (name:n, default 10)",
            Self::Clique(_) => "complete graph (name:n, default 10)",
            Self::Cycle(_) => "chordless cycle (name:n, default 10)",
            Self::House => "square with a roof apex on one side",
            Self::BowTie => "two triangles sharing one vertex",
            Self::KarateClub => "Zachary's karate club social network",
            Self::Paper => "six vertices around a chordless square",
        }
    }

    #[must_use]
    pub fn graph(self) -> AdjacencyGraph {
        match self {
            Self::Empty(n) => empty(n),
            Self::Clique(n) => clique(n),
            Self::Cycle(n) => cycle(n),
            Self::House => house(),
            Self::BowTie => bow_tie(),
            Self::KarateClub => karate_club(),
            Self::Paper => paper_graph(),
        }
    }

    /// Look a dataset up by name; sized datasets accept `name:n`.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(n) | Self::Clique(n) | Self::Cycle(n) => write!(f, "{}:{n}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (base, size) = match normalized.split_once(':') {
            Some((base, size)) => {
                let n = size
                    .parse::<usize>()
                    .map_err(|_| format!("invalid dataset size '{size}'"))?;
                if n > MAX_DATASET_SIZE {
                    return Err(format!(
                        "dataset size {n} exceeds the limit of {MAX_DATASET_SIZE}"
                    ));
                }
                (base.to_string(), Some(n))
            }
            None => (normalized, None),
        };
        let n = size.unwrap_or(DEFAULT_SIZE);

        let dataset = match base.as_str() {
            "empty" => Self::Empty(n),
            "clique" | "complete" => Self::Clique(n),
            "cycle" => Self::Cycle(n),
            "house" => Self::House,
            "bow-tie" | "bowtie" => Self::BowTie,
            "karate-club" | "karate" => Self::KarateClub,
            "paper" => Self::Paper,
            other => return Err(format!("unknown dataset '{other}'")),
        };

        if size.is_some() && !matches!(dataset, Self::Empty(_) | Self::Clique(_) | Self::Cycle(_)) {
            return Err(format!("dataset '{}' has a fixed size", dataset.name()));
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_graph_shapes() {
        let cases = [
            (house(), 5, 6),
            (bow_tie(), 5, 6),
            (karate_club(), 34, 78),
            (paper_graph(), 6, 7),
            (test_graph_empty(), 10, 0),
            (test_graph_clique(), 10, 45),
        ];
        for (g, n, m) in cases {
            assert_eq!((g.vertex_count(), g.edge_count()), (n, m));
        }
    }

    #[test]
    fn small_cycles_degenerate_gracefully() {
        assert_eq!(cycle(0).vertex_count(), 0);
        assert_eq!(cycle(1).edge_count(), 0);
        assert_eq!(cycle(2).edge_count(), 1);
        assert_eq!(cycle(5).edge_count(), 5);
    }

    #[test]
    fn names_round_trip_through_registry() {
        for dataset in Dataset::ALL {
            assert_eq!(Dataset::by_name(&dataset.to_string()), Some(dataset));
            assert_eq!(
                Dataset::by_name(dataset.name()).map(Dataset::name),
                Some(dataset.name())
            );
        }
    }

    #[test]
    fn sized_names_are_capped() {
        assert_eq!(
            "clique:4096".parse::<Dataset>(),
            Ok(Dataset::Clique(MAX_DATASET_SIZE))
        );
        let err = "clique:200000".parse::<Dataset>().expect_err("too large");
        assert!(err.contains("exceeds the limit of 4096"), "{err}");
        assert!(Dataset::by_name("cycle:4097").is_none());
    }

    #[test]
    fn sized_names_parse() {
        assert_eq!(Dataset::by_name("clique:4"), Some(Dataset::Clique(4)));
        assert_eq!(Dataset::by_name("Karate_Club"), Some(Dataset::KarateClub));
        assert_eq!(Dataset::by_name("cycle"), Some(Dataset::Cycle(DEFAULT_SIZE)));
        assert!("house:3".parse::<Dataset>().is_err());
        assert!("clique:x".parse::<Dataset>().is_err());
        assert!("petersen".parse::<Dataset>().is_err());
    }
}
