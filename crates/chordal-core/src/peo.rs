//! Perfect elimination ordering check.
//!
//! Vertices are visited in increasing rank. For vertex `v`, its later
//! neighbours `L(v)` are the neighbours of higher rank and its parent is the
//! member of `L(v)` with the smallest rank. The ordering is perfect iff every
//! member of `L(v)` other than the parent is adjacent to the parent.
//!
//! This is the linear recognition test from Tarjan and Yannakakis: when the
//! check holds for every vertex, each `L(v)` is a clique by induction along
//! parent links.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::{AdjacencyGraph, Vertex};
use crate::mcs::Ranking;

/// Witness that an ordering is not a perfect elimination ordering.
///
/// `parent` and `unmatched` are both later neighbours of `vertex` but are not
/// adjacent to each other, so `unmatched - vertex - parent` plus a path back
/// through later vertices closes a chordless cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeoViolation {
    pub vertex: Vertex,
    pub parent: Vertex,
    pub unmatched: Vertex,
}

impl fmt::Display for PeoViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "later neighbours {} and {} of vertex {} are not adjacent",
            self.parent, self.unmatched, self.vertex
        )
    }
}

fn later_neighbors<'a>(
    graph: &'a AdjacencyGraph,
    ranking: &'a Ranking,
    v: Vertex,
) -> impl Iterator<Item = Vertex> + 'a {
    let rv = ranking.rank_of(v);
    graph
        .neighbors(v)
        .iter()
        .copied()
        .filter(move |&u| ranking.rank_of(u) > rv)
}

fn parent_of(graph: &AdjacencyGraph, ranking: &Ranking, v: Vertex) -> Option<Vertex> {
    later_neighbors(graph, ranking, v).min_by_key(|&u| ranking.rank_of(u))
}

/// First violation found when eliminating in increasing rank, or `None` if
/// the ranking is a perfect elimination ordering.
///
/// # Panics
///
/// Panics if `ranking` does not rank exactly the vertices of `graph`.
#[must_use]
#[instrument(skip(graph, ranking), fields(n = graph.vertex_count()))]
pub fn find_violation(graph: &AdjacencyGraph, ranking: &Ranking) -> Option<PeoViolation> {
    assert_eq!(
        ranking.len(),
        graph.vertex_count(),
        "ranking must cover every vertex"
    );
    debug_assert!(ranking.is_valid_for(graph.vertex_count()));

    for &v in ranking.elimination_order() {
        let Some(parent) = parent_of(graph, ranking, v) else {
            continue;
        };

        if let Some(unmatched) = later_neighbors(graph, ranking, v)
            .find(|&u| u != parent && !graph.is_adjacent(u, parent))
        {
            let violation = PeoViolation {
                vertex: v,
                parent,
                unmatched,
            };
            debug!(%violation, "not a perfect elimination ordering");
            return Some(violation);
        }
    }

    None
}

/// `true` if eliminating in increasing rank is a perfect elimination
/// ordering of `graph`.
///
/// # Panics
///
/// Panics if `ranking` does not rank exactly the vertices of `graph`.
#[must_use]
pub fn is_perfect_elimination_ordering(graph: &AdjacencyGraph, ranking: &Ranking) -> bool {
    find_violation(graph, ranking).is_none()
}

/// Elimination parent of every vertex (`None` when it has no later
/// neighbour). Computed for all vertices without short-circuiting.
///
/// Parents always have strictly higher rank, so the relation is a forest.
///
/// # Panics
///
/// Panics if `ranking` does not rank exactly the vertices of `graph`.
#[must_use]
pub fn elimination_parents(graph: &AdjacencyGraph, ranking: &Ranking) -> Vec<Option<Vertex>> {
    assert_eq!(
        ranking.len(),
        graph.vertex_count(),
        "ranking must cover every vertex"
    );
    (0..graph.vertex_count())
        .map(|v| parent_of(graph, ranking, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid")
    }

    #[test]
    fn chordless_square_has_no_perfect_ordering() {
        let g = square();
        let r = Ranking::from_elimination_order(vec![0, 1, 2, 3]).expect("permutation");
        // eliminating 0 first: later neighbours 1 and 3, parent 1, 3 !~ 1
        assert_eq!(
            find_violation(&g, &r),
            Some(PeoViolation {
                vertex: 0,
                parent: 1,
                unmatched: 3
            })
        );
    }

    #[test]
    fn chorded_square_accepts_ordering_through_simplicial_vertex() {
        let mut edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        edges.push((1, 3));
        let g = AdjacencyGraph::from_edges(4, edges).expect("valid");
        let r = Ranking::from_elimination_order(vec![0, 2, 1, 3]).expect("permutation");
        assert!(is_perfect_elimination_ordering(&g, &r));

        // 1 is not simplicial while 0 and 2 remain
        let bad = Ranking::from_elimination_order(vec![1, 0, 2, 3]).expect("permutation");
        assert!(!is_perfect_elimination_ordering(&g, &bad));
    }

    #[test]
    fn empty_and_edgeless_graphs_pass() {
        let r = Ranking::from_elimination_order(Vec::new()).expect("empty");
        assert!(is_perfect_elimination_ordering(&AdjacencyGraph::empty(0), &r));

        let r = Ranking::from_elimination_order(vec![2, 0, 1]).expect("permutation");
        assert!(is_perfect_elimination_ordering(&AdjacencyGraph::empty(3), &r));
        assert_eq!(
            elimination_parents(&AdjacencyGraph::empty(3), &r),
            vec![None, None, None]
        );
    }

    #[test]
    fn parents_point_to_nearest_later_neighbour() {
        let g = square();
        let r = Ranking::from_elimination_order(vec![0, 1, 2, 3]).expect("permutation");
        assert_eq!(
            elimination_parents(&g, &r),
            vec![Some(1), Some(2), Some(3), None]
        );
    }

    #[test]
    fn violation_display_names_the_triple() {
        let v = PeoViolation {
            vertex: 5,
            parent: 7,
            unmatched: 3,
        };
        assert_eq!(
            v.to_string(),
            "later neighbours 7 and 3 of vertex 5 are not adjacent"
        );
    }

    #[test]
    #[should_panic(expected = "ranking must cover every vertex")]
    fn mismatched_ranking_panics() {
        let r = Ranking::from_elimination_order(vec![0, 1]).expect("permutation");
        let _ = find_violation(&square(), &r);
    }
}
