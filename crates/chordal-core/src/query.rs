//! Chordality query: Graph View → MCS → PEO check → verdict.
//!
//! [`is_chordal`] is the plain function. [`check_chordality`] also returns
//! the ranking (a perfect elimination ordering whenever the graph is
//! chordal) and the violating triple otherwise. [`ChordalityTest`] and
//! [`McsOrdering`] wrap the same calls behind the [`Algorithm`] interface.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::algorithm::{Algorithm, Param};
use crate::graph::AdjacencyGraph;
use crate::mcs::{McsStrategy, Ranking, maximum_cardinality_search_with};
use crate::peo::{PeoViolation, find_violation};

/// Options for one chordality query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordalityConfig {
    /// MCS selection strategy. Only affects the ordering, never the verdict.
    pub strategy: McsStrategy,
    /// Log each verdict at `info` instead of `debug`. Not displayed.
    pub verbose: bool,
}

/// Verdict plus the artifacts that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordalityReport {
    pub chordal: bool,
    pub ranking: Ranking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<PeoViolation>,
}

/// `true` if every cycle of length four or more in `graph` has a chord.
#[must_use]
pub fn is_chordal(graph: &AdjacencyGraph) -> bool {
    check_chordality(graph, &ChordalityConfig::default()).chordal
}

/// Run MCS and validate the resulting ordering.
#[must_use]
#[instrument(skip(graph, config), fields(n = graph.vertex_count(), m = graph.edge_count(), strategy = %config.strategy))]
pub fn check_chordality(graph: &AdjacencyGraph, config: &ChordalityConfig) -> ChordalityReport {
    let ranking = maximum_cardinality_search_with(graph, config.strategy);
    let violation = find_violation(graph, &ranking);
    let chordal = violation.is_none();

    if config.verbose {
        info!(chordal, "chordality checked");
    } else {
        debug!(chordal, "chordality checked");
    }

    ChordalityReport {
        chordal,
        ranking,
        violation,
    }
}

/// Chordality test as a configured algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordalityTest {
    pub config: ChordalityConfig,
}

impl ChordalityTest {
    #[must_use]
    pub const fn new(config: ChordalityConfig) -> Self {
        Self { config }
    }
}

impl Algorithm for ChordalityTest {
    type Input = AdjacencyGraph;
    type Output = ChordalityReport;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("ChordalityTest")
    }

    fn params(&self) -> Vec<Param> {
        vec![Param::new("strategy", self.config.strategy.as_str())]
    }

    fn run(&self, input: &AdjacencyGraph) -> ChordalityReport {
        check_chordality(input, &self.config)
    }
}

/// MCS ordering alone, for callers that need the elimination order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct McsOrdering {
    pub strategy: McsStrategy,
}

impl Algorithm for McsOrdering {
    type Input = AdjacencyGraph;
    type Output = Ranking;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("McsOrdering")
    }

    fn params(&self) -> Vec<Param> {
        vec![Param::new("strategy", self.strategy.as_str())]
    }

    fn run(&self, input: &AdjacencyGraph) -> Ranking {
        maximum_cardinality_search_with(input, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_ranking_and_witness() {
        let g = AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid");
        let report = check_chordality(&g, &ChordalityConfig::default());
        assert!(!report.chordal);
        assert!(report.ranking.is_valid_for(4));
        let violation = report.violation.expect("witness");
        assert!(!g.is_adjacent(violation.parent, violation.unmatched));
        assert!(g.is_adjacent(violation.vertex, violation.parent));
        assert!(g.is_adjacent(violation.vertex, violation.unmatched));
    }

    #[test]
    fn algorithms_display_only_declared_fields() {
        let test = ChordalityTest::new(ChordalityConfig {
            strategy: McsStrategy::Linear,
            verbose: true,
        });
        assert_eq!(test.display().to_string(), "ChordalityTest(strategy='linear')");
        assert_eq!(
            McsOrdering::default().display().to_string(),
            "McsOrdering(strategy='bucketed')"
        );
    }

    #[test]
    fn algorithm_run_matches_function() {
        let g = AdjacencyGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("valid");
        let report = ChordalityTest::default().run(&g);
        assert!(report.chordal);
        assert_eq!(report.violation, None);
        assert_eq!(McsOrdering::default().run(&g), report.ranking);
    }

    #[test]
    fn report_serializes_without_empty_violation() {
        let g = AdjacencyGraph::empty(2);
        let report = check_chordality(&g, &ChordalityConfig::default());
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["chordal"], serde_json::Value::Bool(true));
        assert_eq!(json["ranking"]["rank"], serde_json::json!([2, 1]));
        assert!(json.get("violation").is_none());
    }
}
