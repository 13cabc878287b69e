//! Side-by-side topology comparison.
//!
//! Runs the analyzer over a set of labeled topologies and ranks them by a
//! configurable criterion. Analysis of the individual topologies is
//! independent (the analyzer never mutates its input), so the entries are
//! computed on a rayon parallel iterator.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::metrics::{analyze, MetricsReport};
use crate::analysis::resilience::simulate_node_failure;
use crate::graph::Graph;

/// Criterion used to rank compared topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankingCriterion {
    /// Fewest components after losing the highest-degree node
    #[default]
    Resilience,
    /// Smallest diameter; disconnected topologies rank last
    Diameter,
    /// Lowest average degree (fewest links per node)
    AverageDegree,
}

/// Metrics for one labeled topology in a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub label: String,
    pub metrics: MetricsReport,
    /// Components left after this topology loses its max-degree node;
    /// 0 for an empty topology (nothing to fail)
    pub components_after_hub_failure: usize,
}

/// Result of comparing several topologies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// One entry per input, in input order
    pub entries: Vec<ComparisonEntry>,
    /// Labels ordered best-first by the ranking criterion
    pub ranking: Vec<String>,
    pub criterion: RankingCriterion,
}

/// Analyze every labeled topology and rank them.
///
/// Ties are broken by lower average degree (fewer links is the more
/// efficient design), then by label, so repeated runs with identical
/// inputs produce identical reports.
pub fn compare(inputs: &[(String, Graph)], criterion: RankingCriterion) -> ComparisonReport {
    let entries: Vec<ComparisonEntry> = inputs
        .par_iter()
        .map(|(label, graph)| {
            let metrics = analyze(graph);
            let components_after_hub_failure = graph
                .max_degree_node()
                .and_then(|hub| simulate_node_failure(graph, &hub).ok())
                .map(|report| report.components_after)
                .unwrap_or(0);
            ComparisonEntry {
                label: label.clone(),
                metrics,
                components_after_hub_failure,
            }
        })
        .collect();

    let mut ranked: Vec<&ComparisonEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| {
        primary_key(a, criterion)
            .cmp(&primary_key(b, criterion))
            .then_with(|| {
                a.metrics
                    .average_degree
                    .total_cmp(&b.metrics.average_degree)
            })
            .then_with(|| a.label.cmp(&b.label))
    });
    let ranking: Vec<String> = ranked.into_iter().map(|e| e.label.clone()).collect();

    info!(
        "Compared {} topologies by {:?}; best: {}",
        entries.len(),
        criterion,
        ranking.first().map(String::as_str).unwrap_or("n/a")
    );

    ComparisonReport {
        entries,
        ranking,
        criterion,
    }
}

/// Primary sort key, lower is better. Topologies the criterion does not
/// apply to (empty, or disconnected for diameter) sort last.
fn primary_key(entry: &ComparisonEntry, criterion: RankingCriterion) -> u64 {
    match criterion {
        RankingCriterion::Resilience => {
            if entry.metrics.node_count == 0 {
                u64::MAX
            } else {
                entry.components_after_hub_failure as u64
            }
        }
        RankingCriterion::Diameter => entry
            .metrics
            .diameter
            .map(|d| d as u64)
            .unwrap_or(u64::MAX),
        RankingCriterion::AverageDegree => {
            // Scale to preserve ordering through the integer key
            (entry.metrics.average_degree * 1e6) as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{generate, TopologySpec};

    fn labeled(label: &str, spec: &TopologySpec) -> (String, Graph) {
        (label.to_string(), generate(spec).unwrap())
    }

    #[test]
    fn test_mesh_outranks_star_on_resilience() {
        let inputs = vec![
            labeled("star", &TopologySpec::Star { nodes: 6 }),
            labeled("mesh", &TopologySpec::FullMesh { nodes: 6 }),
            labeled("ring", &TopologySpec::Ring { nodes: 6 }),
        ];
        let report = compare(&inputs, RankingCriterion::Resilience);

        // Mesh and ring both stay in one piece after losing their hub,
        // but ring has the lower average degree; the star shatters.
        assert_eq!(report.ranking, vec!["ring", "mesh", "star"]);
        assert_eq!(report.entries[0].components_after_hub_failure, 5);
        assert_eq!(report.entries[1].components_after_hub_failure, 1);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let inputs = vec![
            labeled("b", &TopologySpec::Bus { nodes: 4 }),
            labeled("a", &TopologySpec::Ring { nodes: 4 }),
        ];
        let report = compare(&inputs, RankingCriterion::Resilience);
        assert_eq!(report.entries[0].label, "b");
        assert_eq!(report.entries[1].label, "a");
    }

    #[test]
    fn test_ranking_is_reproducible() {
        let inputs = vec![
            labeled("star", &TopologySpec::Star { nodes: 8 }),
            labeled("tree", &TopologySpec::Tree { nodes: 8, branching: 2 }),
            labeled(
                "fabric",
                &TopologySpec::SpineLeaf {
                    spines: 3,
                    leaves: 5,
                },
            ),
        ];
        let first = compare(&inputs, RankingCriterion::Resilience);
        let second = compare(&inputs, RankingCriterion::Resilience);
        assert_eq!(first.ranking, second.ranking);
    }

    #[test]
    fn test_diameter_criterion_puts_disconnected_last() {
        let mut disconnected = Graph::new();
        disconnected.add_node("a", None).unwrap();
        disconnected.add_node("b", None).unwrap();

        let inputs = vec![
            ("islands".to_string(), disconnected),
            labeled("mesh", &TopologySpec::FullMesh { nodes: 4 }),
        ];
        let report = compare(&inputs, RankingCriterion::Diameter);
        assert_eq!(report.ranking, vec!["mesh", "islands"]);
    }

    #[test]
    fn test_empty_topology_ranks_last_on_resilience() {
        let inputs = vec![
            ("empty".to_string(), Graph::new()),
            labeled("bus", &TopologySpec::Bus { nodes: 3 }),
        ];
        let report = compare(&inputs, RankingCriterion::Resilience);
        assert_eq!(report.ranking.last().unwrap().as_str(), "empty");
        assert_eq!(report.entries[0].components_after_hub_failure, 0);
    }
}
