//! Regression tests for the topology engine: generator invariants,
//! analyzer edge cases, failure simulation, and comparison determinism.

use std::io::Write;
use tempfile::NamedTempFile;

use netsimpro::analysis::{analyze, compare, simulate_node_failure, RankingCriterion};
use netsimpro::graph::Graph;
use netsimpro::registry::TopologyRegistry;
use netsimpro::topology::{generate, SizePreset, TopologyKind, TopologySpec};

fn preset_graph(kind: TopologyKind, size: SizePreset) -> Graph {
    generate(&TopologySpec::preset(kind, size)).unwrap()
}

/// Every preset of every family must satisfy the adjacency invariant:
/// symmetry, no self-loops, degree sum = 2 * edges.
#[test]
fn test_all_presets_hold_adjacency_invariants() {
    let kinds = [
        TopologyKind::Star,
        TopologyKind::Ring,
        TopologyKind::FullMesh,
        TopologyKind::PartialMesh,
        TopologyKind::Tree,
        TopologyKind::SpineLeaf,
        TopologyKind::Bus,
        TopologyKind::Hybrid,
    ];
    let sizes = [SizePreset::Small, SizePreset::Medium, SizePreset::Large];

    for kind in kinds {
        for size in sizes {
            let graph = preset_graph(kind, size);
            assert!(graph.node_count() > 0, "{kind} {size:?} is empty");

            let mut degree_sum = 0usize;
            for id in graph.node_ids() {
                let peers = graph.neighbors(&id).unwrap();
                assert!(!peers.contains(&id), "self-loop in {kind}");
                for peer in peers {
                    assert!(
                        graph.neighbors(peer).unwrap().contains(&id),
                        "asymmetric adjacency in {kind}"
                    );
                }
                degree_sum += peers.len();
            }
            assert_eq!(degree_sum, 2 * graph.edge_count(), "degree sum in {kind}");
        }
    }
}

/// Every preset family except a deliberately partitioned custom graph
/// must come out connected, including hybrid compositions.
#[test]
fn test_all_presets_are_connected() {
    let kinds = [
        TopologyKind::Star,
        TopologyKind::Ring,
        TopologyKind::FullMesh,
        TopologyKind::PartialMesh,
        TopologyKind::Tree,
        TopologyKind::SpineLeaf,
        TopologyKind::Bus,
        TopologyKind::Hybrid,
    ];
    for kind in kinds {
        let graph = preset_graph(kind, SizePreset::Medium);
        let report = analyze(&graph);
        assert!(report.is_connected, "{kind} preset is disconnected");
        assert!(report.diameter.is_some());
    }
}

#[test]
fn test_star_properties() {
    for n in [2usize, 5, 30] {
        let graph = generate(&TopologySpec::Star { nodes: n }).unwrap();
        let report = analyze(&graph);
        if n >= 3 {
            assert_eq!(report.diameter, Some(2), "star of {n}");
        }
        assert_eq!(graph.degree("node1").unwrap(), n - 1);
    }
}

#[test]
fn test_full_mesh_properties() {
    let graph = generate(&TopologySpec::FullMesh { nodes: 8 }).unwrap();
    let report = analyze(&graph);
    assert_eq!(report.edge_count, 8 * 7 / 2);
    assert_eq!(report.diameter, Some(1));
    assert_eq!(report.average_clustering_coefficient, 1.0);
}

#[test]
fn test_hub_failure_fragments_star() {
    let graph = generate(&TopologySpec::Star { nodes: 10 }).unwrap();
    let report = simulate_node_failure(&graph, "node1").unwrap();
    assert_eq!(report.components_after, 9);
    // Base topology unchanged, repeatable
    assert_eq!(graph.node_count(), 10);
    let again = simulate_node_failure(&graph, "node1").unwrap();
    assert_eq!(again.components_after, 9);
}

#[test]
fn test_spine_failure_keeps_fabric_connected() {
    let graph = generate(&TopologySpec::SpineLeaf {
        spines: 3,
        leaves: 6,
    })
    .unwrap();
    let report = simulate_node_failure(&graph, "spine1").unwrap();
    assert_eq!(report.components_after, 1);
    assert!(report.after.is_connected);
}

/// Generators must be pure: identical specs give byte-identical
/// node/edge sets, and comparison rankings never change across runs.
#[test]
fn test_generation_and_comparison_are_deterministic() {
    let spec = TopologySpec::Hybrid {
        segments: vec![
            TopologySpec::FullMesh { nodes: 4 },
            TopologySpec::Ring { nodes: 5 },
            TopologySpec::Star { nodes: 6 },
        ],
    };
    let a = generate(&spec).unwrap();
    let b = generate(&spec).unwrap();
    assert_eq!(a.node_ids(), b.node_ids());
    assert_eq!(a.edges(), b.edges());

    let inputs: Vec<(String, Graph)> = [
        ("star", TopologyKind::Star),
        ("ring", TopologyKind::Ring),
        ("mesh", TopologyKind::FullMesh),
        ("tree", TopologyKind::Tree),
        ("bus", TopologyKind::Bus),
    ]
    .iter()
    .map(|(label, kind)| {
        (
            label.to_string(),
            preset_graph(*kind, SizePreset::Small),
        )
    })
    .collect();

    let first = compare(&inputs, RankingCriterion::Resilience);
    for _ in 0..5 {
        let next = compare(&inputs, RankingCriterion::Resilience);
        assert_eq!(next.ranking, first.ranking);
    }
}

#[test]
fn test_spec_file_drives_generation() {
    let yaml = "type: spine_leaf\nspines: 2\nleaves: 4\n";
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let spec: TopologySpec = serde_yaml::from_str(&content).unwrap();
    let graph = generate(&spec).unwrap();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 8);
}

#[test]
fn test_registry_round_trip_feeds_comparison() {
    let mut registry = TopologyRegistry::new();
    registry.insert("ring", preset_graph(TopologyKind::Ring, SizePreset::Small));
    registry.insert("star", preset_graph(TopologyKind::Star, SizePreset::Small));

    let file = NamedTempFile::new().unwrap();
    registry.save(file.path()).unwrap();
    let restored = TopologyRegistry::load_or_default(file.path()).unwrap();

    let report = compare(&restored.entries(), RankingCriterion::Resilience);
    assert_eq!(report.entries.len(), 2);
    // A ring survives losing any node; a star shatters at the hub
    assert_eq!(report.ranking.first().unwrap().as_str(), "ring");
}

#[test]
fn test_degenerate_graphs_analyze_without_error() {
    let empty = Graph::new();
    let report = analyze(&empty);
    assert!(report.is_connected);
    assert_eq!(report.average_degree, 0.0);

    let mut single = Graph::new();
    single.add_node("only", None).unwrap();
    let report = analyze(&single);
    assert!(report.is_connected);
    assert_eq!(report.diameter, Some(0));
    assert_eq!(report.average_clustering_coefficient, 0.0);
}
