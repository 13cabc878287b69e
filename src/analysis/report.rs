//! Report generation for topology analysis.
//!
//! Generates both JSON and human-readable text reports. The JSON report
//! is the [`MetricsReport`] serialized as-is, so downstream consumers see
//! exactly the engine's fields with nothing added or dropped.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use crate::analysis::comparison::ComparisonReport;
use crate::analysis::metrics::{degree_summary, MetricsReport};
use crate::analysis::resilience::FailureReport;
use crate::graph::Graph;

/// Write the metrics report as pretty-printed JSON
pub fn write_json_report(report: &MetricsReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize metrics report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Render the human-readable topology summary
pub fn render_text_summary(graph: &Graph, report: &MetricsReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Network Topology Summary ===".to_string());
    lines.push(format!(
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    lines.push(format!("Nodes: {}", report.node_count));
    lines.push(format!("Edges: {}", report.edge_count));
    lines.push(format!(
        "Connected: {}",
        if report.is_connected { "Yes" } else { "No" }
    ));
    match report.diameter {
        Some(d) => lines.push(format!("Network Diameter: {d}")),
        None => lines.push("Network Diameter: undefined (disconnected)".to_string()),
    }
    lines.push(format!("Average Degree: {:.1}", report.average_degree));
    lines.push(format!(
        "Average Clustering: {:.3}",
        report.average_clustering_coefficient
    ));

    let degrees = degree_summary(graph);
    if let Some(ref hub) = degrees.most_connected {
        lines.push(format!(
            "Most Connected Node: {} (degree: {})",
            hub, degrees.max
        ));
    }
    lines.push(String::new());

    lines.push("=== Node Details ===".to_string());
    for id in graph.node_ids() {
        let role = graph
            .node(&id)
            .and_then(|n| n.role)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let coefficient = report
            .per_node_clustering_coefficient
            .get(&id)
            .copied()
            .unwrap_or(0.0);
        lines.push(format!("{id}: role={role}, clustering={coefficient:.3}"));
    }
    lines.push(String::new());

    lines.push(format!("=== Edge Details ({} links) ===", report.edge_count));
    for (a, b) in graph.edges() {
        lines.push(format!("{a} -- {b}"));
    }

    lines.join("\n")
}

/// Write the text summary to a file
pub fn write_text_summary(graph: &Graph, report: &MetricsReport, output_path: &Path) -> Result<()> {
    let text = render_text_summary(graph, report);
    fs::write(output_path, text)
        .with_context(|| format!("Failed to write summary to {}", output_path.display()))?;

    log::info!("Topology summary exported to {}", output_path.display());
    Ok(())
}

/// Render a failure simulation as before/after text
pub fn render_failure_report(report: &FailureReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "=== Failure Simulation: node '{}' removed ===",
        report.failed_node
    ));
    lines.push(String::new());
    lines.push(format!(
        "{:<22} {:>10} {:>10}",
        "Metric", "Before", "After"
    ));
    lines.push("-".repeat(44));
    lines.push(format!(
        "{:<22} {:>10} {:>10}",
        "Nodes", report.before.node_count, report.after.node_count
    ));
    lines.push(format!(
        "{:<22} {:>10} {:>10}",
        "Edges", report.before.edge_count, report.after.edge_count
    ));
    lines.push(format!(
        "{:<22} {:>10} {:>10}",
        "Connected",
        if report.before.is_connected { "Yes" } else { "No" },
        if report.after.is_connected { "Yes" } else { "No" }
    ));
    lines.push(format!(
        "{:<22} {:>10} {:>10}",
        "Diameter",
        format_diameter(report.before.diameter),
        format_diameter(report.after.diameter)
    ));
    lines.push(format!(
        "{:<22} {:>10.1} {:>10.1}",
        "Average degree", report.before.average_degree, report.after.average_degree
    ));
    lines.push(String::new());

    if report.components_after > 1 {
        lines.push(format!(
            "Network split into {} isolated components",
            report.components_after
        ));
    } else {
        lines.push("Network remains connected after failure".to_string());
    }

    lines.join("\n")
}

/// Render the comparison table and ranking
pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Topology Comparison ===".to_string());
    lines.push(String::new());
    lines.push(format!(
        "{:<14} {:>6} {:>6} {:>10} {:>10} {:>9} {:>10} {:>11}",
        "Topology", "Nodes", "Edges", "AvgDegree", "Connected", "Diameter", "Clustering", "Components*"
    ));
    lines.push("-".repeat(82));

    for entry in &report.entries {
        let m = &entry.metrics;
        lines.push(format!(
            "{:<14} {:>6} {:>6} {:>10.1} {:>10} {:>9} {:>10.3} {:>11}",
            entry.label,
            m.node_count,
            m.edge_count,
            m.average_degree,
            if m.is_connected { "Yes" } else { "No" },
            format_diameter(m.diameter),
            m.average_clustering_coefficient,
            entry.components_after_hub_failure
        ));
    }
    lines.push(String::new());
    lines.push("* components remaining after the topology's most connected node fails".to_string());
    lines.push(String::new());

    lines.push(format!("Ranking ({:?}):", report.criterion));
    for (i, label) in report.ranking.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, label));
    }

    lines.join("\n")
}

fn format_diameter(diameter: Option<usize>) -> String {
    match diameter {
        Some(d) => d.to_string(),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics::analyze;
    use crate::analysis::resilience::simulate_node_failure;
    use crate::topology::{generate, TopologySpec};

    #[test]
    fn test_text_summary_contains_key_metrics() {
        let graph = generate(&TopologySpec::Star { nodes: 4 }).unwrap();
        let report = analyze(&graph);
        let text = render_text_summary(&graph, &report);
        assert!(text.contains("Nodes: 4"));
        assert!(text.contains("Edges: 3"));
        assert!(text.contains("Network Diameter: 2"));
        assert!(text.contains("node1: role=hub"));
        assert!(text.contains("node1 -- node2"));
    }

    #[test]
    fn test_text_summary_marks_undefined_diameter() {
        let mut graph = Graph::new();
        graph.add_node("a", None).unwrap();
        graph.add_node("b", None).unwrap();
        let report = analyze(&graph);
        let text = render_text_summary(&graph, &report);
        assert!(text.contains("undefined (disconnected)"));
    }

    #[test]
    fn test_json_report_has_exactly_the_report_fields() {
        let graph = generate(&TopologySpec::Ring { nodes: 4 }).unwrap();
        let report = analyze(&graph);
        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "average_clustering_coefficient",
                "average_degree",
                "diameter",
                "edge_count",
                "is_connected",
                "node_count",
                "per_node_clustering_coefficient",
            ]
        );
    }

    #[test]
    fn test_json_report_round_trips_through_file() {
        let graph = generate(&TopologySpec::Bus { nodes: 3 }).unwrap();
        let report = analyze(&graph);
        let file = tempfile::NamedTempFile::new().unwrap();
        write_json_report(&report, file.path()).unwrap();
        let restored: MetricsReport =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_failure_report_mentions_fragmentation() {
        let graph = generate(&TopologySpec::Star { nodes: 5 }).unwrap();
        let failure = simulate_node_failure(&graph, "node1").unwrap();
        let text = render_failure_report(&failure);
        assert!(text.contains("split into 4 isolated components"));
    }
}
