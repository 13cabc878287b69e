use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Context, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use netsimpro::analysis::report::{
    render_comparison, render_failure_report, render_text_summary, write_json_report,
    write_text_summary,
};
use netsimpro::analysis::{analyze, compare, simulate_node_failure, RankingCriterion};
use netsimpro::graph::Graph;
use netsimpro::registry::TopologyRegistry;
use netsimpro::render::adjacency_view;
use netsimpro::topology::{generate, SizePreset, TopologyKind, TopologySpec};

/// Network topology modeling, metrics, and resilience analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a topology and write it as a graph JSON document
    Generate {
        /// Topology family to generate
        #[arg(short, long, conflicts_with = "spec")]
        topology: Option<TopologyKind>,

        /// Size preset for the chosen family
        #[arg(short, long, default_value = "medium")]
        size: SizePreset,

        /// YAML topology spec file (alternative to --topology/--size)
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Output path for the graph JSON document
        #[arg(short, long, default_value = "topology.json")]
        output: PathBuf,

        /// Also export a human-readable summary to this path
        #[arg(long)]
        summary: Option<PathBuf>,

        /// Record the topology in this registry file
        #[arg(long, requires = "label")]
        registry: Option<PathBuf>,

        /// Label to store the topology under
        #[arg(long, requires = "registry")]
        label: Option<String>,
    },

    /// Analyze a stored topology and print its metrics
    Analyze {
        /// Path to a graph JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Also write the metrics report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Simulate the failure of a single node
    Simulate {
        /// Path to a graph JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the node to fail
        #[arg(short, long)]
        node: String,
    },

    /// Compare all topologies stored in a registry
    Compare {
        /// Path to a registry JSON file
        #[arg(short, long)]
        registry: PathBuf,

        /// Ranking criterion
        #[arg(short, long, default_value = "resilience")]
        criterion: RankingCriterion,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli.command {
        Command::Generate {
            topology,
            size,
            spec,
            output,
            summary,
            registry,
            label,
        } => run_generate(topology, size, spec, output, summary, registry, label),
        Command::Analyze { input, json } => run_analyze(&input, json),
        Command::Simulate { input, node } => run_simulate(&input, &node),
        Command::Compare {
            registry,
            criterion,
        } => run_compare(&registry, criterion),
    }
}

fn run_generate(
    topology: Option<TopologyKind>,
    size: SizePreset,
    spec_path: Option<PathBuf>,
    output: PathBuf,
    summary: Option<PathBuf>,
    registry_path: Option<PathBuf>,
    label: Option<String>,
) -> Result<()> {
    let spec = match (spec_path, topology) {
        (Some(path), _) => {
            let content = fs::read_to_string(&path)
                .wrap_err_with(|| format!("Failed to read spec file '{}'", path.display()))?;
            serde_yaml::from_str::<TopologySpec>(&content)
                .wrap_err_with(|| format!("Failed to parse spec file '{}'", path.display()))?
        }
        (None, Some(kind)) => TopologySpec::preset(kind, size),
        (None, None) => bail!("Either --topology or --spec is required"),
    };

    let graph = generate(&spec)?;
    info!(
        "Generated {} topology: {} nodes, {} edges",
        spec.kind(),
        graph.node_count(),
        graph.edge_count()
    );

    println!("{}", adjacency_view(&graph));

    let json = serde_json::to_string_pretty(&graph).context("Failed to serialize graph")?;
    fs::write(&output, json)
        .wrap_err_with(|| format!("Failed to write graph to '{}'", output.display()))?;
    info!("Graph written to {}", output.display());

    if let Some(summary_path) = summary {
        let report = analyze(&graph);
        write_text_summary(&graph, &report, &summary_path)?;
    }

    if let (Some(path), Some(label)) = (registry_path, label) {
        let mut registry = TopologyRegistry::load_or_default(&path)?;
        if registry.insert(&label, graph).is_some() {
            info!("Replaced existing registry entry '{label}'");
        }
        registry.save(&path)?;
    }

    Ok(())
}

fn run_analyze(input: &Path, json: Option<PathBuf>) -> Result<()> {
    let graph = load_graph(input)?;
    let report = analyze(&graph);

    println!("{}", render_text_summary(&graph, &report));

    if let Some(json_path) = json {
        write_json_report(&report, &json_path)?;
    }
    Ok(())
}

fn run_simulate(input: &Path, node: &str) -> Result<()> {
    let graph = load_graph(input)?;
    let report = simulate_node_failure(&graph, node)
        .wrap_err_with(|| format!("Failed to simulate failure of '{node}'"))?;

    println!("{}", render_failure_report(&report));
    Ok(())
}

fn run_compare(registry_path: &Path, criterion: RankingCriterion) -> Result<()> {
    let registry = TopologyRegistry::load_or_default(registry_path)?;
    if registry.is_empty() {
        bail!(
            "Registry '{}' holds no topologies; generate some with --registry first",
            registry_path.display()
        );
    }

    let entries = registry.entries();
    let report = compare(&entries, criterion);

    println!("{}", render_comparison(&report));
    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read graph from '{}'", path.display()))?;
    let graph: Graph = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse graph document '{}'", path.display()))?;
    Ok(graph)
}
