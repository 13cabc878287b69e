//! Named topology registry.
//!
//! A registry is an explicit `label -> Graph` store owned by the CLI
//! layer and passed by reference into the engine (the comparator takes a
//! plain sequence, never a hidden global). Registries persist as JSON
//! maps of label to graph document, re-validated on load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Store of named topologies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologyRegistry {
    topologies: HashMap<String, Graph>,
}

impl TopologyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a topology under a label, returning the previous graph if
    /// the label was already taken
    pub fn insert(&mut self, label: &str, graph: Graph) -> Option<Graph> {
        self.topologies.insert(label.to_string(), graph)
    }

    /// Look up a topology by label
    pub fn get(&self, label: &str) -> Option<&Graph> {
        self.topologies.get(label)
    }

    /// Remove a topology by label
    pub fn remove(&mut self, label: &str) -> Option<Graph> {
        self.topologies.remove(label)
    }

    /// Number of stored topologies
    pub fn len(&self) -> usize {
        self.topologies.len()
    }

    /// Whether the registry holds no topologies
    pub fn is_empty(&self) -> bool {
        self.topologies.is_empty()
    }

    /// All labels, sorted
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.topologies.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Labeled topologies in label order, the shape the comparator takes
    pub fn entries(&self) -> Vec<(String, Graph)> {
        self.labels()
            .into_iter()
            .filter_map(|label| {
                self.topologies
                    .get(&label)
                    .map(|graph| (label.clone(), graph.clone()))
            })
            .collect()
    }

    /// Load a registry from a JSON file, or return an empty one if the
    /// file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry from {}", path.display()))?;
        let registry: TopologyRegistry = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse registry {}", path.display()))?;
        Ok(registry)
    }

    /// Save the registry as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize topology registry")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write registry to {}", path.display()))?;

        log::info!(
            "Registry with {} topologies written to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }
}
