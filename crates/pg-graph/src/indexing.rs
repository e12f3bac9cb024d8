//! Stable indexing between group elements and node indices.
//!
//! Provides bidirectional mappings between element labels (residues) and
//! contiguous node indices (0..N) of a `PowerGraph`.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::PowerGraph;

/// Index map providing O(1) lookup between labels and node indices.
///
/// Labels can be as large as the modulus, so the reverse lookup is hashed
/// rather than a dense vector.
#[derive(Debug, Clone)]
pub struct IndexMap {
    modulus: u64,

    /// Contiguous list of labels (index -> label).
    labels: Vec<u64>,

    /// Reverse lookup: label -> index.
    label_to_idx: HashMap<u64, usize>,
}

impl IndexMap {
    /// Build an index map from a graph.
    pub fn from_graph(graph: &PowerGraph) -> Self {
        let labels = graph.nodes().to_vec();
        let label_to_idx = labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();
        Self {
            modulus: graph.modulus(),
            labels,
            label_to_idx,
        }
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Whether `label` is a node of the graph.
    pub fn contains(&self, label: u64) -> bool {
        self.label_to_idx.contains_key(&label)
    }

    /// Get the node index for a group element.
    pub fn node_idx(&self, label: u64) -> Result<usize, GraphError> {
        self.label_to_idx
            .get(&label)
            .copied()
            .ok_or(GraphError::UnknownElement {
                label,
                modulus: self.modulus,
            })
    }

    /// Get the label for a node index (panics if out of bounds).
    pub fn label(&self, i: usize) -> u64 {
        self.labels[i]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[u64] {
        &self.labels
    }
}
