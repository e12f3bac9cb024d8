//! Core graph data structure.

/// An undirected simple graph whose nodes are residues modulo `modulus`.
///
/// The graph stores:
/// - Node labels (group elements) in ascending order; node `i` is `nodes[i]`.
/// - Compact adjacency: each undirected edge appears in both endpoints' lists.
///
/// Built only through `GraphBuilder`, so adjacency is always symmetric,
/// sorted and free of self-loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerGraph {
    pub(crate) modulus: u64,
    pub(crate) nodes: Vec<u64>,

    /// Offsets into `adjacency`: node i's neighbours are in adjacency[offsets[i]..offsets[i+1]].
    pub(crate) offsets: Vec<usize>,

    /// Flat neighbour list (node indices, sorted per node).
    pub(crate) adjacency: Vec<usize>,
}

impl PowerGraph {
    /// Modulus the node labels are residues of.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Node labels in index order.
    pub fn nodes(&self) -> &[u64] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.len() / 2
    }

    /// Neighbour indices of node `i` (empty if out of bounds).
    pub fn neighbors(&self, i: usize) -> &[usize] {
        if i >= self.nodes.len() {
            return &[];
        }
        &self.adjacency[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Degree of node `i` (0 if out of bounds).
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).len()
    }

    /// Degrees of all nodes in index order.
    pub fn degrees(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Index of the node labelled `label`.
    pub fn index_of(&self, label: u64) -> Option<usize> {
        self.nodes.binary_search(&label).ok()
    }

    /// Whether the nodes labelled `u` and `v` are adjacent.
    pub fn has_edge(&self, u: u64, v: u64) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(i), Some(j)) => self.neighbors(i).binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// Undirected edges as label pairs `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        (0..self.nodes.len()).flat_map(move |i| {
            self.neighbors(i)
                .iter()
                .filter(move |&&j| j > i)
                .map(move |&j| (self.nodes[i], self.nodes[j]))
        })
    }
}
