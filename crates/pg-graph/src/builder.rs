//! Incremental graph builder.

use pg_core::PgResult;

use crate::graph::PowerGraph;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Nodes are fixed up front (labels must be strictly ascending residues of
/// the modulus). Use `add_edge` to connect them by index, then call `build()`
/// to validate and freeze the result into an immutable `PowerGraph`.
/// Duplicate edges, in either orientation, collapse into one.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    modulus: u64,
    nodes: Vec<u64>,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a builder over the given node labels.
    pub fn new(modulus: u64, nodes: Vec<u64>) -> Self {
        Self {
            modulus,
            nodes,
            edges: Vec::new(),
        }
    }

    /// Number of nodes the graph will have.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add an undirected edge between node indices `a` and `b`.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.push((a, b));
    }

    /// Add many undirected edges at once.
    pub fn extend_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        self.edges.extend(edges);
    }

    /// Build and validate the graph, returning an immutable `PowerGraph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> PgResult<PowerGraph> {
        // First validate the structure
        validate::validate_nodes(self.modulus, &self.nodes)?;
        validate::validate_edges(self.nodes.len(), &self.edges)?;

        let (offsets, adjacency) = Self::build_adjacency(self.nodes.len(), &self.edges);

        // Validate adjacency consistency
        validate::validate_adjacency(&offsets, &adjacency)?;

        Ok(PowerGraph {
            modulus: self.modulus,
            nodes: self.nodes,
            offsets,
            adjacency,
        })
    }

    /// Build compact adjacency lists: each edge lands in both endpoints' lists.
    fn build_adjacency(node_count: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            lists[a].push(b);
            lists[b].push(a);
        }

        // Sort each list for determinism and drop duplicate edges
        for list in &mut lists {
            list.sort_unstable();
            list.dedup();
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut flat = Vec::new();
        offsets.push(0);
        for list in &lists {
            flat.extend_from_slice(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new(5, vec![1, 2, 3, 4]);
        builder.add_edge(0, 1);
        builder.extend_edges([(0, 2), (0, 3)]);

        assert_eq!(builder.node_count(), 4);
        assert_eq!(builder.edges.len(), 3);
    }

    #[test]
    fn builder_collapses_duplicates() {
        let mut builder = GraphBuilder::new(5, vec![1, 2, 3, 4]);
        builder.add_edge(0, 1);
        builder.add_edge(1, 0);
        builder.add_edge(0, 1);
        let graph = builder.build().unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degrees(), vec![1, 1, 0, 0]);
    }

    #[test]
    fn builder_keeps_isolated_nodes() {
        let graph = GraphBuilder::new(2, vec![1]).build().unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degrees(), vec![0]);
    }

    #[test]
    fn builder_rejects_self_loop() {
        let mut builder = GraphBuilder::new(5, vec![1, 2]);
        builder.add_edge(1, 1);
        assert!(builder.build().is_err());
    }

    #[test]
    fn builder_rejects_dangling_edge() {
        let mut builder = GraphBuilder::new(5, vec![1, 2]);
        builder.add_edge(0, 7);
        assert!(builder.build().is_err());
    }

    #[test]
    fn empty_graph() {
        let graph = GraphBuilder::default().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.degrees().is_empty());
    }
}
