//! Graph validation logic.

use pg_core::{PgError, PgResult};

use crate::error::GraphError;

/// Validate node labels: residues of `modulus`, strictly ascending.
pub(crate) fn validate_nodes(modulus: u64, nodes: &[u64]) -> PgResult<()> {
    for (i, &label) in nodes.iter().enumerate() {
        if label >= modulus {
            return Err(GraphError::LabelOutOfRange { label, modulus }.into());
        }
        if i > 0 && nodes[i - 1] >= label {
            return Err(GraphError::UnsortedNodes { index: i }.into());
        }
    }
    Ok(())
}

/// Validate edges: endpoints exist, no self-loops.
pub(crate) fn validate_edges(node_count: usize, edges: &[(usize, usize)]) -> PgResult<()> {
    for &(a, b) in edges {
        for node in [a, b] {
            if node >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    len: node_count,
                }
                .into());
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop { node: a }.into());
        }
    }
    Ok(())
}

/// Validate compact adjacency: symmetric, sorted, no duplicates.
pub(crate) fn validate_adjacency(offsets: &[usize], adjacency: &[usize]) -> PgResult<()> {
    let node_count = offsets.len().saturating_sub(1);

    for i in 0..node_count {
        let list = neighbors(offsets, adjacency, i);
        if list.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PgError::Invariant {
                what: format!("adjacency of node {i} is not sorted and unique"),
            });
        }
        for &j in list {
            if j >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    node: j,
                    len: node_count,
                }
                .into());
            }
            if j == i {
                return Err(GraphError::SelfLoop { node: i }.into());
            }
            if neighbors(offsets, adjacency, j).binary_search(&i).is_err() {
                return Err(PgError::Invariant {
                    what: format!("edge {i}-{j} missing its reverse"),
                });
            }
        }
    }
    Ok(())
}

fn neighbors<'a>(offsets: &[usize], adjacency: &'a [usize], i: usize) -> &'a [usize] {
    &adjacency[offsets[i]..offsets[i + 1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_empty_graph() {
        assert!(validate_nodes(2, &[]).is_ok());
        assert!(validate_edges(0, &[]).is_ok());
        assert!(validate_adjacency(&[0], &[]).is_ok());
    }

    #[test]
    fn validate_unsorted_nodes() {
        let err = validate_nodes(9, &[1, 4, 2]).unwrap_err();
        assert!(matches!(err, PgError::Invariant { .. }));
        assert!(validate_nodes(9, &[1, 1]).is_err());
        assert!(validate_nodes(9, &[1, 9]).is_err());
    }

    #[test]
    fn validate_bad_edges() {
        assert!(validate_edges(2, &[(0, 2)]).is_err());
        assert!(validate_edges(2, &[(1, 1)]).is_err());
        assert!(validate_edges(2, &[(1, 0)]).is_ok());
    }

    #[test]
    fn validate_asymmetric_adjacency() {
        // node 0 lists 1, node 1 lists nothing
        assert!(validate_adjacency(&[0, 1, 1], &[1]).is_err());
        assert!(validate_adjacency(&[0, 1, 2], &[1, 0]).is_ok());
    }
}
