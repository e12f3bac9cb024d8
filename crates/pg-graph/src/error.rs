//! Graph-specific error types.

use pg_core::PgError;

/// Graph construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a node index.
    NodeOutOfRange { node: usize, len: usize },

    /// An edge joins a node to itself.
    SelfLoop { node: usize },

    /// Node labels are not strictly ascending at this position.
    UnsortedNodes { index: usize },

    /// A node label is not a residue of the graph's modulus.
    LabelOutOfRange { label: u64, modulus: u64 },

    /// A label is not an element of the graph's group.
    UnknownElement { label: u64, modulus: u64 },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NodeOutOfRange { node, len } => {
                write!(f, "Edge endpoint {} out of range ({} nodes)", node, len)
            }
            GraphError::SelfLoop { node } => {
                write!(f, "Self-loop on node {}", node)
            }
            GraphError::UnsortedNodes { index } => {
                write!(f, "Node labels not strictly ascending at index {}", index)
            }
            GraphError::LabelOutOfRange { label, modulus } => {
                write!(f, "Node label {} is not a residue mod {}", label, modulus)
            }
            GraphError::UnknownElement { label, modulus } => {
                write!(f, "{} is not a unit mod {}", label, modulus)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PgError {
    fn from(err: GraphError) -> Self {
        PgError::Invariant {
            what: err.to_string(),
        }
    }
}
