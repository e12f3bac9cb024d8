//! pg-graph: power graph layer for powergraph.
//!
//! Provides:
//! - Undirected graph storage with compact adjacency (`PowerGraph`)
//! - Incremental graph builder with validation
//! - Stable label <-> node index mapping
//! - Power graph construction over a unit group
//!
//! # Example
//!
//! ```
//! use pg_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new(4, vec![1, 3]);
//! builder.add_edge(0, 1);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert!(graph.has_edge(1, 3));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod power;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::PowerGraph;
pub use indexing::IndexMap;
pub use power::{build_power_graph, build_power_graph_sequential};
