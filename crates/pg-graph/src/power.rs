//! Power graph construction over a unit group.

use pg_core::PgResult;
use pg_group::ModularGroup;
use rayon::prelude::*;

use crate::builder::GraphBuilder;
use crate::graph::PowerGraph;

/// Build the power graph of `group`, checking candidate pairs in parallel.
///
/// Nodes are the group elements; `{u, v}` is an edge iff one is a positive
/// power of the other. Rows are merged in index order, so the result is
/// identical to [`build_power_graph_sequential`].
pub fn build_power_graph(group: &ModularGroup) -> PgResult<PowerGraph> {
    let n = group.order();
    let rows = (0..n)
        .into_par_iter()
        .map(|i| row_edges(group, i))
        .collect::<PgResult<Vec<_>>>()?;
    finish(group, rows.into_iter().flatten())
}

/// Build the power graph of `group` on the calling thread.
pub fn build_power_graph_sequential(group: &ModularGroup) -> PgResult<PowerGraph> {
    let n = group.order();
    let rows = (0..n)
        .map(|i| row_edges(group, i))
        .collect::<PgResult<Vec<_>>>()?;
    finish(group, rows.into_iter().flatten())
}

/// Edges `(i, j)` with `j > i` incident to node `i`.
fn row_edges(group: &ModularGroup, i: usize) -> PgResult<Vec<(usize, usize)>> {
    let els = group.elements();
    let u = els[i];
    let mut edges = Vec::new();
    for (j, &v) in els.iter().enumerate().skip(i + 1) {
        if group.is_power(u, v)? || group.is_power(v, u)? {
            edges.push((i, j));
        }
    }
    Ok(edges)
}

fn finish(
    group: &ModularGroup,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> PgResult<PowerGraph> {
    let mut builder = GraphBuilder::new(group.modulus(), group.elements().to_vec());
    builder.extend_edges(edges);
    let graph = builder.build()?;
    tracing::debug!(
        modulus = group.modulus(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built power graph"
    );
    Ok(graph)
}
