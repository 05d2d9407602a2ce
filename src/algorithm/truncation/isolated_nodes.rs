use crate::model::{graph::SpatialGraph, NetclipError};
use itertools::Itertools;

/// returns a copy of the graph without its isolated nodes, those with no
/// incident edges in either direction. self-loops count as incident, so a
/// node whose only edge is a self-loop survives. applying this twice gives
/// the same result as applying it once.
pub fn remove_isolated_nodes(graph: &SpatialGraph) -> Result<SpatialGraph, NetclipError> {
    let isolated = graph
        .node_ids()
        .filter(|node_id| graph.node_degree(node_id) < 1)
        .copied()
        .collect_vec();

    let mut out = graph.clone();
    for node_id in isolated.iter() {
        out.remove_node(node_id)?;
    }
    log::info!("removed {} isolated nodes from graph", isolated.len());
    Ok(out)
}
