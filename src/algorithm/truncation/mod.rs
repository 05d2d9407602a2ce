mod component_filter;
mod component_truncation;
mod distance_truncation;
mod geo_truncation;
mod isolated_nodes;

pub use component_filter::ComponentFilter;
pub use component_truncation::{filter_components, largest_component};
pub use distance_truncation::truncate_graph_dist;
pub use geo_truncation::{truncate_graph_bbox, truncate_graph_polygon};
pub use isolated_nodes::remove_isolated_nodes;

use crate::model::{
    graph::{NodeId, SpatialGraph},
    NetclipError,
};
use std::collections::HashSet;

/// shared removal and repair stage behind the truncation operations: copy
/// the graph, delete the removal set with its incident edges, then unless
/// `retain_all` is set drop isolated nodes and keep only the largest weakly
/// connected component.
fn remove_and_repair(
    graph: &SpatialGraph,
    removal_set: &HashSet<NodeId>,
    retain_all: bool,
) -> Result<SpatialGraph, NetclipError> {
    let mut out = graph.clone();
    for node_id in removal_set.iter() {
        out.remove_node(node_id)?;
    }
    if retain_all {
        return Ok(out);
    }
    let connected = remove_isolated_nodes(&out)?;
    largest_component(&connected, false)
}
