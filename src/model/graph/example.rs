//! small example graphs used in documentation and unit tests.

use super::{EdgeData, NodeData, NodeId, SpatialGraph};
use crate::model::NetclipError;

/// builds a one-way corridor 1 -> 2 -> ... -> n+1 where edge i has the
/// provided length. node i sits at (i - 1, 0) so the corridor runs east
/// along the x axis.
pub fn corridor_graph(lengths: &[f64]) -> Result<SpatialGraph, NetclipError> {
    let mut graph = SpatialGraph::empty();
    for idx in 0..=lengths.len() {
        graph.add_node(NodeId(idx as i64 + 1), NodeData::new(idx as f64, 0.0))?;
    }
    for (idx, length) in lengths.iter().enumerate() {
        graph.add_edge(
            NodeId(idx as i64 + 1),
            NodeId(idx as i64 + 2),
            EdgeData::new(*length),
        )?;
    }
    Ok(graph)
}

/// builds a graph with two weakly connected components: a bidirectional
/// 4-node square around the origin (nodes 1-4) and a bidirectional 2-node
/// spur far to the northeast (nodes 5-6).
pub fn two_component_graph() -> Result<SpatialGraph, NetclipError> {
    let mut graph = SpatialGraph::empty();
    let square = [
        (NodeId(1), 0.0, 0.0),
        (NodeId(2), 1.0, 0.0),
        (NodeId(3), 1.0, 1.0),
        (NodeId(4), 0.0, 1.0),
    ];
    for (node_id, x, y) in square.iter() {
        graph.add_node(*node_id, NodeData::new(*x, *y))?;
    }
    graph.add_node(NodeId(5), NodeData::new(10.0, 10.0))?;
    graph.add_node(NodeId(6), NodeData::new(11.0, 10.0))?;
    let ring = [
        (NodeId(1), NodeId(2)),
        (NodeId(2), NodeId(3)),
        (NodeId(3), NodeId(4)),
        (NodeId(4), NodeId(1)),
        (NodeId(5), NodeId(6)),
    ];
    for (src, dst) in ring.iter() {
        graph.add_edge(*src, *dst, EdgeData::new(1.0))?;
        graph.add_edge(*dst, *src, EdgeData::new(1.0))?;
    }
    Ok(graph)
}
