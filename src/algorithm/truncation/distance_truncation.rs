use super::remove_and_repair;
use crate::{
    algorithm::shortest_path,
    model::{
        graph::{NodeId, SpatialGraph},
        NetclipError,
    },
};
use std::collections::HashSet;

/// returns a copy of the graph truncated to the nodes within `dist` of
/// `source_node`, where distance is the minimum cumulative `weight`
/// attribute along directed edges. nodes exactly at the threshold survive;
/// nodes unreachable from the source are removed. unless `retain_all` is
/// set, isolated nodes are then dropped and only the largest weakly
/// connected component is kept.
///
/// the input graph is never modified. fails when `source_node` is not in
/// the graph.
pub fn truncate_graph_dist(
    graph: &SpatialGraph,
    source_node: &NodeId,
    dist: f64,
    weight: &str,
    retain_all: bool,
) -> Result<SpatialGraph, NetclipError> {
    let lengths = shortest_path::weighted_lengths(graph, source_node, weight)?;

    // nodes beyond the threshold plus nodes the search never reached
    let removal_set: HashSet<NodeId> = graph
        .node_ids()
        .filter(|node_id| match lengths.get(node_id) {
            Some(length) => *length > dist,
            None => true,
        })
        .copied()
        .collect();

    let out = remove_and_repair(graph, &removal_set, retain_all)?;
    log::info!(
        "truncated graph to {}-weighted distance {} from node '{}' ({} -> {} nodes)",
        weight,
        dist,
        source_node,
        graph.n_nodes(),
        out.n_nodes()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::{example, EdgeData};

    #[test]
    fn test_boundary_node_is_retained() {
        // cumulative distances along the corridor: 0, 100, 150, 175
        let graph = example::corridor_graph(&[100.0, 50.0, 25.0]).unwrap();
        let before = graph.clone();
        let out = truncate_graph_dist(
            &graph,
            &NodeId(1),
            150.0,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        )
        .unwrap();
        assert_eq!(
            out.node_id_set(),
            HashSet::from([NodeId(1), NodeId(2), NodeId(3)]),
            "a node exactly at the threshold survives"
        );
        assert_eq!(out.n_edges(), 2);
        assert_eq!(graph, before, "input graph must not be modified");
    }

    #[test]
    fn test_node_just_beyond_threshold_is_removed() {
        let graph = example::corridor_graph(&[100.0, 50.0, 25.0]).unwrap();
        let out = truncate_graph_dist(
            &graph,
            &NodeId(1),
            149.9,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        )
        .unwrap();
        assert_eq!(out.node_id_set(), HashSet::from([NodeId(1), NodeId(2)]));
    }

    #[test]
    fn test_threshold_beyond_graph_extent_keeps_everything() {
        let graph = example::corridor_graph(&[100.0, 50.0, 25.0]).unwrap();
        let out = truncate_graph_dist(
            &graph,
            &NodeId(1),
            1000.0,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        )
        .unwrap();
        assert_eq!(out, graph);
    }

    #[test]
    fn test_unreachable_nodes_are_removed() {
        let graph = example::two_component_graph().unwrap();
        let out = truncate_graph_dist(
            &graph,
            &NodeId(1),
            100.0,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        )
        .unwrap();
        assert_eq!(
            out.node_id_set(),
            HashSet::from([NodeId(1), NodeId(2), NodeId(3), NodeId(4)]),
            "the disconnected spur is unreachable and must go"
        );
    }

    #[test]
    fn test_source_is_always_retained() {
        let graph = example::two_component_graph().unwrap();
        let out = truncate_graph_dist(
            &graph,
            &NodeId(1),
            0.0,
            EdgeData::LENGTH_ATTRIBUTE,
            true,
        )
        .unwrap();
        assert_eq!(out.node_id_set(), HashSet::from([NodeId(1)]));
    }

    #[test]
    fn test_repair_on_fully_isolated_result_fails() {
        // with dist 0 only the source survives, isolated. connectivity
        // repair then empties the graph, which is an error state.
        let graph = example::two_component_graph().unwrap();
        let result = truncate_graph_dist(
            &graph,
            &NodeId(1),
            0.0,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        );
        assert!(matches!(result, Err(NetclipError::EmptyGraph(_))));
    }

    #[test]
    fn test_missing_source_fails() {
        let graph = example::corridor_graph(&[10.0]).unwrap();
        let result = truncate_graph_dist(
            &graph,
            &NodeId(42),
            10.0,
            EdgeData::LENGTH_ATTRIBUTE,
            false,
        );
        assert!(matches!(result, Err(NetclipError::NodeNotFound(_))));
    }

    #[test]
    fn test_custom_weight_attribute() {
        let mut graph = example::corridor_graph(&[100.0, 100.0]).unwrap();
        // attach hop weights so the corridor measures 1.0 per edge
        for (src, dst) in [(1, 2), (2, 3)] {
            let mut edges = graph.get_edges(&NodeId(src), &NodeId(dst)).unwrap().clone();
            edges[0]
                .attributes
                .insert(String::from("hops"), serde_json::json![1.0]);
            graph
                .remove_edges_between(&NodeId(src), &NodeId(dst))
                .unwrap();
            graph.add_edge(NodeId(src), NodeId(dst), edges[0].clone()).unwrap();
        }
        let out = truncate_graph_dist(&graph, &NodeId(1), 1.0, "hops", false).unwrap();
        assert_eq!(out.node_id_set(), HashSet::from([NodeId(1), NodeId(2)]));
    }
}
