use crate::model::{
    graph::{AdjacencyDirection, NodeId, SpatialGraph},
    NetclipError,
};
use itertools::Itertools;
use std::collections::{HashSet, VecDeque};

/// enumerates the weakly connected components of the graph, each as a set of
/// node ids. components appear in ascending order of their smallest node id
/// so repeated runs enumerate identically.
pub fn weakly_connected_components(graph: &SpatialGraph) -> Vec<HashSet<NodeId>> {
    let mut components: Vec<HashSet<NodeId>> = vec![];
    let mut assigned: HashSet<NodeId> = HashSet::new();
    for node_id in graph.node_ids().sorted() {
        if assigned.contains(node_id) {
            continue;
        }
        let component = undirected_reach(graph, *node_id);
        assigned.extend(component.iter().copied());
        components.push(component);
    }
    components
}

/// enumerates the strongly connected components of the graph via kosaraju's
/// two-pass algorithm: a forward depth-first pass records finish order, then
/// reverse reachability in decreasing finish order peels off one component
/// at a time.
pub fn strongly_connected_components(graph: &SpatialGraph) -> Vec<HashSet<NodeId>> {
    let mut finish_order: Vec<NodeId> = Vec::with_capacity(graph.n_nodes());
    let mut visited: HashSet<NodeId> = HashSet::new();
    for seed in graph.node_ids().sorted() {
        if visited.contains(seed) {
            continue;
        }
        // explicit stack with an expansion flag so nodes are emitted in
        // post-order without recursion
        let mut stack: Vec<(NodeId, bool)> = vec![(*seed, false)];
        while let Some((node_id, expanded)) = stack.pop() {
            if expanded {
                finish_order.push(node_id);
                continue;
            }
            if !visited.insert(node_id) {
                continue;
            }
            stack.push((node_id, true));
            // sorted for deterministic finish order across runs
            for dst in graph.out_neighbors(&node_id).into_iter().flatten().sorted() {
                if !visited.contains(dst) {
                    stack.push((*dst, false));
                }
            }
        }
    }

    let mut components: Vec<HashSet<NodeId>> = vec![];
    let mut assigned: HashSet<NodeId> = HashSet::new();
    for node_id in finish_order.into_iter().rev() {
        if assigned.contains(&node_id) {
            continue;
        }
        let mut component: HashSet<NodeId> = HashSet::new();
        let mut frontier: VecDeque<NodeId> = VecDeque::from([node_id]);
        while let Some(next_id) = frontier.pop_front() {
            if assigned.contains(&next_id) || !component.insert(next_id) {
                continue;
            }
            for src in graph.in_neighbors(&next_id).into_iter().flatten() {
                if !assigned.contains(src) && !component.contains(src) {
                    frontier.push_back(*src);
                }
            }
        }
        assigned.extend(component.iter().copied());
        components.push(component);
    }
    components
}

/// true when every node can reach every other node ignoring edge direction.
/// fails on an empty graph, where connectivity is undefined.
pub fn is_weakly_connected(graph: &SpatialGraph) -> Result<bool, NetclipError> {
    let seed = any_node(graph)?;
    Ok(undirected_reach(graph, seed).len() == graph.n_nodes())
}

/// true when every node can reach every other node along directed edges.
/// fails on an empty graph, where connectivity is undefined.
pub fn is_strongly_connected(graph: &SpatialGraph) -> Result<bool, NetclipError> {
    let seed = any_node(graph)?;
    let forward = directed_reach(graph, seed, AdjacencyDirection::Forward);
    if forward.len() != graph.n_nodes() {
        return Ok(false);
    }
    let reverse = directed_reach(graph, seed, AdjacencyDirection::Reverse);
    Ok(reverse.len() == graph.n_nodes())
}

/// breadth-first reachable set from `src` treating every edge as
/// bidirectional
fn undirected_reach(graph: &SpatialGraph, src: NodeId) -> HashSet<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier: VecDeque<NodeId> = VecDeque::from([src]);
    while let Some(next_id) = frontier.pop_front() {
        if !visited.insert(next_id) {
            continue;
        }
        for neighbor in graph
            .node_neighbors(&next_id)
            .unwrap_or_default()
            .into_iter()
        {
            if !visited.contains(&neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }
    visited
}

/// breadth-first reachable set from `src` following only the given
/// adjacency direction
fn directed_reach(
    graph: &SpatialGraph,
    src: NodeId,
    direction: AdjacencyDirection,
) -> HashSet<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier: VecDeque<NodeId> = VecDeque::from([src]);
    while let Some(next_id) = frontier.pop_front() {
        if !visited.insert(next_id) {
            continue;
        }
        for neighbor in graph.neighbors(&next_id, direction).into_iter().flatten() {
            if !visited.contains(neighbor) {
                frontier.push_back(*neighbor);
            }
        }
    }
    visited
}

fn any_node(graph: &SpatialGraph) -> Result<NodeId, NetclipError> {
    graph.node_ids().next().copied().ok_or_else(|| {
        NetclipError::EmptyGraph(String::from(
            "connectivity is undefined for a graph with no nodes",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::{example, EdgeData, NodeData};

    /// directed cycle 1 -> 2 -> 3 -> 1 with a tail edge 3 -> 4
    fn cycle_with_tail() -> SpatialGraph {
        let mut graph = SpatialGraph::empty();
        for (idx, x) in [0.0, 1.0, 0.5, 2.0].iter().enumerate() {
            graph
                .add_node(NodeId(idx as i64 + 1), NodeData::new(*x, 0.0))
                .unwrap();
        }
        for (src, dst) in [(1, 2), (2, 3), (3, 1), (3, 4)] {
            graph
                .add_edge(NodeId(src), NodeId(dst), EdgeData::new(1.0))
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_weak_components_two_clusters() {
        let graph = example::two_component_graph().unwrap();
        let components = weakly_connected_components(&graph);
        assert_eq!(components.len(), 2);
        assert_eq!(
            components[0],
            HashSet::from([NodeId(1), NodeId(2), NodeId(3), NodeId(4)])
        );
        assert_eq!(components[1], HashSet::from([NodeId(5), NodeId(6)]));
    }

    #[test]
    fn test_weak_components_ignore_direction() {
        // one-way corridor is still a single weak component
        let graph = example::corridor_graph(&[1.0, 1.0, 1.0]).unwrap();
        let components = weakly_connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 4);
    }

    #[test]
    fn test_strong_components_cycle_plus_tail() {
        let graph = cycle_with_tail();
        let components = strongly_connected_components(&graph);
        assert_eq!(components.len(), 2);
        let cycle = components
            .iter()
            .find(|c| c.len() == 3)
            .expect("expected a 3-node strong component");
        assert_eq!(cycle, &HashSet::from([NodeId(1), NodeId(2), NodeId(3)]));
        let tail = components
            .iter()
            .find(|c| c.len() == 1)
            .expect("expected a singleton strong component");
        assert_eq!(tail, &HashSet::from([NodeId(4)]));
    }

    #[test]
    fn test_strong_components_of_one_way_corridor_are_singletons() {
        let graph = example::corridor_graph(&[1.0, 1.0]).unwrap();
        let components = strongly_connected_components(&graph);
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_components_partition_the_node_set() {
        let graph = example::two_component_graph().unwrap();
        for components in [
            weakly_connected_components(&graph),
            strongly_connected_components(&graph),
        ] {
            let mut seen: HashSet<NodeId> = HashSet::new();
            for component in components.iter() {
                for node_id in component.iter() {
                    assert!(seen.insert(*node_id), "node {} assigned twice", node_id);
                }
            }
            assert_eq!(seen, graph.node_id_set());
        }
    }

    #[test]
    fn test_is_weakly_but_not_strongly_connected() {
        let graph = example::corridor_graph(&[1.0]).unwrap();
        assert!(is_weakly_connected(&graph).unwrap());
        assert!(!is_strongly_connected(&graph).unwrap());
    }

    #[test]
    fn test_cycle_is_strongly_connected() {
        let mut graph = cycle_with_tail();
        graph.remove_node(&NodeId(4)).unwrap();
        assert!(is_strongly_connected(&graph).unwrap());
    }

    #[test]
    fn test_connectivity_of_empty_graph_fails() {
        let graph = SpatialGraph::empty();
        assert!(matches!(
            is_weakly_connected(&graph),
            Err(NetclipError::EmptyGraph(_))
        ));
        assert!(matches!(
            is_strongly_connected(&graph),
            Err(NetclipError::EmptyGraph(_))
        ));
    }

    #[test]
    fn test_single_node_is_connected_both_ways() {
        let mut graph = SpatialGraph::empty();
        graph.add_node(NodeId(1), NodeData::new(0.0, 0.0)).unwrap();
        assert!(is_weakly_connected(&graph).unwrap());
        assert!(is_strongly_connected(&graph).unwrap());
    }
}
