use crate::model::{
    graph::{NodeId, SpatialGraph},
    NetclipError,
};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// computes the minimum cumulative edge weight from `source` to every node
/// reachable along directed edges, via dijkstra's algorithm. nodes the
/// search never reaches are absent from the result. where parallel edges
/// connect a pair, the cheapest one is used.
///
/// fails if `source` is not in the graph or if any traversed edge carries a
/// negative weight under the requested attribute.
pub fn weighted_lengths(
    graph: &SpatialGraph,
    source: &NodeId,
    weight: &str,
) -> Result<HashMap<NodeId, f64>, NetclipError> {
    if !graph.contains_node(source) {
        return Err(NetclipError::NodeNotFound(*source));
    }

    let mut lengths: HashMap<NodeId, f64> = HashMap::new();
    let mut frontier: BinaryHeap<FrontierElement> = BinaryHeap::new();
    frontier.push(FrontierElement::new(*source, 0.0));

    while let Some(next) = frontier.pop() {
        if lengths.contains_key(&next.node_id) {
            continue;
        }
        lengths.insert(next.node_id, next.cost);

        for dst in graph.out_neighbors(&next.node_id).into_iter().flatten() {
            if lengths.contains_key(dst) {
                continue;
            }
            let edge_weight = min_edge_weight(graph, &next.node_id, dst, weight)?;
            frontier.push(FrontierElement::new(*dst, next.cost + edge_weight));
        }
    }

    Ok(lengths)
}

/// cheapest weight among the parallel edges from `src` to `dst`
fn min_edge_weight(
    graph: &SpatialGraph,
    src: &NodeId,
    dst: &NodeId,
    attribute: &str,
) -> Result<f64, NetclipError> {
    let mut best: Option<f64> = None;
    for edge in graph.get_edges(src, dst)?.iter() {
        let edge_weight = edge.weight(attribute);
        if edge_weight < 0.0 {
            return Err(NetclipError::NegativeWeight {
                src: *src,
                dst: *dst,
                attribute: String::from(attribute),
                weight: edge_weight,
            });
        }
        match best {
            Some(current) if current <= edge_weight => {}
            _ => best = Some(edge_weight),
        }
    }
    best.ok_or_else(|| {
        NetclipError::InternalError(format!(
            "adjacency ({src})->({dst}) has an empty edge set"
        ))
    })
}

/// search frontier entry ordered so that a binary heap, natively a max-heap,
/// pops the cheapest entry first. ties break on node id for run-to-run
/// determinism.
#[derive(Clone, PartialEq)]
struct FrontierElement {
    node_id: NodeId,
    cost: f64,
}

impl FrontierElement {
    fn new(node_id: NodeId, cost: f64) -> FrontierElement {
        FrontierElement { node_id, cost }
    }
}

impl Eq for FrontierElement {}

impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
