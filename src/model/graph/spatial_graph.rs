use super::{AdjacencyDirection, AdjacencyList, EdgeData, EdgesByOd, NodeData, NodeId, Nodes};
use crate::model::NetclipError;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// a directed multigraph of spatially located nodes. nodes are stored by id,
/// edges are stored in insertion order under their (origin, destination)
/// pair, and a bidirectional adjacency index supports constant-time
/// successor and predecessor lookups.
///
/// every mutation keeps the three indices consistent: an adjacency entry
/// exists exactly when at least one edge connects the pair, and every edge
/// endpoint is a stored node.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialGraph {
    nodes: Nodes,
    edges: EdgesByOd,
    adj: AdjacencyList,
}

impl SpatialGraph {
    pub fn empty() -> SpatialGraph {
        SpatialGraph {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            adj: HashMap::new(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// number of edge records, counting each parallel edge separately
    pub fn n_edges(&self) -> usize {
        self.edges.values().map(|multiedges| multiedges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// helper with error handling for node lookups
    pub fn get_node(&self, node_id: &NodeId) -> Result<&NodeData, NetclipError> {
        self.nodes
            .get(node_id)
            .ok_or(NetclipError::NodeNotFound(*node_id))
    }

    /// helper with error handling for edge lookups. the returned list holds
    /// every parallel edge from `src` to `dst` in insertion order.
    pub fn get_edges(&self, src: &NodeId, dst: &NodeId) -> Result<&Vec<EdgeData>, NetclipError> {
        self.edges
            .get(&(*src, *dst))
            .ok_or(NetclipError::EdgesNotFound(*src, *dst))
    }

    /// inserts a node, failing if the id is already present
    pub fn add_node(&mut self, node_id: NodeId, node: NodeData) -> Result<(), NetclipError> {
        if self.nodes.contains_key(&node_id) {
            return Err(NetclipError::DuplicateNode(node_id));
        }
        self.nodes.insert(node_id, node);
        Ok(())
    }

    /// appends a directed edge from `src` to `dst`, failing if either
    /// endpoint is not already a stored node. returns the multi-edge key of
    /// the new record, its position among the parallel edges of this pair.
    pub fn add_edge(
        &mut self,
        src: NodeId,
        dst: NodeId,
        edge: EdgeData,
    ) -> Result<usize, NetclipError> {
        for endpoint in [&src, &dst] {
            if !self.nodes.contains_key(endpoint) {
                return Err(NetclipError::MissingEndpoint {
                    src,
                    dst,
                    missing: *endpoint,
                });
            }
        }
        let multiedges = self.edges.entry((src, dst)).or_default();
        multiedges.push(edge);
        let key = multiedges.len() - 1;
        self.adj
            .entry((src, AdjacencyDirection::Forward))
            .or_default()
            .insert(dst);
        self.adj
            .entry((dst, AdjacencyDirection::Reverse))
            .or_default()
            .insert(src);
        Ok(key)
    }

    /// removes every parallel edge from `src` to `dst` along with the
    /// adjacency entries that described them, returning the number of edge
    /// records removed.
    pub fn remove_edges_between(
        &mut self,
        src: &NodeId,
        dst: &NodeId,
    ) -> Result<usize, NetclipError> {
        let removed = self
            .edges
            .remove(&(*src, *dst))
            .ok_or(NetclipError::EdgesNotFound(*src, *dst))?;
        self.detach_adjacency(src, AdjacencyDirection::Forward, dst);
        self.detach_adjacency(dst, AdjacencyDirection::Reverse, src);
        Ok(removed.len())
    }

    /// removes a node and cascades removal of every incident edge in both
    /// directions, including self-loops, so no dangling references remain.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Result<(), NetclipError> {
        if !self.nodes.contains_key(node_id) {
            return Err(NetclipError::NodeNotFound(*node_id));
        }
        let successors: Vec<NodeId> = self
            .neighbors(node_id, AdjacencyDirection::Forward)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default();
        for dst in successors.iter() {
            self.remove_edges_between(node_id, dst)?;
        }
        // read predecessors after forward removal so a self-loop, already
        // gone by now, is not removed twice
        let predecessors: Vec<NodeId> = self
            .neighbors(node_id, AdjacencyDirection::Reverse)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default();
        for src in predecessors.iter() {
            self.remove_edges_between(src, node_id)?;
        }
        self.nodes.remove(node_id);
        Ok(())
    }

    /// neighbors of a node in one adjacency direction, if any are recorded
    pub fn neighbors(
        &self,
        node_id: &NodeId,
        direction: AdjacencyDirection,
    ) -> Option<&HashSet<NodeId>> {
        self.adj.get(&(*node_id, direction))
    }

    /// successors of a node (targets of its outgoing edges)
    pub fn out_neighbors(&self, node_id: &NodeId) -> Option<&HashSet<NodeId>> {
        self.neighbors(node_id, AdjacencyDirection::Forward)
    }

    /// predecessors of a node (sources of its incoming edges)
    pub fn in_neighbors(&self, node_id: &NodeId) -> Option<&HashSet<NodeId>> {
        self.neighbors(node_id, AdjacencyDirection::Reverse)
    }

    /// union of successors and predecessors, the undirected neighborhood
    pub fn node_neighbors(&self, node_id: &NodeId) -> Option<HashSet<NodeId>> {
        match (self.out_neighbors(node_id), self.in_neighbors(node_id)) {
            (None, None) => None,
            (out_adj, in_adj) => {
                let mut neighbors: HashSet<NodeId> = HashSet::new();
                if let Some(successors) = out_adj {
                    neighbors.extend(successors);
                }
                if let Some(predecessors) = in_adj {
                    neighbors.extend(predecessors);
                }
                Some(neighbors)
            }
        }
    }

    /// number of incident edge records, incoming plus outgoing. a self-loop
    /// contributes two.
    pub fn node_degree(&self, node_id: &NodeId) -> usize {
        let out_degree: usize = self
            .out_neighbors(node_id)
            .map(|successors| {
                successors
                    .iter()
                    .filter_map(|dst| self.edges.get(&(*node_id, *dst)))
                    .map(|multiedges| multiedges.len())
                    .sum()
            })
            .unwrap_or_default();
        let in_degree: usize = self
            .in_neighbors(node_id)
            .map(|predecessors| {
                predecessors
                    .iter()
                    .filter_map(|src| self.edges.get(&(*src, *node_id)))
                    .map(|multiedges| multiedges.len())
                    .sum()
            })
            .unwrap_or_default();
        out_degree + in_degree
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    pub fn node_id_set(&self) -> HashSet<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn node_iterator(&self) -> impl Iterator<Item = (&NodeId, &NodeData)> {
        self.nodes.iter()
    }

    /// iterates every edge record as (origin, destination, multi-edge key,
    /// edge data)
    pub fn edge_iterator(&self) -> impl Iterator<Item = (NodeId, NodeId, usize, &EdgeData)> {
        self.edges.iter().flat_map(|((src, dst), multiedges)| {
            let (src, dst) = (*src, *dst);
            multiedges
                .iter()
                .enumerate()
                .map(move |(key, edge)| (src, dst, key, edge))
        })
    }

    /// point geometries for every node, keyed by node id
    pub fn node_points(&self) -> HashMap<NodeId, Point> {
        self.nodes
            .iter()
            .map(|(node_id, node)| (*node_id, node.get_point()))
            .collect()
    }

    /// builds the induced subgraph over `keep`: the retained nodes plus
    /// every edge whose endpoints are both retained. the result shares no
    /// structure with this graph.
    pub fn subgraph(&self, keep: &HashSet<NodeId>) -> SpatialGraph {
        let mut out = SpatialGraph::empty();
        for (node_id, node) in self.nodes.iter() {
            if keep.contains(node_id) {
                out.nodes.insert(*node_id, node.clone());
            }
        }
        for ((src, dst), multiedges) in self.edges.iter() {
            if keep.contains(src) && keep.contains(dst) {
                out.edges.insert((*src, *dst), multiedges.clone());
                out.adj
                    .entry((*src, AdjacencyDirection::Forward))
                    .or_default()
                    .insert(*dst);
                out.adj
                    .entry((*dst, AdjacencyDirection::Reverse))
                    .or_default()
                    .insert(*src);
            }
        }
        out
    }

    /// drops `neighbor` from the (node, direction) adjacency set, clearing
    /// the entry entirely once the set is empty so that adjacency entries
    /// exist only for connected pairs.
    fn detach_adjacency(
        &mut self,
        node_id: &NodeId,
        direction: AdjacencyDirection,
        neighbor: &NodeId,
    ) {
        if let Some(neighbors) = self.adj.get_mut(&(*node_id, direction)) {
            neighbors.remove(neighbor);
            if neighbors.is_empty() {
                self.adj.remove(&(*node_id, direction));
            }
        }
    }
}
