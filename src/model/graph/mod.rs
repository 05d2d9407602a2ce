mod adjacency_direction;
mod edge_data;
pub mod example;
mod node_data;
mod node_id;
mod spatial_graph;

pub use adjacency_direction::AdjacencyDirection;
pub use edge_data::EdgeData;
pub use node_data::NodeData;
pub use node_id::NodeId;
pub use spatial_graph::SpatialGraph;

use std::collections::{HashMap, HashSet};

pub type Nodes = HashMap<NodeId, NodeData>;
pub type EdgesByOd = HashMap<(NodeId, NodeId), Vec<EdgeData>>;
pub type AdjacencyList = HashMap<(NodeId, AdjacencyDirection), HashSet<NodeId>>;
