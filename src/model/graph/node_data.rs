use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// a graph node: a planar point location plus caller-defined metadata that is
/// carried through every truncation operation unchanged.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub x: f64,
    pub y: f64,
    /// opaque caller metadata, never inspected by truncation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Value>,
}

impl NodeData {
    pub fn new(x: f64, y: f64) -> NodeData {
        NodeData {
            x,
            y,
            attributes: HashMap::new(),
        }
    }

    /// helper to extract this node location as a geo point
    pub fn get_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
