use geo::LineString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// a directed edge record. parallel edges between the same (origin,
/// destination) pair are stored as separate records and survive or are
/// removed together with their endpoints, never individually.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// spatial length of the edge, the default weight attribute for
    /// distance-bounded truncation
    pub length: f64,
    /// optional simplified geometry for the edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LineString>,
    /// opaque caller metadata, never inspected by truncation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Value>,
}

impl EdgeData {
    /// attribute name that resolves to the `length` field when measuring
    /// weighted network distances
    pub const LENGTH_ATTRIBUTE: &'static str = "length";

    /// weight applied to an edge that does not carry the requested attribute
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(length: f64) -> EdgeData {
        EdgeData {
            length,
            geometry: None,
            attributes: HashMap::new(),
        }
    }

    /// resolves a caller-named numeric weight attribute against this edge.
    /// the name "length" reads the length field directly; any other name is
    /// looked up in the metadata attributes, falling back to a weight of 1.0
    /// when the edge does not carry it.
    pub fn weight(&self, attribute: &str) -> f64 {
        if attribute == Self::LENGTH_ATTRIBUTE {
            self.length
        } else {
            self.attributes
                .get(attribute)
                .and_then(Value::as_f64)
                .unwrap_or(Self::DEFAULT_WEIGHT)
        }
    }
}
