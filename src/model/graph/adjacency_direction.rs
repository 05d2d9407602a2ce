use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// key discriminant for the adjacency index. each edge (u, v) is recorded
/// under (u, Forward) and (v, Reverse) so that successor and predecessor
/// lookups are both constant-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyDirection {
    Forward,
    Reverse,
}

impl Display for AdjacencyDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjacencyDirection::Forward => write!(f, "forward"),
            AdjacencyDirection::Reverse => write!(f, "reverse"),
        }
    }
}
