use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// caller-defined node identifier. netclip treats these as opaque labels and
/// never assigns or reorders them.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct NodeId(pub i64);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
