use super::graph::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetclipError {
    #[error("node '{0}' not found in graph")]
    NodeNotFound(NodeId),
    #[error("found no graph nodes within the requested polygon")]
    EmptyTruncation,
    #[error("{0}")]
    EmptyGraph(String),
    #[error("negative weight {weight} on edge ({src})->({dst}) under attribute '{attribute}'")]
    NegativeWeight {
        src: NodeId,
        dst: NodeId,
        attribute: String,
        weight: f64,
    },
    #[error("attempting to insert node '{0}' which is already present in graph")]
    DuplicateNode(NodeId),
    #[error("attempting to add edge ({src})->({dst}) but node '{missing}' is not in graph")]
    MissingEndpoint {
        src: NodeId,
        dst: NodeId,
        missing: NodeId,
    },
    #[error("no edges between ({0}) and ({1}) in graph")]
    EdgesNotFound(NodeId, NodeId),
    #[error("invalid truncation configuration: {0}")]
    ConfigurationError(String),
    #[error("internal error: {0}")]
    InternalError(String),
}
