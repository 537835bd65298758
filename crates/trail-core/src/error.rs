use crate::id::{EdgeId, NodeId};
use crate::path::EdgePoint;
use thiserror::Error;

/// Errors raised while building or querying a `TrailNetwork`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network has no trails")]
    Empty,

    #[error("duplicate junction id {0}")]
    DuplicateNode(NodeId),

    #[error("duplicate trail id {0}")]
    DuplicateEdge(EdgeId),

    #[error("trail {edge} references unknown junction {node}")]
    UnknownNode { edge: EdgeId, node: NodeId },

    #[error("unknown trail {0}")]
    UnknownEdge(EdgeId),

    #[error("non-finite coordinate on {0}")]
    NonFinite(String),

    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: EdgePoint, to: EdgePoint },

    #[error("invalid closest-point mesh cell size {0}")]
    InvalidMesh(f64),

    #[error("malformed network data: {0}")]
    Json(#[from] serde_json::Error),
}
