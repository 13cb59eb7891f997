use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid node descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("Node {0} not found")]
    NodeNotFound(Uuid),
    #[error("Connection {0} not found")]
    ConnectionNotFound(Uuid),
}

impl GraphError {
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        GraphError::InvalidDescriptor(msg.into())
    }
}

/// Why a pin-to-pin gesture did not produce a connection.
///
/// Never surfaced to the user; the pending draw is simply discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionRejected {
    #[error("cannot connect a node to itself")]
    SelfLoop,
    #[error("both pins are {0:?} pins")]
    SameDirection(crate::model::PinDirection),
    #[error("an identical connection already exists")]
    Duplicate,
    #[error("node {0} no longer exists")]
    MissingNode(Uuid),
    #[error("node {node_id} has no such pin '{pin_name}'")]
    MissingPin { node_id: Uuid, pin_name: String },
}
