//! Connection model for the blueprint graph.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a pin.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    Input,
    Output,
}

/// Identifies a specific pin on a specific node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinId {
    pub node_id: Uuid,
    pub pin_name: String,
}

impl PinId {
    pub fn new(node_id: Uuid, pin_name: &str) -> Self {
        Self {
            node_id,
            pin_name: pin_name.to_string(),
        }
    }
}

/// A directed edge from an output pin to an input pin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: Uuid,
    /// Source pin (output)
    pub from: PinId,
    /// Destination pin (input)
    pub to: PinId,
}

impl Connection {
    pub fn new(from: PinId, to: PinId) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
        }
    }

    pub fn touches(&self, node_id: Uuid) -> bool {
        self.from.node_id == node_id || self.to.node_id == node_id
    }

    /// Same endpoints, ignoring the id.
    pub fn same_route(&self, from: &PinId, to: &PinId) -> bool {
        self.from == *from && self.to == *to
    }
}
