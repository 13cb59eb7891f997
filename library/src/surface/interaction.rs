//! Interaction state of the graph surface.

use uuid::Uuid;

use crate::geometry::{Offset, Point};
use crate::model::{PinDirection, PinId};

/// A pin together with the side of the node it sits on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinHandle {
    pub pin: PinId,
    pub direction: PinDirection,
}

impl PinHandle {
    pub fn new(node_id: Uuid, pin_name: &str, direction: PinDirection) -> Self {
        Self {
            pin: PinId::new(node_id, pin_name),
            direction,
        }
    }

    pub fn input(node_id: Uuid, pin_name: &str) -> Self {
        Self::new(node_id, pin_name, PinDirection::Input)
    }

    pub fn output(node_id: Uuid, pin_name: &str) -> Self {
        Self::new(node_id, pin_name, PinDirection::Output)
    }

    pub fn node_id(&self) -> Uuid {
        self.pin.node_id
    }
}

/// An in-progress pin-to-pin drag that has not been committed yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingConnection {
    pub origin: PinHandle,
    /// Pin center at the moment the drag started.
    pub anchor: Point,
    /// Current pointer position (the free end of the drag line).
    pub pointer: Point,
}

/// What the pointer is currently doing. Exactly one of these at any time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    DraggingNode {
        node_id: Uuid,
        /// Pointer position minus node origin, captured on pointer-down.
        grab_offset: Offset,
    },
    DrawingConnection(PendingConnection),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Whether this interaction refers to the given node.
    pub fn involves(&self, node_id: Uuid) -> bool {
        match self {
            Interaction::Idle => false,
            Interaction::DraggingNode { node_id: id, .. } => *id == node_id,
            Interaction::DrawingConnection(pending) => pending.origin.node_id() == node_id,
        }
    }
}

/// Result of hit testing a surface point.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
    DeleteControl(Uuid),
    Pin(PinHandle),
    Body(Uuid),
}

impl Hit {
    pub fn node_id(&self) -> Uuid {
        match self {
            Hit::DeleteControl(id) | Hit::Body(id) => *id,
            Hit::Pin(handle) => handle.node_id(),
        }
    }
}
