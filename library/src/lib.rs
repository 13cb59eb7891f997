//! Core of the blueprint node-graph editor.
//!
//! The crate is UI-agnostic: [`geometry`] computes where nodes, pins and
//! connection curves go, and [`surface::GraphSurface`] owns the node and
//! connection collections together with the pointer state machine that turns
//! raw pointer events into node moves and new connections.

pub mod error;
pub mod geometry;
pub mod model;
pub mod surface;

pub use error::{ConnectionRejected, GraphError};
pub use geometry::{CubicBezier, NodeMetrics, Offset, Point, Rect, bezier_path};
pub use model::{Connection, Node, NodeDescriptor, NodeKind, PinDirection, PinId};
pub use surface::{
    ConnectionRoute, GraphSnapshot, GraphSurface, Hit, Interaction, PendingConnection, PinHandle,
    Placement, SurfaceConfig,
};
