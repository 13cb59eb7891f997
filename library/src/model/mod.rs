//! Blueprint graph data model: nodes, pins, connections and the descriptors
//! external generators hand to the editor.

pub mod connection;
pub mod descriptor;
pub mod node;

pub use connection::{Connection, PinDirection, PinId};
pub use descriptor::{DescriptorBatch, NodeDescriptor};
pub use node::{Node, NodeKind};
