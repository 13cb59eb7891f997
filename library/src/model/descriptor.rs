//! Node descriptors produced by external generators.

use serde::{Deserialize, Serialize};

use super::node::NodeKind;

/// Shape of one generated node before it receives an id and a position.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeDescriptor {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl NodeDescriptor {
    pub fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs(mut self, pins: &[&str]) -> Self {
        self.inputs = pins.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_outputs(mut self, pins: &[&str]) -> Self {
        self.outputs = pins.iter().map(|p| p.to_string()).collect();
        self
    }
}

/// Accepted payload shapes: a bare array, or an object wrapping `nodes`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DescriptorBatch {
    List(Vec<NodeDescriptor>),
    Wrapped { nodes: Vec<NodeDescriptor> },
}

impl DescriptorBatch {
    pub fn into_descriptors(self) -> Vec<NodeDescriptor> {
        match self {
            DescriptorBatch::List(nodes) | DescriptorBatch::Wrapped { nodes } => nodes,
        }
    }
}
