//! Injection of externally generated node descriptors.

use std::collections::HashSet;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GraphError;
use crate::geometry::Point;
use crate::model::{DescriptorBatch, Node, NodeDescriptor};

use super::GraphSurface;

/// Default positions for injected nodes: a horizontal row that steps down
/// by `stagger_y` on every other node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Placement {
    pub step_x: f32,
    pub stagger_y: f32,
    /// Slot of the first injected node.
    pub origin: Point,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            step_x: 250.0,
            stagger_y: 50.0,
            origin: Point::new(50.0, 100.0),
        }
    }
}

impl Placement {
    pub fn slot(&self, index: usize) -> Point {
        let dy = if index % 2 == 1 { self.stagger_y } else { 0.0 };
        Point::new(
            self.origin.x + index as f32 * self.step_x,
            self.origin.y + dy,
        )
    }
}

/// Parse a generator payload: either a bare descriptor array or `{"nodes": [...]}`.
pub fn parse_descriptors(payload: &str) -> Result<Vec<NodeDescriptor>, GraphError> {
    let batch: DescriptorBatch = serde_json::from_str(payload)?;
    Ok(batch.into_descriptors())
}

fn validate(descriptor: &NodeDescriptor, index: usize) -> Result<(), GraphError> {
    if descriptor.name.trim().is_empty() {
        return Err(GraphError::invalid_descriptor(format!(
            "node #{} has an empty name",
            index
        )));
    }
    for pin in descriptor.inputs.iter().chain(&descriptor.outputs) {
        if pin.trim().is_empty() {
            return Err(GraphError::invalid_descriptor(format!(
                "node '{}' has an unnamed pin",
                descriptor.name
            )));
        }
    }
    for (label, pins) in [("input", &descriptor.inputs), ("output", &descriptor.outputs)] {
        let mut seen = HashSet::new();
        if let Some(dup) = pins.iter().find(|p| !seen.insert(p.as_str())) {
            // Kept as-is: lookups by name resolve to the first row.
            warn!(
                "Node '{}' repeats {} pin '{}'; connections use the first one",
                descriptor.name, label, dup
            );
        }
    }
    Ok(())
}

impl GraphSurface {
    /// Append a batch of generated nodes at staggered default positions.
    ///
    /// The whole batch is validated before anything is added, so a bad
    /// descriptor leaves the surface untouched.
    pub fn inject(&mut self, descriptors: Vec<NodeDescriptor>) -> Result<Vec<Uuid>, GraphError> {
        for (index, descriptor) in descriptors.iter().enumerate() {
            validate(descriptor, index)?;
        }

        let mut ids = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let position = self.placement.slot(self.injected);
            self.injected += 1;
            let node = Node::new(&descriptor.name, descriptor.kind, position)
                .with_inputs(descriptor.inputs)
                .with_outputs(descriptor.outputs);
            ids.push(node.id);
            self.nodes.push(node);
        }
        info!("Injected {} node(s)", ids.len());
        Ok(ids)
    }

    /// [`GraphSurface::inject`] from a raw JSON payload.
    pub fn inject_json(&mut self, payload: &str) -> Result<Vec<Uuid>, GraphError> {
        let descriptors = parse_descriptors(payload)?;
        self.inject(descriptors)
    }
}
