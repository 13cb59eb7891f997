use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::connection::PinDirection;
use crate::geometry::Point;

/// Closed node classification. Only affects styling.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[serde(alias = "Event")]
    Event,
    #[serde(alias = "Function")]
    Function,
    #[serde(alias = "Variable")]
    Variable,
    #[serde(alias = "Macro")]
    Macro,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Event => "event",
            NodeKind::Function => "function",
            NodeKind::Variable => "variable",
            NodeKind::Macro => "macro",
        };
        f.write_str(s)
    }
}

/// A node placed on the graph surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub id: Uuid,
    pub name: String,
    pub kind: NodeKind,
    /// Top-left corner in surface coordinates.
    pub position: Point,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Node {
    pub fn new(name: &str, kind: NodeKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            position,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs<I, S>(mut self, pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = pins.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outputs<I, S>(mut self, pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = pins.into_iter().map(Into::into).collect();
        self
    }

    pub fn pins(&self, direction: PinDirection) -> &[String] {
        match direction {
            PinDirection::Input => &self.inputs,
            PinDirection::Output => &self.outputs,
        }
    }

    /// Row of the named pin. Duplicate names resolve to the first match.
    pub fn pin_index(&self, direction: PinDirection, name: &str) -> Option<usize> {
        self.pins(direction).iter().position(|p| p == name)
    }

    /// Number of pin rows (the taller of the two pin columns).
    pub fn row_count(&self) -> usize {
        self.inputs.len().max(self.outputs.len())
    }
}
