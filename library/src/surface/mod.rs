//! The graph surface: owns nodes, connections and the pointer state machine.
//!
//! All mutation goes through the methods here so the cascade-delete and
//! de-duplication invariants cannot be bypassed. Callers feed raw pointer
//! positions in surface coordinates; hit testing and geometry are resolved
//! internally on every event.

mod injection;
pub mod interaction;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConnectionRejected, GraphError};
use crate::geometry::{CubicBezier, NodeMetrics, Point, bezier_path};
use crate::model::{Connection, Node, NodeKind, PinDirection, PinId};

pub use injection::{Placement, parse_descriptors};
pub use interaction::{Hit, Interaction, PendingConnection, PinHandle};

/// Tunables for a surface, loadable from the app config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Distance from a pin center that still counts as hitting the pin.
    pub pin_hit_radius: f32,
    pub metrics: NodeMetrics,
    pub placement: Placement,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            pin_hit_radius: 8.0,
            metrics: NodeMetrics::default(),
            placement: Placement::default(),
        }
    }
}

/// A committed connection resolved to drawable coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionRoute {
    pub id: Uuid,
    pub from: Point,
    pub to: Point,
    pub curve: CubicBezier,
    /// Kind of the source node (used for coloring).
    pub source_kind: NodeKind,
}

/// Read-only view of both collections, for export.
#[derive(Serialize, Debug)]
pub struct GraphSnapshot<'a> {
    pub nodes: &'a [Node],
    pub connections: &'a [Connection],
}

#[derive(Debug, Default)]
pub struct GraphSurface {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    interaction: Interaction,
    metrics: NodeMetrics,
    placement: Placement,
    pin_hit_radius: f32,
    /// Nodes injected so far; drives default placement.
    injected: usize,
}

impl GraphSurface {
    pub fn new() -> Self {
        Self::with_config(SurfaceConfig::default())
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            metrics: config.metrics,
            placement: config.placement,
            pin_hit_radius: config.pin_hit_radius,
            ..Default::default()
        }
    }

    /// Swap in new tunables. Nodes keep their positions; pins and curves
    /// follow the new metrics on the next read.
    pub fn set_config(&mut self, config: SurfaceConfig) {
        self.metrics = config.metrics;
        self.placement = config.placement;
        self.pin_hit_radius = config.pin_hit_radius;
    }

    // -----------------------------------------------------------------------
    // Outbound state
    // -----------------------------------------------------------------------

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: Uuid) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn pending_connection(&self) -> Option<&PendingConnection> {
        match &self.interaction {
            Interaction::DrawingConnection(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }

    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot {
            nodes: &self.nodes,
            connections: &self.connections,
        }
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Set a node's origin. Connections follow automatically since their
    /// endpoints are resolved at render time.
    pub fn move_node(&mut self, node_id: Uuid, position: Point) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        node.position = position;
        Ok(())
    }

    /// Remove a node and every connection touching it.
    pub fn delete_node(&mut self, node_id: Uuid) -> Result<(), GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;

        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(node_id));
        let removed = self.nodes.remove(index);

        if self.interaction.involves(node_id) {
            debug!("Interaction on deleted node {} cancelled", node_id);
            self.interaction = Interaction::Idle;
        }

        info!(
            "Deleted node '{}' ({}) and {} connection(s)",
            removed.name,
            node_id,
            before - self.connections.len()
        );
        Ok(())
    }

    pub fn delete_connection(&mut self, connection_id: Uuid) -> Result<(), GraphError> {
        let index = self
            .connections
            .iter()
            .position(|c| c.id == connection_id)
            .ok_or(GraphError::ConnectionNotFound(connection_id))?;
        self.connections.remove(index);
        Ok(())
    }

    /// Drop every node and connection. Placement restarts from the first slot.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
        self.interaction = Interaction::Idle;
        self.injected = 0;
    }

    /// Try to connect two pins, in either drag order.
    ///
    /// Rules, in order: no self-loops, exactly one end must be an output,
    /// both pins must exist on live nodes, and the normalized route must not
    /// already exist.
    pub fn connect(
        &mut self,
        origin: &PinHandle,
        target: &PinHandle,
    ) -> Result<Uuid, ConnectionRejected> {
        if origin.node_id() == target.node_id() {
            return Err(ConnectionRejected::SelfLoop);
        }
        if origin.direction == target.direction {
            return Err(ConnectionRejected::SameDirection(origin.direction));
        }

        let (from, to) = match origin.direction {
            PinDirection::Output => (&origin.pin, &target.pin),
            PinDirection::Input => (&target.pin, &origin.pin),
        };

        self.require_pin(from, PinDirection::Output)?;
        self.require_pin(to, PinDirection::Input)?;

        if self.connections.iter().any(|c| c.same_route(from, to)) {
            return Err(ConnectionRejected::Duplicate);
        }

        let conn = Connection::new(from.clone(), to.clone());
        let id = conn.id;
        debug!(
            "Connected {}.{} -> {}.{}",
            from.node_id, from.pin_name, to.node_id, to.pin_name
        );
        self.connections.push(conn);
        Ok(id)
    }

    fn require_pin(&self, pin: &PinId, direction: PinDirection) -> Result<(), ConnectionRejected> {
        let node = self
            .node(pin.node_id)
            .ok_or(ConnectionRejected::MissingNode(pin.node_id))?;
        if node.pin_index(direction, &pin.pin_name).is_none() {
            return Err(ConnectionRejected::MissingPin {
                node_id: pin.node_id,
                pin_name: pin.pin_name.clone(),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Pointer events
    // -----------------------------------------------------------------------

    /// Primary button pressed at `pos`.
    ///
    /// Starts a node drag on a body, a connection draw on a pin, or deletes the
    /// node when the press lands on its delete control.
    pub fn pointer_down(&mut self, pos: Point) -> Option<Hit> {
        // A press always starts from a clean slate, even if a release was lost.
        self.interaction = Interaction::Idle;

        let hit = self.hit_test(pos)?;
        match &hit {
            Hit::DeleteControl(node_id) => {
                let _ = self.delete_node(*node_id);
            }
            Hit::Pin(handle) => {
                if let Some(anchor) = self.pin_position(&handle.pin, handle.direction) {
                    self.interaction = Interaction::DrawingConnection(PendingConnection {
                        origin: handle.clone(),
                        anchor,
                        pointer: pos,
                    });
                }
            }
            Hit::Body(node_id) => {
                if let Some(node) = self.node(*node_id) {
                    self.interaction = Interaction::DraggingNode {
                        node_id: *node_id,
                        grab_offset: pos - node.position,
                    };
                }
            }
        }
        Some(hit)
    }

    /// Pointer moved to `pos`. Returns whether anything visible changed.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        match self.interaction {
            Interaction::Idle => false,
            Interaction::DraggingNode {
                node_id,
                grab_offset,
            } => self.move_node(node_id, pos - grab_offset).is_ok(),
            Interaction::DrawingConnection(ref mut pending) => {
                pending.pointer = pos;
                true
            }
        }
    }

    /// Primary button released at `pos`. Returns the id of a newly committed
    /// connection, if the release finished a valid pin-to-pin drag.
    pub fn pointer_up(&mut self, pos: Point) -> Option<Uuid> {
        match std::mem::take(&mut self.interaction) {
            Interaction::DrawingConnection(pending) => {
                let Some(target) = self.pin_at(pos) else {
                    debug!("Connection draw cancelled: released off-pin");
                    return None;
                };
                match self.connect(&pending.origin, &target) {
                    Ok(id) => Some(id),
                    Err(reason) => {
                        debug!("Connection rejected: {}", reason);
                        None
                    }
                }
            }
            Interaction::DraggingNode { .. } | Interaction::Idle => None,
        }
    }

    // -----------------------------------------------------------------------
    // Render pass
    // -----------------------------------------------------------------------

    /// Current center of a pin, or `None` if the node or pin is gone.
    pub fn pin_position(&self, pin: &PinId, direction: PinDirection) -> Option<Point> {
        let node = self.node(pin.node_id)?;
        let index = node.pin_index(direction, &pin.pin_name)?;
        Some(self.metrics.pin_position(node.position, index, direction))
    }

    /// Drawable routes for all connections whose endpoints still resolve.
    pub fn connection_routes(&self) -> Vec<ConnectionRoute> {
        self.connections
            .iter()
            .filter_map(|conn| {
                let from = self.pin_position(&conn.from, PinDirection::Output)?;
                let to = self.pin_position(&conn.to, PinDirection::Input)?;
                let source_kind = self.node(conn.from.node_id)?.kind;
                Some(ConnectionRoute {
                    id: conn.id,
                    from,
                    to,
                    curve: bezier_path(from, to),
                    source_kind,
                })
            })
            .collect()
    }

    /// The drag line of an in-progress connection draw.
    pub fn pending_route(&self) -> Option<CubicBezier> {
        self.pending_connection()
            .map(|p| bezier_path(p.anchor, p.pointer))
    }
}
