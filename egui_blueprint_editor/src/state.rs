//! UI state for the node editor.

use blueprint_graph::PinHandle;
use uuid::Uuid;

/// UI-only state kept between frames. Graph data lives in the surface.
#[derive(Default)]
pub struct NodeEditorState {
    /// Node highlighted by the last press on it; target of the Delete key.
    pub selected_node: Option<Uuid>,
    /// Pin under the pointer, drawn highlighted.
    pub hovered_pin: Option<PinHandle>,
    /// Node-specific context menu (right-click on a node).
    pub node_context_menu: Option<NodeContextMenuState>,
    /// Screen position of the surface origin in the last frame.
    pub canvas_origin: egui::Pos2,
}

#[derive(Clone)]
pub struct NodeContextMenuState {
    pub screen_pos: egui::Pos2,
    pub node_id: Uuid,
}
