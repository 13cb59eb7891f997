//! Theming for the node editor.

use blueprint_graph::NodeKind;
use egui::Color32;

/// Theme configuration for the node editor.
///
/// Sizes are not part of the theme: they come from the surface's
/// [`blueprint_graph::NodeMetrics`] so painting and hit testing agree.
pub struct NodeEditorTheme {
    /// Header color per node kind.
    pub header_color: Box<dyn Fn(NodeKind) -> Color32>,
    /// Pin and outgoing connection color per node kind.
    pub pin_color: Box<dyn Fn(NodeKind) -> Color32>,
    /// Corner rounding for nodes.
    pub node_rounding: f32,
    /// Background color.
    pub background_color: Color32,
    /// Grid line color.
    pub grid_color: Color32,
    /// Grid spacing.
    pub grid_spacing: f32,
    /// Node body color (unselected).
    pub node_body_color: Color32,
    /// Node body color (selected).
    pub node_body_selected_color: Color32,
    /// Selection outline color.
    pub selection_color: Color32,
    /// Header title color.
    pub title_color: Color32,
    /// Pin label color.
    pub pin_label_color: Color32,
    /// Ring drawn around the hovered pin.
    pub pin_hover_color: Color32,
    /// Delete glyph color.
    pub delete_color: Color32,
    /// In-progress drag line color.
    pub pending_connection_color: Color32,
    /// Connection stroke width.
    pub connection_width: f32,
    /// Line segments used to approximate one connection curve.
    pub curve_segments: usize,
}

impl Default for NodeEditorTheme {
    fn default() -> Self {
        Self {
            header_color: Box::new(default_header_color),
            pin_color: Box::new(default_pin_color),
            node_rounding: 4.0,
            background_color: Color32::from_rgb(30, 30, 30),
            grid_color: Color32::from_rgb(40, 40, 40),
            grid_spacing: 50.0,
            node_body_color: Color32::from_rgb(45, 45, 50),
            node_body_selected_color: Color32::from_rgb(55, 55, 65),
            selection_color: Color32::from_rgb(100, 150, 255),
            title_color: Color32::WHITE,
            pin_label_color: Color32::from_rgb(200, 200, 200),
            pin_hover_color: Color32::WHITE,
            delete_color: Color32::from_rgb(230, 120, 120),
            pending_connection_color: Color32::from_rgb(200, 200, 200),
            connection_width: 2.0,
            curve_segments: 24,
        }
    }
}

fn default_header_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Event => Color32::from_rgb(150, 40, 40),
        NodeKind::Function => Color32::from_rgb(50, 90, 150),
        NodeKind::Variable => Color32::from_rgb(50, 120, 70),
        NodeKind::Macro => Color32::from_rgb(90, 90, 100),
    }
}

fn default_pin_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Event => Color32::from_rgb(238, 109, 109), // Red
        NodeKind::Function => Color32::from_rgb(109, 170, 238), // Blue
        NodeKind::Variable => Color32::from_rgb(109, 238, 150), // Green
        NodeKind::Macro => Color32::from_rgb(200, 200, 210), // Grey
    }
}
