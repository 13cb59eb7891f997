//! Node drawing primitives. Every position comes from the surface's metrics.

use blueprint_graph::{Node, NodeMetrics, PinDirection, PinHandle};
use egui::{self, Color32, Pos2, Rect, Stroke, StrokeKind, Vec2};

use crate::drawing::{to_screen, to_screen_rect};
use crate::theme::NodeEditorTheme;

/// Per-node inputs to the draw call.
pub(crate) struct NodeVisual<'a> {
    pub node: &'a Node,
    pub is_selected: bool,
    pub hovered_pin: Option<&'a PinHandle>,
}

pub(crate) fn draw_node(
    painter: &egui::Painter,
    origin: Pos2,
    metrics: &NodeMetrics,
    theme: &NodeEditorTheme,
    visual: &NodeVisual,
) {
    let node = visual.node;
    let node_rect = to_screen_rect(origin, metrics.node_rect(node.position, node.row_count()));
    let header_rect = to_screen_rect(origin, metrics.header_rect(node.position));
    let rounding = theme.node_rounding;

    // Body
    let body_color = if visual.is_selected {
        theme.node_body_selected_color
    } else {
        theme.node_body_color
    };
    painter.rect_filled(node_rect, rounding, body_color);
    if visual.is_selected {
        painter.rect_stroke(
            node_rect,
            rounding,
            Stroke::new(2.0, theme.selection_color),
            StrokeKind::Outside,
        );
    }

    // Header
    painter.rect_filled(
        header_rect,
        egui::CornerRadius {
            nw: rounding as u8,
            ne: rounding as u8,
            sw: 0,
            se: 0,
        },
        (theme.header_color)(node.kind),
    );
    painter.text(
        header_rect.left_center() + Vec2::new(8.0, 0.0),
        egui::Align2::LEFT_CENTER,
        &node.name,
        egui::FontId::proportional(12.0),
        theme.title_color,
    );

    draw_delete_control(
        painter,
        to_screen_rect(origin, metrics.delete_control_rect(node.position)),
        theme.delete_color,
    );

    draw_pins(painter, origin, metrics, theme, visual, PinDirection::Input);
    draw_pins(painter, origin, metrics, theme, visual, PinDirection::Output);
}

fn draw_pins(
    painter: &egui::Painter,
    origin: Pos2,
    metrics: &NodeMetrics,
    theme: &NodeEditorTheme,
    visual: &NodeVisual,
    direction: PinDirection,
) {
    let node = visual.node;
    let pin_color = (theme.pin_color)(node.kind);
    let r = metrics.pin_radius;

    for (i, name) in node.pins(direction).iter().enumerate() {
        let p = to_screen(origin, metrics.pin_position(node.position, i, direction));
        painter.circle_filled(p, r, pin_color);

        let hovered = visual.hovered_pin.is_some_and(|h| {
            h.direction == direction && h.pin.node_id == node.id && h.pin.pin_name == *name
        });
        if hovered {
            painter.circle_stroke(p, r + 2.0, Stroke::new(1.5, theme.pin_hover_color));
        }

        let (label_pos, align) = match direction {
            PinDirection::Input => (p + Vec2::new(r + 4.0, 0.0), egui::Align2::LEFT_CENTER),
            PinDirection::Output => (p - Vec2::new(r + 4.0, 0.0), egui::Align2::RIGHT_CENTER),
        };
        painter.text(
            label_pos,
            align,
            name,
            egui::FontId::proportional(10.0),
            theme.pin_label_color,
        );
    }
}

/// Draw the "x" glyph of the delete control.
fn draw_delete_control(painter: &egui::Painter, rect: Rect, color: Color32) {
    let inset = rect.width() * 0.25;
    let r = rect.shrink(inset);
    let stroke = Stroke::new(1.5, color);
    painter.line_segment([r.left_top(), r.right_bottom()], stroke);
    painter.line_segment([Pos2::new(r.right(), r.top()), Pos2::new(r.left(), r.bottom())], stroke);
}
