//! Main node editor widget.

use blueprint_graph::GraphSurface;
use egui::{self, Stroke};
use uuid::Uuid;

use crate::drawing::{draw_bezier_connection, draw_grid, to_surface};
use crate::interactions::{self, InteractionContext};
use crate::node_rendering::{self, NodeVisual};
use crate::state::NodeEditorState;
use crate::theme::NodeEditorTheme;

// ---------------------------------------------------------------------------
// EditorOutput
// ---------------------------------------------------------------------------

/// What changed in the graph during one frame.
#[derive(Default, Debug)]
pub struct EditorOutput {
    pub created_connection: Option<Uuid>,
    pub deleted_nodes: Vec<Uuid>,
}

// ---------------------------------------------------------------------------
// NodeEditorWidget
// ---------------------------------------------------------------------------

pub struct NodeEditorWidget<'a> {
    state: &'a mut NodeEditorState,
    theme: &'a NodeEditorTheme,
}

impl<'a> NodeEditorWidget<'a> {
    pub fn new(state: &'a mut NodeEditorState, theme: &'a NodeEditorTheme) -> Self {
        Self { state, theme }
    }

    /// Show the node editor for `surface` and apply this frame's input to it.
    pub fn show(&mut self, ui: &mut egui::Ui, surface: &mut GraphSurface) -> EditorOutput {
        if surface.nodes().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No nodes. Add node descriptors to begin.");
            });
            return EditorOutput::default();
        }

        let available = ui.available_rect_before_wrap();
        let (canvas_response, painter) =
            ui.allocate_painter(available.size(), egui::Sense::click_and_drag());
        let canvas_rect = canvas_response.rect;
        let origin = canvas_rect.min;
        self.state.canvas_origin = origin;

        // Hover tracking
        self.state.hovered_pin = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|pos| canvas_rect.contains(*pos))
            .and_then(|pos| surface.pin_at(to_surface(origin, pos)));

        // Background
        painter.rect_filled(canvas_rect, 0.0, self.theme.background_color);
        draw_grid(
            &painter,
            canvas_rect,
            self.theme.grid_color,
            self.theme.grid_spacing,
        );

        // ---- Phase 1: Nodes ----
        let metrics = surface.metrics();
        for node in surface.nodes() {
            let visual = NodeVisual {
                node,
                is_selected: self.state.selected_node == Some(node.id),
                hovered_pin: self.state.hovered_pin.as_ref(),
            };
            node_rendering::draw_node(&painter, origin, metrics, self.theme, &visual);
        }

        // ---- Phase 2: Connections on top of nodes ----
        for route in surface.connection_routes() {
            draw_bezier_connection(
                &painter,
                origin,
                &route.curve,
                self.theme.curve_segments,
                Stroke::new(
                    self.theme.connection_width,
                    (self.theme.pin_color)(route.source_kind),
                ),
            );
        }
        if let Some(curve) = surface.pending_route() {
            draw_bezier_connection(
                &painter,
                origin,
                &curve,
                self.theme.curve_segments,
                Stroke::new(
                    self.theme.connection_width,
                    self.theme.pending_connection_color,
                ),
            );
        }

        // ---- Phase 3: Input ----
        let ctx = InteractionContext {
            ui,
            canvas_response: &canvas_response,
            origin,
        };
        interactions::handle_interactions(self.state, &ctx, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_graph::{NodeDescriptor, NodeKind, PinDirection, PinHandle, PinId, Point};
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;

    /// Surface, widget state, theme, and every node id reported deleted.
    type EditorHarnessState = (GraphSurface, NodeEditorState, NodeEditorTheme, Vec<Uuid>);

    fn harness(surface: GraphSurface) -> Harness<'static, EditorHarnessState> {
        Harness::builder()
            .with_size(egui::vec2(1200.0, 700.0))
            .build_ui_state(
                |ui, (surface, state, theme, deleted): &mut EditorHarnessState| {
                    let output = NodeEditorWidget::new(state, theme).show(ui, surface);
                    deleted.extend(output.deleted_nodes);
                },
                (
                    surface,
                    NodeEditorState::default(),
                    NodeEditorTheme::default(),
                    Vec::new(),
                ),
            )
    }

    fn press(harness: &mut Harness<'static, EditorHarnessState>, pos: egui::Pos2) {
        let input = harness.input_mut();
        input.events.push(egui::Event::PointerMoved(pos));
        input.events.push(egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        });
        harness.run();
    }

    fn release(harness: &mut Harness<'static, EditorHarnessState>, pos: egui::Pos2) {
        let input = harness.input_mut();
        input.events.push(egui::Event::PointerMoved(pos));
        input.events.push(egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        });
        harness.run();
    }

    fn screen_pin(
        harness: &Harness<'static, EditorHarnessState>,
        node: Uuid,
        pin: &str,
        dir: PinDirection,
    ) -> egui::Pos2 {
        let (surface, state, ..) = harness.state();
        let p = surface.pin_position(&PinId::new(node, pin), dir).unwrap();
        crate::drawing::to_screen(state.canvas_origin, p)
    }

    #[test]
    fn empty_surface_shows_hint() {
        let mut harness = harness(GraphSurface::new());
        harness.run();
        assert!(
            harness
                .query_by_label("No nodes. Add node descriptors to begin.")
                .is_some()
        );
    }

    #[test]
    fn pointer_drag_between_pins_creates_connection() {
        let mut surface = GraphSurface::new();
        let ids = surface
            .inject(vec![
                NodeDescriptor::new("Event Jump", NodeKind::Event).with_outputs(&["Out"]),
                NodeDescriptor::new("Launch Character", NodeKind::Function).with_inputs(&["In"]),
            ])
            .unwrap();
        let mut harness = harness(surface);
        harness.run();

        let from = screen_pin(&harness, ids[0], "Out", PinDirection::Output);
        let to = screen_pin(&harness, ids[1], "In", PinDirection::Input);

        press(&mut harness, from);
        assert!(harness.state().0.pending_connection().is_some());

        release(&mut harness, to);
        let surface = &harness.state().0;
        assert!(surface.pending_connection().is_none());
        assert_eq!(surface.connections().len(), 1);
        assert_eq!(surface.connections()[0].from, PinId::new(ids[0], "Out"));
    }

    #[test]
    fn pointer_drag_on_body_moves_node() {
        let mut surface = GraphSurface::new();
        let ids = surface
            .inject(vec![NodeDescriptor::new("Tick", NodeKind::Event)])
            .unwrap();
        let mut harness = harness(surface);
        harness.run();

        let start = harness.state().0.node(ids[0]).unwrap().position;
        let origin = harness.state().1.canvas_origin;
        let grab = crate::drawing::to_screen(origin, Point::new(start.x + 40.0, start.y + 20.0));

        press(&mut harness, grab);
        release(&mut harness, grab + egui::vec2(100.0, 60.0));

        let moved = harness.state().0.node(ids[0]).unwrap().position;
        assert_eq!(moved, Point::new(start.x + 100.0, start.y + 60.0));
        assert_eq!(harness.state().1.selected_node, Some(ids[0]));
    }

    #[test]
    fn press_on_delete_control_removes_node_and_reports_it() {
        let mut surface = GraphSurface::new();
        let ids = surface
            .inject(vec![
                NodeDescriptor::new("Event Jump", NodeKind::Event).with_outputs(&["Out"]),
                NodeDescriptor::new("Launch Character", NodeKind::Function).with_inputs(&["In"]),
            ])
            .unwrap();
        let from = PinHandle::output(ids[0], "Out");
        let to = PinHandle::input(ids[1], "In");
        surface.connect(&from, &to).unwrap();
        let mut harness = harness(surface);
        harness.run();

        let (surface, state, ..) = harness.state();
        let position = surface.node(ids[1]).unwrap().position;
        let control = surface.metrics().delete_control_rect(position);
        let center = Point::new(
            (control.min.x + control.max.x) / 2.0,
            (control.min.y + control.max.y) / 2.0,
        );
        let click = crate::drawing::to_screen(state.canvas_origin, center);

        press(&mut harness, click);
        release(&mut harness, click);

        let (surface, _, _, deleted) = harness.state();
        assert_eq!(deleted, &vec![ids[1]]);
        assert!(surface.node(ids[1]).is_none());
        assert!(surface.connections().is_empty());
    }
}
