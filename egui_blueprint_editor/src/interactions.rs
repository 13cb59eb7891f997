//! Translation of egui input into graph-surface pointer events.

use blueprint_graph::{GraphSurface, Hit};
use egui::{self, Pos2};
use log::debug;

use crate::drawing::to_surface;
use crate::state::{NodeContextMenuState, NodeEditorState};
use crate::widget::EditorOutput;

/// Context passed to interaction handlers.
pub(crate) struct InteractionContext<'a> {
    pub ui: &'a egui::Ui,
    pub canvas_response: &'a egui::Response,
    /// Screen position of the surface origin.
    pub origin: Pos2,
}

/// Main entry point, called once per frame after painting.
pub(crate) fn handle_interactions(
    state: &mut NodeEditorState,
    ctx: &InteractionContext,
    surface: &mut GraphSurface,
) -> EditorOutput {
    let mut output = EditorOutput::default();

    handle_press(state, ctx, surface, &mut output);
    handle_move(ctx, surface);
    handle_release(ctx, surface, &mut output);
    handle_right_click(state, ctx, surface);
    render_node_context_menu(state, ctx, surface, &mut output);
    handle_delete_key(state, ctx, surface, &mut output);

    output
}

// ---------------------------------------------------------------------------
// Pointer handlers
// ---------------------------------------------------------------------------

fn handle_press(
    state: &mut NodeEditorState,
    ctx: &InteractionContext,
    surface: &mut GraphSurface,
    output: &mut EditorOutput,
) {
    let pressed = ctx.ui.input(|i| i.pointer.primary_pressed());
    if !pressed || !ctx.canvas_response.contains_pointer() {
        return;
    }
    let Some(pos) = ctx.ui.input(|i| i.pointer.interact_pos()) else {
        return;
    };
    state.node_context_menu = None;

    match surface.pointer_down(to_surface(ctx.origin, pos)) {
        Some(Hit::DeleteControl(node_id)) => {
            output.deleted_nodes.push(node_id);
            if state.selected_node == Some(node_id) {
                state.selected_node = None;
            }
        }
        Some(hit) => state.selected_node = Some(hit.node_id()),
        None => state.selected_node = None,
    }
}

fn handle_move(ctx: &InteractionContext, surface: &mut GraphSurface) {
    if surface.interaction().is_idle() {
        return;
    }
    if let Some(pos) = ctx.ui.input(|i| i.pointer.latest_pos()) {
        surface.pointer_move(to_surface(ctx.origin, pos));
    }
}

fn handle_release(ctx: &InteractionContext, surface: &mut GraphSurface, output: &mut EditorOutput) {
    if surface.interaction().is_idle() || !ctx.ui.input(|i| i.pointer.primary_released()) {
        return;
    }
    // Release anywhere ends the gesture; off-canvas simply misses every pin.
    let pos = ctx
        .ui
        .input(|i| i.pointer.latest_pos())
        .map(|p| to_surface(ctx.origin, p));
    match pos {
        Some(pos) => output.created_connection = surface.pointer_up(pos),
        None => {
            debug!("Pointer left the window mid-gesture");
            let far = blueprint_graph::Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
            surface.pointer_up(far);
        }
    }
}

fn handle_right_click(
    state: &mut NodeEditorState,
    ctx: &InteractionContext,
    surface: &GraphSurface,
) {
    if !ctx.canvas_response.secondary_clicked() {
        return;
    }
    let Some(pos) = ctx.ui.input(|i| i.pointer.interact_pos()) else {
        return;
    };

    state.node_context_menu = surface
        .hit_test(to_surface(ctx.origin, pos))
        .map(|hit| NodeContextMenuState {
            screen_pos: pos,
            node_id: hit.node_id(),
        });
}

fn render_node_context_menu(
    state: &mut NodeEditorState,
    ctx: &InteractionContext,
    surface: &mut GraphSurface,
    output: &mut EditorOutput,
) {
    let Some(menu) = state.node_context_menu.clone() else {
        return;
    };
    let Some(name) = surface.node(menu.node_id).map(|n| n.name.clone()) else {
        state.node_context_menu = None;
        return;
    };

    let mut close = false;
    let mut delete = false;
    let popup_id = ctx.ui.make_persistent_id("node_context_menu");
    egui::Area::new(popup_id)
        .order(egui::Order::Foreground)
        .fixed_pos(menu.screen_pos)
        .show(ctx.ui.ctx(), |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_max_width(180.0);
                ui.label(&name);
                ui.separator();
                if ui.button("Delete Node").clicked() {
                    delete = true;
                    close = true;
                }
            });
        });

    if delete && surface.delete_node(menu.node_id).is_ok() {
        output.deleted_nodes.push(menu.node_id);
        if state.selected_node == Some(menu.node_id) {
            state.selected_node = None;
        }
    }
    if close || ctx.ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.node_context_menu = None;
    }
}

fn handle_delete_key(
    state: &mut NodeEditorState,
    ctx: &InteractionContext,
    surface: &mut GraphSurface,
    output: &mut EditorOutput,
) {
    // Text fields elsewhere own Backspace while focused.
    if ctx.ui.ctx().wants_keyboard_input() {
        return;
    }
    let pressed = ctx
        .ui
        .input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace));
    if !pressed {
        return;
    }
    if let Some(node_id) = state.selected_node.take() {
        if surface.delete_node(node_id).is_ok() {
            output.deleted_nodes.push(node_id);
        }
    }
}
