//! Side panels around the graph canvas.

use blueprint_graph::GraphSurface;

use crate::config::EditorConfig;
use egui::{Color32, RichText};
use uuid::Uuid;

/// Result of the last user-triggered operation, shown in the status bar.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Requests collected while drawing panels, applied after the frame's UI.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelAction {
    Inject,
    OpenFile,
    Clear,
    DeleteConnection(Uuid),
    ToggleExport,
    SaveSettings,
}

pub fn descriptor_panel(ui: &mut egui::Ui, input: &mut String, actions: &mut Vec<PanelAction>) {
    ui.heading("Node Descriptors");
    ui.label("Paste generated nodes as JSON.");
    egui::ScrollArea::vertical()
        .id_salt("descriptor_input")
        .max_height(260.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(input)
                    .code_editor()
                    .desired_rows(12)
                    .desired_width(f32::INFINITY),
            );
        });

    ui.horizontal(|ui| {
        if ui.button("Add Nodes").clicked() {
            actions.push(PanelAction::Inject);
        }
        if ui.button("Open…").clicked() {
            actions.push(PanelAction::OpenFile);
        }
        if ui.button("Clear").clicked() {
            actions.push(PanelAction::Clear);
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Export").clicked() {
            actions.push(PanelAction::ToggleExport);
        }
    });
}

pub fn settings_panel(ui: &mut egui::Ui, config: &mut EditorConfig, actions: &mut Vec<PanelAction>) {
    ui.collapsing("Settings", |ui| {
        let surface = &mut config.surface;
        egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
            ui.label("Pin hit radius");
            ui.add(egui::DragValue::new(&mut surface.pin_hit_radius).range(2.0..=32.0));
            ui.end_row();

            ui.label("Node width");
            ui.add(egui::DragValue::new(&mut surface.metrics.node_width).range(80.0..=600.0));
            ui.end_row();

            ui.label("Spacing");
            ui.add(egui::DragValue::new(&mut surface.placement.step_x).range(0.0..=1000.0));
            ui.end_row();

            ui.label("Stagger");
            ui.add(egui::DragValue::new(&mut surface.placement.stagger_y).range(0.0..=500.0));
            ui.end_row();
        });
        if ui.button("Save Settings").clicked() {
            actions.push(PanelAction::SaveSettings);
        }
    });
}

pub fn connection_list(ui: &mut egui::Ui, surface: &GraphSurface, actions: &mut Vec<PanelAction>) {
    ui.heading("Connections");
    if surface.connections().is_empty() {
        ui.weak("None yet. Drag from one pin to another.");
        return;
    }

    let name_of = |id: Uuid| {
        surface
            .node(id)
            .map(|n| n.name.as_str())
            .unwrap_or("?")
    };

    egui::ScrollArea::vertical()
        .id_salt("connection_list")
        .show(ui, |ui| {
            for conn in surface.connections() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Delete connection").clicked() {
                        actions.push(PanelAction::DeleteConnection(conn.id));
                    }
                    ui.label(format!(
                        "{}.{} → {}.{}",
                        name_of(conn.from.node_id),
                        conn.from.pin_name,
                        name_of(conn.to.node_id),
                        conn.to.pin_name
                    ));
                });
            }
        });
}

pub fn status_bar(ui: &mut egui::Ui, status: Option<&Status>, surface: &GraphSurface) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "{} node(s), {} connection(s)",
            surface.nodes().len(),
            surface.connections().len()
        ));
        match status {
            Some(Status::Info(msg)) => {
                ui.separator();
                ui.label(msg);
            }
            Some(Status::Error(msg)) => {
                ui.separator();
                ui.label(RichText::new(msg).color(Color32::from_rgb(230, 110, 110)));
            }
            None => {}
        }
    });
}

pub fn export_view(ui: &mut egui::Ui, surface: &GraphSurface) {
    let json = match surface.to_json() {
        Ok(json) => json,
        Err(e) => {
            ui.colored_label(Color32::from_rgb(230, 110, 110), e.to_string());
            return;
        }
    };
    if ui.button("Copy to Clipboard").clicked() {
        ui.ctx().copy_text(json.clone());
    }
    egui::ScrollArea::both().show(ui, |ui| {
        ui.monospace(json);
    });
}
