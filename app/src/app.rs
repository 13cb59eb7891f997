use std::path::{Path, PathBuf};

use anyhow::Context;
use blueprint_graph::GraphSurface;
use egui::Visuals;
use egui_blueprint_editor::{EditorOutput, NodeEditorState, NodeEditorTheme, NodeEditorWidget};
use log::{info, warn};

use crate::config::{self, EditorConfig};
use crate::panels::{self, PanelAction, Status};

/// Payload shown in the input box on first launch.
pub const SAMPLE_DESCRIPTORS: &str = r#"[
  { "name": "Event Jump", "kind": "event", "inputs": [], "outputs": ["Out"] },
  { "name": "Launch Character", "kind": "function", "inputs": ["In"], "outputs": [] }
]"#;

pub struct BlueprintApp {
    pub surface: GraphSurface,
    pub editor_state: NodeEditorState,
    pub theme: NodeEditorTheme,
    pub config: EditorConfig,
    pub descriptor_input: String,
    pub status: Option<Status>,
    pub show_export: bool,
}

impl BlueprintApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: EditorConfig,
        startup_file: Option<PathBuf>,
    ) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mut app = Self::with_config(config);
        if let Some(path) = startup_file {
            app.load_descriptor_file(&path);
        }
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            surface: GraphSurface::with_config(config.surface.clone()),
            editor_state: NodeEditorState::default(),
            theme: NodeEditorTheme::default(),
            config,
            descriptor_input: SAMPLE_DESCRIPTORS.to_string(),
            status: None,
            show_export: false,
        }
    }

    /// Inject the payload currently in the input box.
    ///
    /// A malformed batch is discarded whole; the graph stays as it was.
    pub fn inject_input(&mut self) {
        self.status = Some(match self.surface.inject_json(&self.descriptor_input) {
            Ok(ids) => Status::Info(format!("Added {} node(s)", ids.len())),
            Err(e) => {
                warn!("Discarded node batch: {}", e);
                Status::Error(format!("Discarded batch: {}", e))
            }
        });
    }

    pub fn load_descriptor_file(&mut self, path: &Path) {
        match read_descriptor_file(path) {
            Ok(payload) => {
                info!("Loaded descriptors from {}", path.display());
                self.descriptor_input = payload;
                self.inject_input();
            }
            Err(e) => {
                warn!("{:#}", e);
                self.status = Some(Status::Error(format!("{:#}", e)));
            }
        }
    }

    /// Push the edited surface settings to the live graph.
    pub fn apply_settings(&mut self) {
        self.surface.set_config(self.config.surface.clone());
    }

    /// Report what the canvas changed this frame.
    pub fn record_editor_output(&mut self, output: EditorOutput) {
        if let Some(id) = output.created_connection {
            info!("Created connection {}", id);
        }
        if !output.deleted_nodes.is_empty() {
            info!("Canvas deleted {} node(s)", output.deleted_nodes.len());
            self.status = Some(Status::Info(format!(
                "Deleted {} node(s)",
                output.deleted_nodes.len()
            )));
        }
    }

    fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::Inject => self.inject_input(),
            PanelAction::OpenFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    self.load_descriptor_file(&path);
                }
            }
            PanelAction::Clear => {
                self.surface.clear();
                self.editor_state = NodeEditorState::default();
                self.status = Some(Status::Info("Graph cleared".to_string()));
            }
            PanelAction::DeleteConnection(id) => {
                if let Err(e) = self.surface.delete_connection(id) {
                    warn!("{}", e);
                }
            }
            PanelAction::ToggleExport => self.show_export = !self.show_export,
            PanelAction::SaveSettings => {
                self.apply_settings();
                config::save_config(&self.config);
                self.status = Some(Status::Info("Settings saved".to_string()));
            }
        }
    }
}

fn read_descriptor_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file {}", path.display()))
}

impl eframe::App for BlueprintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::SidePanel::left("descriptor_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                panels::descriptor_panel(ui, &mut self.descriptor_input, &mut actions);
                ui.separator();
                panels::settings_panel(ui, &mut self.config, &mut actions);
                ui.separator();
                panels::connection_list(ui, &self.surface, &mut actions);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, self.status.as_ref(), &self.surface);
        });

        if self.show_export {
            let mut open = true;
            egui::Window::new("Export")
                .open(&mut open)
                .default_size([420.0, 480.0])
                .show(ctx, |ui| panels::export_view(ui, &self.surface));
            self.show_export = open;
        }

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                NodeEditorWidget::new(&mut self.editor_state, &self.theme)
                    .show(ui, &mut self.surface)
            })
            .inner;
        self.record_editor_output(output);

        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_graph::Point;

    #[test]
    fn malformed_batch_sets_error_and_keeps_graph() {
        let mut app = BlueprintApp::with_config(EditorConfig::default());
        app.inject_input();
        assert_eq!(app.status, Some(Status::Info("Added 2 node(s)".to_string())));

        app.descriptor_input = r#"[{"name": "Ok", "kind": "event"}, {"name": 7}]"#.to_string();
        app.inject_input();
        assert!(matches!(&app.status, Some(Status::Error(msg)) if msg.starts_with("Discarded batch")));
        assert_eq!(app.surface.nodes().len(), 2);
    }

    #[test]
    fn edited_settings_reach_the_surface() {
        let mut app = BlueprintApp::with_config(EditorConfig::default());
        app.config.surface.metrics.node_width = 300.0;
        app.config.surface.placement.step_x = 400.0;
        app.apply_settings();

        assert_eq!(app.surface.metrics().node_width, 300.0);
        app.inject_input();
        assert_eq!(app.surface.nodes()[1].position, Point::new(450.0, 150.0));
    }

    #[test]
    fn canvas_deletions_are_reported() {
        let mut app = BlueprintApp::with_config(EditorConfig::default());
        app.record_editor_output(EditorOutput {
            created_connection: None,
            deleted_nodes: vec![uuid::Uuid::new_v4()],
        });
        assert_eq!(app.status, Some(Status::Info("Deleted 1 node(s)".to_string())));
    }
}
