//! egui front end for the blueprint node graph.
//!
//! [`NodeEditorWidget`] paints a [`blueprint_graph::GraphSurface`] and forwards
//! raw pointer input to it. All graph rules live in the surface; this crate only
//! converts coordinates, hit-tests nothing on its own, and draws.

pub mod drawing;
mod interactions;
mod node_rendering;
pub mod state;
pub mod theme;
pub mod widget;

pub use state::NodeEditorState;
pub use theme::NodeEditorTheme;
pub use widget::{EditorOutput, NodeEditorWidget};
