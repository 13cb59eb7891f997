use blueprint_graph::SurfaceConfig;
use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent editor settings, stored as `editor.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub window_size: [f32; 2],
    /// Layout metrics, default placement and pin hit radius.
    pub surface: SurfaceConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 720.0],
            surface: SurfaceConfig::default(),
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("me", "liesegang", "blueprint_editor") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join("editor.toml"));
    }
    None
}

pub fn save_config(config: &EditorConfig) {
    if let Some(path) = get_config_path() {
        match toml::to_string_pretty(config) {
            Ok(toml_str) => {
                if let Err(e) = fs::write(&path, toml_str) {
                    error!("Failed to write config file: {}", e);
                } else {
                    info!("Settings saved to {}", path.display());
                }
            }
            Err(e) => {
                error!("Failed to serialize config: {}", e);
            }
        }
    }
}

pub fn load_config() -> EditorConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => match parse_config(&toml_str) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    // Return default if file doesn't exist or on any error
    EditorConfig::default()
}

fn parse_config(toml_str: &str) -> Result<EditorConfig, toml::de::Error> {
    toml::from_str(toml_str)
}
