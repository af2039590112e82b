//! Stand-in for the host scene: one camera and the render settings.
//!
//! The original host hands live camera and render objects to the apply
//! operations; the CLI keeps an equivalent pair in a small TOML file so
//! those operations have a persistent target.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use csdb_core::apply::{CameraSensor, RenderSettings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub camera: CameraSensor,
    #[serde(default)]
    pub render: RenderSettings,
}

impl Scene {
    /// Default scene file: `~/.local/state/csdb/scene.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("csdb")?;
        xdg_dirs
            .place_state_file("scene.toml")
            .context("resolve scene path")
    }

    /// Load the scene, falling back to defaults when the file is missing or
    /// unreadable as TOML.
    pub fn load_or_default(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&data) {
            Ok(scene) => scene,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable scene file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("serialize scene")?;
        fs::write(path, toml).with_context(|| format!("write scene: {}", path.display()))?;
        Ok(())
    }
}
