//! Host-side preference values kept between sessions: the stored dataset
//! hash, the last-checked timestamp, and the update-available flag.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Content hash of the dataset version recorded at the last download.
    #[serde(default)]
    pub remote_sha: String,
    /// Human-readable timestamp of the last update check.
    #[serde(default = "default_last_checked")]
    pub last_checked: String,
    /// Set when the remote hash was seen to differ from `remote_sha`.
    #[serde(default)]
    pub update_available: bool,
}

fn default_last_checked() -> String {
    "Never".to_string()
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            remote_sha: String::new(),
            last_checked: default_last_checked(),
            update_available: false,
        }
    }
}

impl Prefs {
    /// Default preferences file: `~/.local/state/csdb/prefs.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("csdb")?;
        xdg_dirs
            .place_state_file("prefs.toml")
            .context("resolve prefs path")
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable as TOML.
    pub fn load_or_default(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&data) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable prefs file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("serialize prefs")?;
        fs::write(path, toml).with_context(|| format!("write prefs: {}", path.display()))?;
        Ok(())
    }

    /// Stamp `last_checked` with the current local time.
    pub fn touch_last_checked(&mut self) {
        self.last_checked = chrono::Local::now()
            .format("%B %d, %Y at %I:%M %p")
            .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::load_or_default(&dir.path().join("prefs.toml"));
        assert_eq!(prefs.remote_sha, "");
        assert_eq!(prefs.last_checked, "Never");
        assert!(!prefs.update_available);
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut prefs = Prefs::default();
        prefs.remote_sha = "abc123".to_string();
        prefs.update_available = true;
        prefs.touch_last_checked();
        prefs.save(&path).unwrap();
        assert_eq!(Prefs::load_or_default(&path), prefs);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: Prefs = toml::from_str(r#"remote_sha = "abc123""#).unwrap();
        assert_eq!(prefs.remote_sha, "abc123");
        assert_eq!(prefs.last_checked, "Never");
        assert!(!prefs.update_available);
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(Prefs::load_or_default(&path), Prefs::default());
    }
}
