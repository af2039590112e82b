use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::update::{DEFAULT_DATASET_URL, DEFAULT_VERSION_URL};

/// Tool configuration loaded from `~/.config/csdb/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsdbConfig {
    /// URL of the hosted sensor dataset (raw JSON).
    pub dataset_url: String,
    /// URL of the version metadata document published for the dataset.
    pub version_url: String,
    /// Master switch for network access. When false, update checks and
    /// downloads are refused before any connection is attempted.
    pub online_access: bool,
    /// Optional override for the persisted dataset location.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

impl Default for CsdbConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            version_url: DEFAULT_VERSION_URL.to_string(),
            online_access: true,
            dataset_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("csdb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CsdbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CsdbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CsdbConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_upstream() {
        let cfg = CsdbConfig::default();
        assert_eq!(cfg.dataset_url, DEFAULT_DATASET_URL);
        assert_eq!(cfg.version_url, DEFAULT_VERSION_URL);
        assert!(cfg.online_access);
        assert!(cfg.dataset_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CsdbConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CsdbConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.dataset_url, cfg.dataset_url);
        assert_eq!(parsed.version_url, cfg.version_url);
        assert_eq!(parsed.online_access, cfg.online_access);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            dataset_url = "http://mirror.local/sensors.json"
            version_url = "http://mirror.local/sensors.meta"
            online_access = false
            dataset_path = "/srv/csdb/sensors.json"
        "#;
        let cfg: CsdbConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.dataset_url, "http://mirror.local/sensors.json");
        assert!(!cfg.online_access);
        assert_eq!(
            cfg.dataset_path.as_deref(),
            Some(std::path::Path::new("/srv/csdb/sensors.json"))
        );
    }
}
