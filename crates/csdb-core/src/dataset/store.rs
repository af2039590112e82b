//! On-disk persistence of the sensor dataset (JSON under the XDG data dir).

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::SensorDataset;

/// What `load` found on disk. Missing and unparseable content are signals,
/// not errors; both leave an empty dataset behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { manufacturers: usize },
    Missing,
    Malformed,
}

/// I/O failure while replacing the persisted dataset. The previous file and
/// the in-memory dataset are left untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Owns the persisted dataset location and the in-memory copy loaded from it.
///
/// The dataset is only ever replaced wholesale: by `load` (re-reading the
/// file) or by `replace` (writing new bytes, then reloading).
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    dataset: SensorDataset,
}

impl DatasetStore {
    /// Default dataset location: `~/.local/share/csdb/sensors.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("csdb")?;
        xdg_dirs
            .place_data_file("sensors.json")
            .context("resolve dataset path")
    }

    /// Open a store against `path` and perform the initial load.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        let mut store = Self {
            path: path.into(),
            dataset: SensorDataset::default(),
        };
        let outcome = store.load();
        (store, outcome)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dataset(&self) -> &SensorDataset {
        &self.dataset
    }

    /// Re-read the dataset from disk. Never errors: a missing file or
    /// unparseable content leaves an empty dataset and is logged. Calling
    /// this twice with no intervening `replace` yields identical datasets.
    pub fn load(&mut self) -> LoadOutcome {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.dataset = SensorDataset::default();
                tracing::info!(path = %self.path.display(), "sensor dataset not found");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                // An unreadable file degrades the same way as a missing one.
                self.dataset = SensorDataset::default();
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read sensor dataset");
                return LoadOutcome::Missing;
            }
        };
        match SensorDataset::from_slice(&bytes) {
            Ok(dataset) => {
                let manufacturers = dataset.manufacturer_count();
                tracing::debug!(manufacturers, "loaded sensor dataset");
                self.dataset = dataset;
                LoadOutcome::Loaded { manufacturers }
            }
            Err(e) => {
                self.dataset = SensorDataset::default();
                tracing::warn!(path = %self.path.display(), error = %e, "sensor dataset is not valid JSON");
                LoadOutcome::Malformed
            }
        }
    }

    /// Write `bytes` verbatim to the persisted location and reload.
    ///
    /// The bytes go to a sibling temp file which is renamed over the target,
    /// so a failed write cannot clobber the existing file. The returned
    /// outcome reports what the new content parsed as.
    pub fn replace(&mut self, bytes: &[u8]) -> Result<LoadOutcome, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Rename {
                from: tmp.clone(),
                to: self.path.clone(),
                source,
            }
        })?;
        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "replaced sensor dataset");
        Ok(self.load())
    }
}
