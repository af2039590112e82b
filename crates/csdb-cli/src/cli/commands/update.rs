//! `csdb update` – download the latest sensor database and replace the
//! local copy.

use anyhow::Result;
use csdb_core::config::CsdbConfig;
use csdb_core::dataset::{DatasetStore, LoadOutcome};
use csdb_core::report::StatusReport;
use csdb_core::update::{self, UpdateError, UpdateSource};

use crate::cli::prefs::Prefs;

pub fn run_update(cfg: &CsdbConfig, store: &mut DatasetStore) -> Result<()> {
    let source = UpdateSource::new(&cfg.dataset_url, &cfg.version_url)?;
    let prefs_path = Prefs::default_path()?;
    let mut prefs = Prefs::load_or_default(&prefs_path);

    println!(
        "{}",
        StatusReport::info(format!(
            "Downloading sensor database from {}...",
            cfg.dataset_url
        ))
    );

    match update::download(&source, store, cfg.online_access) {
        Ok(report) => {
            prefs.remote_sha = report.remote_sha;
            prefs.update_available = false;
            prefs.touch_last_checked();
            prefs.save(&prefs_path)?;
            println!(
                "{}",
                StatusReport::info(format!(
                    "Sensor database saved to {}",
                    store.path().display()
                ))
            );
            if report.outcome == LoadOutcome::Malformed {
                println!(
                    "{}",
                    StatusReport::warning(
                        "Downloaded data could not be parsed; the dataset is empty."
                    )
                );
            }
        }
        Err(UpdateError::NetworkDisabled) => {
            println!(
                "{}",
                StatusReport::warning("Internet access is disabled. Cannot update sensor database.")
            );
        }
        Err(err) => {
            println!(
                "{}",
                StatusReport::error(format!(
                    "Failed to download or save sensor database: {err}"
                ))
            );
        }
    }
    Ok(())
}
