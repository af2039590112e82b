//! `csdb check-update` – compare the remote dataset hash against the one
//! recorded at the last download.

use anyhow::Result;
use csdb_core::config::CsdbConfig;
use csdb_core::report::StatusReport;
use csdb_core::update::{self, UpdateError, UpdateSource};

use crate::cli::prefs::Prefs;

pub fn run_check_update(cfg: &CsdbConfig) -> Result<()> {
    let source = UpdateSource::new(&cfg.dataset_url, &cfg.version_url)?;
    let prefs_path = Prefs::default_path()?;
    let mut prefs = Prefs::load_or_default(&prefs_path);
    let stored = if prefs.remote_sha.is_empty() {
        None
    } else {
        Some(prefs.remote_sha.clone())
    };

    match update::check_for_update(&source, stored.as_deref(), cfg.online_access) {
        Ok(check) => {
            prefs.update_available = check.update_available;
            prefs.touch_last_checked();
            prefs.save(&prefs_path)?;
            let report = if check.update_available {
                StatusReport::info("An update for the sensor database is available.")
            } else {
                StatusReport::info("Sensor database is up to date.")
            };
            println!("{report}");
        }
        Err(UpdateError::NetworkDisabled) => {
            println!("{}", StatusReport::warning("Internet access is disabled."));
        }
        Err(err) => {
            println!(
                "{}",
                StatusReport::error(format!("Update check failed: {err}"))
            );
        }
    }
    Ok(())
}
