//! `csdb status` – dataset location, contents summary, and update state.

use anyhow::Result;
use csdb_core::checksum;
use csdb_core::config::CsdbConfig;
use csdb_core::dataset::{DatasetStore, LoadOutcome};

use crate::cli::prefs::Prefs;

pub fn run_status(cfg: &CsdbConfig, store: &DatasetStore, outcome: LoadOutcome) -> Result<()> {
    println!("Dataset file:     {}", store.path().display());
    match outcome {
        LoadOutcome::Loaded { .. } => {
            println!(
                "Contents:         {} manufacturers, {} models",
                store.dataset().manufacturer_count(),
                store.dataset().model_count()
            );
            let digest = checksum::sha256_path(store.path())?;
            println!("Local digest:     {digest}");
        }
        LoadOutcome::Missing => println!("Contents:         not downloaded yet"),
        LoadOutcome::Malformed => println!("Contents:         unreadable (not valid JSON)"),
    }
    println!("Remote dataset:   {}", cfg.dataset_url);

    let prefs = Prefs::load_or_default(&Prefs::default_path()?);
    println!("Last checked:     {}", prefs.last_checked);
    println!(
        "Update available: {}",
        if prefs.update_available { "yes" } else { "no" }
    );
    Ok(())
}
