//! CLI for the camera sensor database tool.
//!
//! This layer plays the host's role from the core's point of view: it owns
//! the preference values and the scene stand-in, supplies the camera and
//! render-settings objects to apply operations, and displays status
//! messages. The core stays free of process and UI concerns.

mod commands;
mod prefs;
mod scene;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use csdb_core::config;
use csdb_core::dataset::DatasetStore;

use commands::{
    run_apply_resolution, run_apply_sensor, run_check_update, run_completions, run_formats,
    run_manufacturers, run_models, run_show, run_status, run_update,
};

/// Top-level CLI for the camera sensor database tool.
#[derive(Debug, Parser)]
#[command(name = "csdb")]
#[command(about = "CSDB: camera sensor database lookup and sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List manufacturers in the local dataset.
    Manufacturers,

    /// List models for a manufacturer.
    Models {
        manufacturer: String,
    },

    /// List sensor formats for a model.
    Formats {
        manufacturer: String,
        model: String,
    },

    /// Show the sensor record for a format.
    Show {
        manufacturer: String,
        model: String,
        format: String,
    },

    /// Apply a format's physical sensor size to the scene camera.
    ApplySensor {
        manufacturer: String,
        model: String,
        format: String,
    },

    /// Apply a format's pixel resolution to the scene render settings.
    ApplyResolution {
        manufacturer: String,
        model: String,
        format: String,
    },

    /// Check whether a newer sensor database is available upstream.
    CheckUpdate,

    /// Download the latest sensor database and replace the local copy.
    Update,

    /// Show dataset location, contents summary, and update state.
    Status,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::Completions { shell } = &cli.command {
            return run_completions(*shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let dataset_path = match &cfg.dataset_path {
            Some(path) => path.clone(),
            None => DatasetStore::default_path()?,
        };
        let (mut store, outcome) = DatasetStore::open(dataset_path);

        match cli.command {
            CliCommand::Manufacturers => run_manufacturers(store.dataset()),
            CliCommand::Models { manufacturer } => run_models(store.dataset(), &manufacturer),
            CliCommand::Formats {
                manufacturer,
                model,
            } => run_formats(store.dataset(), &manufacturer, &model),
            CliCommand::Show {
                manufacturer,
                model,
                format,
            } => run_show(store.dataset(), &manufacturer, &model, &format),
            CliCommand::ApplySensor {
                manufacturer,
                model,
                format,
            } => run_apply_sensor(store.dataset(), &manufacturer, &model, &format)?,
            CliCommand::ApplyResolution {
                manufacturer,
                model,
                format,
            } => run_apply_resolution(store.dataset(), &manufacturer, &model, &format)?,
            CliCommand::CheckUpdate => run_check_update(&cfg)?,
            CliCommand::Update => run_update(&cfg, &mut store)?,
            CliCommand::Status => run_status(&cfg, &store, outcome)?,
            CliCommand::Completions { .. } => unreachable!("handled above"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
