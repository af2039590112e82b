//! `csdb apply-sensor` / `apply-resolution` – write resolved sensor data
//! onto the scene stand-in.

use anyhow::Result;
use csdb_core::apply::{self, ApplyOutcome};
use csdb_core::dataset::SensorDataset;
use csdb_core::selector::Selection;

use crate::cli::scene::Scene;

pub fn run_apply_sensor(
    dataset: &SensorDataset,
    manufacturer: &str,
    model: &str,
    format: &str,
) -> Result<()> {
    let selection = Selection::new(manufacturer, model, format);
    let scene_path = Scene::default_path()?;
    let mut scene = Scene::load_or_default(&scene_path);
    let outcome = apply::apply_sensor(dataset, &selection, &mut scene.camera);
    finish(outcome, &scene, &scene_path)
}

pub fn run_apply_resolution(
    dataset: &SensorDataset,
    manufacturer: &str,
    model: &str,
    format: &str,
) -> Result<()> {
    let selection = Selection::new(manufacturer, model, format);
    let scene_path = Scene::default_path()?;
    let mut scene = Scene::load_or_default(&scene_path);
    let outcome = apply::apply_resolution(dataset, &selection, &mut scene.render);
    finish(outcome, &scene, &scene_path)
}

fn finish(outcome: ApplyOutcome, scene: &Scene, scene_path: &std::path::Path) -> Result<()> {
    if outcome.changed {
        scene.save(scene_path)?;
    }
    println!("{}", outcome.report);
    Ok(())
}
