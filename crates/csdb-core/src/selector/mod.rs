//! Cascading manufacturer -> model -> format selection over the dataset.
//!
//! Later choice lists depend on earlier selections. Invalidating an ancestor
//! does not clear descendants; a stale descendant simply stops resolving.
//! Lookup misses at any level degrade to sentinels or `None`, never errors.

use std::fmt;

use crate::dataset::{FormatRecord, SensorDataset};

/// One entry in a choice list. Sentinels are distinct from every real key
/// and are never valid lookup values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A real key into the dataset at this level.
    Key(String),
    /// The dataset is empty; nothing to choose from at the top level.
    NoData,
    /// An ancestor selection is unset or no longer matches the dataset.
    NotApplicable,
}

impl Choice {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Choice::Key(key) => Some(key),
            Choice::NoData | Choice::NotApplicable => None,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Key(key) => f.write_str(key),
            Choice::NoData => f.write_str("No Data Found"),
            Choice::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// The user's current manufacturer/model/format selection. Fields are unset
/// until an explicit selection event sets them; setting an ancestor does not
/// clear descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub format: Option<String>,
}

impl Selection {
    /// A fully-qualified selection.
    pub fn new(manufacturer: &str, model: &str, format: &str) -> Self {
        Self {
            manufacturer: Some(manufacturer.to_string()),
            model: Some(model.to_string()),
            format: Some(format.to_string()),
        }
    }
}

/// All manufacturer names, sorted; `NoData` when the dataset is empty.
pub fn manufacturer_choices(dataset: &SensorDataset) -> Vec<Choice> {
    let choices: Vec<Choice> = dataset
        .manufacturer_names()
        .map(|name| Choice::Key(name.to_string()))
        .collect();
    if choices.is_empty() {
        vec![Choice::NoData]
    } else {
        choices
    }
}

/// Model names under `manufacturer`, sorted; `NotApplicable` when the
/// manufacturer is unset, unknown, or has no models.
pub fn model_choices(dataset: &SensorDataset, manufacturer: Option<&str>) -> Vec<Choice> {
    let models = manufacturer.and_then(|name| dataset.models(name));
    let choices: Vec<Choice> = models
        .into_iter()
        .flat_map(|models| models.keys())
        .map(|name| Choice::Key(name.clone()))
        .collect();
    if choices.is_empty() {
        vec![Choice::NotApplicable]
    } else {
        choices
    }
}

/// Format names under `manufacturer`/`model`, sorted; same sentinel rule one
/// level deeper.
pub fn format_choices(
    dataset: &SensorDataset,
    manufacturer: Option<&str>,
    model: Option<&str>,
) -> Vec<Choice> {
    let record = match (manufacturer, model) {
        (Some(manufacturer), Some(model)) => dataset.model(manufacturer, model),
        _ => None,
    };
    let choices: Vec<Choice> = record
        .into_iter()
        .flat_map(|record| record.sensor_dimensions.keys())
        .map(|name| Choice::Key(name.clone()))
        .collect();
    if choices.is_empty() {
        vec![Choice::NotApplicable]
    } else {
        choices
    }
}

/// Resolve a selection to its leaf record. `None` if any level is unset or
/// misses the dataset; an unset manufacturer makes model and format
/// ineffective, and an unset model makes format ineffective.
pub fn resolve_format<'a>(
    dataset: &'a SensorDataset,
    selection: &Selection,
) -> Option<&'a FormatRecord> {
    let manufacturer = selection.manufacturer.as_deref()?;
    let model = selection.model.as_deref()?;
    let format = selection.format.as_deref()?;
    dataset.model(manufacturer, model)?.sensor_dimensions.get(format)
}

/// The physical `mm` pair for a selection, when both axes are present.
pub fn resolve_sensor_dimensions(
    dataset: &SensorDataset,
    selection: &Selection,
) -> Option<(f64, f64)> {
    resolve_format(dataset, selection)?.mm.as_ref()?.pair()
}

/// The pixel resolution pair for a selection, when both axes are present and
/// integral. Float pixel counts resolve as absent, never truncated.
pub fn resolve_resolution(dataset: &SensorDataset, selection: &Selection) -> Option<(u32, u32)> {
    resolve_format(dataset, selection)?.resolution.as_ref()?.pair()
}
