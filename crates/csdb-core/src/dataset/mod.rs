//! In-memory model of the camera sensor dataset.
//!
//! The dataset is a three-level mapping: manufacturer name -> model name ->
//! model record, where each model record maps sensor format names to the
//! leaf record carrying physical dimensions and pixel resolution. Every
//! level is a `BTreeMap` so display iteration is lexicographic by
//! construction. Readers ignore unknown fields at any level.

mod store;

pub use store::{DatasetStore, LoadOutcome, StoreError};

use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;

/// The full sensor dataset, keyed by manufacturer name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SensorDataset {
    manufacturers: BTreeMap<String, BTreeMap<String, ModelRecord>>,
}

impl SensorDataset {
    /// Parse a dataset from raw JSON bytes. The top level must be an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.manufacturers.is_empty()
    }

    /// Manufacturer names in lexicographic order.
    pub fn manufacturer_names(&self) -> impl Iterator<Item = &str> {
        self.manufacturers.keys().map(String::as_str)
    }

    /// Models under a manufacturer, or `None` if the manufacturer is unknown.
    pub fn models(&self, manufacturer: &str) -> Option<&BTreeMap<String, ModelRecord>> {
        self.manufacturers.get(manufacturer)
    }

    /// A single model record, or `None` on a miss at either level.
    pub fn model(&self, manufacturer: &str, model: &str) -> Option<&ModelRecord> {
        self.manufacturers.get(manufacturer)?.get(model)
    }

    pub fn manufacturer_count(&self) -> usize {
        self.manufacturers.len()
    }

    pub fn model_count(&self) -> usize {
        self.manufacturers.values().map(BTreeMap::len).sum()
    }
}

/// One camera model: its sensor formats, keyed by format name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelRecord {
    /// The upstream JSON key contains a space.
    #[serde(default, rename = "sensor dimensions")]
    pub sensor_dimensions: BTreeMap<String, FormatRecord>,
}

/// Leaf record for one sensor format. Either field may be absent, meaning
/// "not applicable" for that format, never zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormatRecord {
    #[serde(default)]
    pub mm: Option<PhysicalSize>,
    #[serde(default)]
    pub resolution: Option<PixelSize>,
}

/// Physical sensor dimensions in millimeters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PhysicalSize {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl PhysicalSize {
    /// Width/height pair if both are present.
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.width?, self.height?))
    }
}

/// Pixel resolution. Values are kept as raw JSON numbers so that a float
/// pixel count loads fine but never resolves as an integer pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PixelSize {
    #[serde(default)]
    pub width: Option<Number>,
    #[serde(default)]
    pub height: Option<Number>,
}

impl PixelSize {
    /// Width/height pair if both are present and integral. Floats (including
    /// `8192.0`) count as absent rather than being truncated.
    pub fn pair(&self) -> Option<(u32, u32)> {
        let width = self.width.as_ref()?.as_u64()?;
        let height = self.height.as_ref()?.as_u64()?;
        Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
    }
}
