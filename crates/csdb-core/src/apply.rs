//! Applying resolved sensor data onto the host's scene objects.
//!
//! The host hands in mutable references to its camera and render settings
//! per invocation; nothing here touches the dataset. A lookup miss and a
//! leaf without the requested data are reported differently so the host can
//! message the user accordingly, but both leave the target untouched.

use serde::{Deserialize, Serialize};

use crate::dataset::SensorDataset;
use crate::report::StatusReport;
use crate::selector::{self, Selection};

/// How the camera maps the sensor onto the output frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorFit {
    #[default]
    Auto,
    Horizontal,
    Vertical,
}

/// The host camera surface consumed by `apply_sensor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSensor {
    pub sensor_fit: SensorFit,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
}

impl Default for CameraSensor {
    fn default() -> Self {
        Self {
            sensor_fit: SensorFit::Auto,
            sensor_width_mm: 36.0,
            sensor_height_mm: 24.0,
        }
    }
}

/// The host render-settings surface consumed by `apply_resolution`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
        }
    }
}

/// Result of an apply operation: whether the target changed, and the status
/// message for the host to display.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub changed: bool,
    pub report: StatusReport,
}

impl ApplyOutcome {
    fn unchanged(report: StatusReport) -> Self {
        Self {
            changed: false,
            report,
        }
    }
}

/// Write the selection's physical sensor dimensions onto `camera`.
pub fn apply_sensor(
    dataset: &SensorDataset,
    selection: &Selection,
    camera: &mut CameraSensor,
) -> ApplyOutcome {
    let Some(record) = selector::resolve_format(dataset, selection) else {
        return ApplyOutcome::unchanged(StatusReport::error(
            "Could not apply sensor settings. Data not found.",
        ));
    };
    let Some((width, height)) = record.mm.as_ref().and_then(|mm| mm.pair()) else {
        return ApplyOutcome::unchanged(StatusReport::warning(
            "Selected format has no sensor data.",
        ));
    };
    camera.sensor_fit = SensorFit::Horizontal;
    camera.sensor_width_mm = width;
    camera.sensor_height_mm = height;
    ApplyOutcome {
        changed: true,
        report: StatusReport::info(format!("Sensor set to: {width}mm x {height}mm")),
    }
}

/// Write the selection's pixel resolution onto `render`. Only integral
/// resolutions apply; a float pixel count counts as missing data.
pub fn apply_resolution(
    dataset: &SensorDataset,
    selection: &Selection,
    render: &mut RenderSettings,
) -> ApplyOutcome {
    let Some(record) = selector::resolve_format(dataset, selection) else {
        return ApplyOutcome::unchanged(StatusReport::error(
            "Could not apply resolution settings. Data not found.",
        ));
    };
    let Some((width, height)) = record.resolution.as_ref().and_then(|res| res.pair()) else {
        return ApplyOutcome::unchanged(StatusReport::warning(
            "Selected format has no resolution data.",
        ));
    };
    render.resolution_x = width;
    render.resolution_y = height;
    ApplyOutcome {
        changed: true,
        report: StatusReport::info(format!("Resolution set to: {width} x {height}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn acme() -> SensorDataset {
        SensorDataset::from_slice(
            br#"{"Acme": {"X1": {"sensor dimensions": {
                "Full Frame": {
                    "mm": {"width": 36.0, "height": 24.0},
                    "resolution": {"width": 8192, "height": 5464}
                },
                "Scan": {
                    "resolution": {"width": 4096.0, "height": 2160}
                }
            }}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn apply_sensor_writes_dimensions_and_fit() {
        let dataset = acme();
        let mut camera = CameraSensor::default();
        let outcome = apply_sensor(
            &dataset,
            &Selection::new("Acme", "X1", "Full Frame"),
            &mut camera,
        );
        assert!(outcome.changed);
        assert_eq!(outcome.report.severity, Severity::Info);
        assert_eq!(camera.sensor_fit, SensorFit::Horizontal);
        assert_eq!(camera.sensor_width_mm, 36.0);
        assert_eq!(camera.sensor_height_mm, 24.0);
    }

    #[test]
    fn apply_sensor_warns_when_leaf_has_no_mm() {
        let dataset = acme();
        let mut camera = CameraSensor::default();
        let before = camera.clone();
        let outcome = apply_sensor(&dataset, &Selection::new("Acme", "X1", "Scan"), &mut camera);
        assert!(!outcome.changed);
        assert_eq!(outcome.report.severity, Severity::Warning);
        assert_eq!(camera, before);
    }

    #[test]
    fn apply_sensor_errors_on_lookup_miss() {
        let dataset = acme();
        let mut camera = CameraSensor::default();
        let before = camera.clone();
        let outcome = apply_sensor(&dataset, &Selection::new("Acme", "X1", "Nope"), &mut camera);
        assert!(!outcome.changed);
        assert_eq!(outcome.report.severity, Severity::Error);
        assert_eq!(camera, before);
    }

    #[test]
    fn apply_resolution_writes_pixel_counts() {
        let dataset = acme();
        let mut render = RenderSettings::default();
        let outcome = apply_resolution(
            &dataset,
            &Selection::new("Acme", "X1", "Full Frame"),
            &mut render,
        );
        assert!(outcome.changed);
        assert_eq!(render.resolution_x, 8192);
        assert_eq!(render.resolution_y, 5464);
        assert_eq!(outcome.report.message, "Resolution set to: 8192 x 5464");
    }

    #[test]
    fn apply_resolution_rejects_float_pixel_counts() {
        let dataset = acme();
        let mut render = RenderSettings::default();
        let before = render.clone();
        let outcome = apply_resolution(&dataset, &Selection::new("Acme", "X1", "Scan"), &mut render);
        assert!(!outcome.changed);
        assert_eq!(outcome.report.severity, Severity::Warning);
        assert_eq!(render, before);
    }

    #[test]
    fn apply_resolution_errors_on_incomplete_selection() {
        let dataset = acme();
        let mut render = RenderSettings::default();
        let selection = Selection {
            manufacturer: None,
            model: Some("X1".into()),
            format: Some("Full Frame".into()),
        };
        let outcome = apply_resolution(&dataset, &selection, &mut render);
        assert_eq!(outcome.report.severity, Severity::Error);
        assert!(!outcome.changed);
    }
}
