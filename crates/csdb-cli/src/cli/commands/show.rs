//! `csdb show` – print the leaf record for a fully-qualified selection.

use csdb_core::dataset::SensorDataset;
use csdb_core::selector::{self, Selection};

pub fn run_show(dataset: &SensorDataset, manufacturer: &str, model: &str, format: &str) {
    let selection = Selection::new(manufacturer, model, format);
    let Some(record) = selector::resolve_format(dataset, &selection) else {
        println!("{manufacturer} / {model} / {format}: not found");
        return;
    };
    println!("{manufacturer} / {model} / {format}");
    match record.mm.as_ref().and_then(|mm| mm.pair()) {
        Some((width, height)) => println!("  sensor:     {width}mm x {height}mm"),
        None => println!("  sensor:     n/a"),
    }
    match record.resolution.as_ref().and_then(|res| res.pair()) {
        Some((width, height)) => println!("  resolution: {width} x {height}"),
        None => println!("  resolution: n/a"),
    }
}
