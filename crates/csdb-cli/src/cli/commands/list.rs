//! `csdb manufacturers` / `models` / `formats` – the cascading choice lists.

use csdb_core::dataset::SensorDataset;
use csdb_core::selector::{self, Choice};

fn print_choices(choices: &[Choice]) {
    for choice in choices {
        println!("{choice}");
    }
}

pub fn run_manufacturers(dataset: &SensorDataset) {
    let choices = selector::manufacturer_choices(dataset);
    print_choices(&choices);
    if choices == [Choice::NoData] {
        println!("(run `csdb update` to download the sensor database)");
    }
}

pub fn run_models(dataset: &SensorDataset, manufacturer: &str) {
    print_choices(&selector::model_choices(dataset, Some(manufacturer)));
}

pub fn run_formats(dataset: &SensorDataset, manufacturer: &str, model: &str) {
    print_choices(&selector::format_choices(
        dataset,
        Some(manufacturer),
        Some(model),
    ));
}
