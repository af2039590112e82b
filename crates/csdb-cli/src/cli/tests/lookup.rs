//! Tests for the lookup commands: manufacturers, models, formats, show,
//! apply-sensor, apply-resolution.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_manufacturers() {
    match parse(&["csdb", "manufacturers"]) {
        CliCommand::Manufacturers => {}
        _ => panic!("expected Manufacturers"),
    }
}

#[test]
fn cli_parse_models() {
    match parse(&["csdb", "models", "Acme"]) {
        CliCommand::Models { manufacturer } => assert_eq!(manufacturer, "Acme"),
        _ => panic!("expected Models"),
    }
}

#[test]
fn cli_parse_models_requires_manufacturer() {
    assert!(Cli::try_parse_from(["csdb", "models"]).is_err());
}

#[test]
fn cli_parse_formats() {
    match parse(&["csdb", "formats", "Acme", "X1"]) {
        CliCommand::Formats {
            manufacturer,
            model,
        } => {
            assert_eq!(manufacturer, "Acme");
            assert_eq!(model, "X1");
        }
        _ => panic!("expected Formats"),
    }
}

#[test]
fn cli_parse_show_with_spaced_format() {
    match parse(&["csdb", "show", "Acme", "X1", "Full Frame"]) {
        CliCommand::Show {
            manufacturer,
            model,
            format,
        } => {
            assert_eq!(manufacturer, "Acme");
            assert_eq!(model, "X1");
            assert_eq!(format, "Full Frame");
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_apply_sensor() {
    match parse(&["csdb", "apply-sensor", "Acme", "X1", "Full Frame"]) {
        CliCommand::ApplySensor { format, .. } => assert_eq!(format, "Full Frame"),
        _ => panic!("expected ApplySensor"),
    }
}

#[test]
fn cli_parse_apply_resolution() {
    match parse(&["csdb", "apply-resolution", "Acme", "X1", "Full Frame"]) {
        CliCommand::ApplyResolution { format, .. } => assert_eq!(format, "Full Frame"),
        _ => panic!("expected ApplyResolution"),
    }
}
