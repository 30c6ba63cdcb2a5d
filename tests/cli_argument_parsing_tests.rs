//! Tests for CLI argument parsing and configuration layering
//!
//! These tests verify that command line flags map onto the generator
//! configuration, that config files sit between defaults and flags, and that
//! out-of-range values clamp instead of failing.

use clap::Parser;
use state_faker::generation::StateAssembler;
use state_faker::types::config::{defaults, CliArgs, GeneratorConfig};
use state_faker::types::OutputStyle;
use std::io::Write;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["state-faker"];
    argv.extend_from_slice(args);
    CliArgs::try_parse_from(argv).unwrap()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Test that every generation flag is parsed
#[test]
fn test_generation_flags() {
    let args = parse(&[
        "--outputs", "7",
        "--resources", "11",
        "--pctmulti", "35",
        "--multimin", "2",
        "--multimax", "9",
        "--pctmodule", "15",
        "--seed", "42",
    ]);

    let config = GeneratorConfig::from_cli_args(&args).unwrap();
    assert_eq!(config.num_outputs, 7);
    assert_eq!(config.num_resources, 11);
    assert_eq!(config.multi_instance_chance, 35);
    assert_eq!(config.multi_instance_min, 2);
    assert_eq!(config.multi_instance_max, 9);
    assert_eq!(config.module_chance, 15);
    assert_eq!(config.seed, Some(42));
}

/// Test that no flags yields the defaults
#[test]
fn test_defaults_without_flags() {
    let config = GeneratorConfig::from_cli_args(&parse(&[])).unwrap();

    assert_eq!(config.num_outputs, defaults::NUM_OUTPUTS);
    assert_eq!(config.num_resources, defaults::NUM_RESOURCES);
    assert_eq!(config.multi_instance_chance, defaults::MULTI_INSTANCE_CHANCE);
    assert_eq!(config.multi_instance_min, defaults::MULTI_INSTANCE_MIN);
    assert_eq!(config.multi_instance_max, defaults::MULTI_INSTANCE_MAX);
    assert_eq!(config.module_chance, defaults::MODULE_CHANCE);
    assert_eq!(config.seed, None);
}

/// Test that negative and oversized values clamp
#[test]
fn test_out_of_range_flags_clamp() {
    let args = parse(&[
        "--outputs", "-4",
        "--pctmulti", "250",
        "--pctmodule", "-10",
        "--multimin", "0",
        "--multimax", "-3",
    ]);

    let config = GeneratorConfig::from_cli_args(&args).unwrap();
    assert_eq!(config.num_outputs, 0);
    assert_eq!(config.multi_instance_chance, 100);
    assert_eq!(config.module_chance, 0);
    assert_eq!(config.multi_instance_min, 1);
    assert_eq!(config.multi_instance_max, 1);
}

/// Test that min above max raises max
#[test]
fn test_crossed_instance_flags() {
    let args = parse(&["--multimin", "50", "--multimax", "3"]);
    let config = GeneratorConfig::from_cli_args(&args).unwrap();

    assert_eq!(config.multi_instance_min, 50);
    assert_eq!(config.multi_instance_max, 50);
}

/// Test output and logging flags
#[test]
fn test_output_and_logging_flags() {
    let args = parse(&[
        "--format", "pretty",
        "--output", "fixture.tfstate",
        "--summary",
        "--verbose",
        "--log-dir", "logs",
    ]);

    assert_eq!(args.format.as_deref().map(|f| f.parse::<OutputStyle>()), Some(Ok(OutputStyle::Pretty)));
    assert_eq!(args.output.as_deref(), Some("fixture.tfstate"));
    assert!(args.summary);
    assert!(args.verbose);
    assert!(!args.debug);
    assert_eq!(args.log_dir.as_deref(), Some("logs"));

    let args = parse(&["--print-config", "-d"]);
    assert!(args.print_config);
    assert!(args.debug);
}

/// Test that non-numeric counts are rejected by the parser
#[test]
fn test_invalid_numbers_are_rejected() {
    assert!(CliArgs::try_parse_from(["state-faker", "--resources", "many"]).is_err());
    assert!(CliArgs::try_parse_from(["state-faker", "--seed", "-1"]).is_err());
}

/// Test that flags override the config file, which overrides defaults
#[test]
fn test_config_file_layering() {
    let file = config_file(r#"{ "num_resources": 20, "num_outputs": 8, "module_chance": 0 }"#);
    let path = file.path().to_str().unwrap();

    let args = parse(&["--config", path, "--outputs", "2"]);
    let config = GeneratorConfig::from_cli_args(&args).unwrap();

    assert_eq!(config.num_resources, 20);
    assert_eq!(config.num_outputs, 2);
    assert_eq!(config.module_chance, 0);
    assert_eq!(config.multi_instance_max, defaults::MULTI_INSTANCE_MAX);
}

/// Test that a missing config file is reported
#[test]
fn test_missing_config_file() {
    let args = parse(&["--config", "/definitely/not/here.json"]);
    let err = GeneratorConfig::from_cli_args(&args).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

/// Test the full path from flags to a generated document
#[test]
fn test_flags_drive_generation() {
    let args = parse(&[
        "--resources", "5",
        "--outputs", "3",
        "--pctmodule", "0",
        "--pctmulti", "0",
        "--seed", "3",
    ]);
    let config = GeneratorConfig::from_cli_args(&args).unwrap();
    let doc = StateAssembler::new(config).generate().unwrap();

    assert_eq!(doc.resources.len(), 5);
    assert_eq!(doc.outputs.len(), 3);
    assert!(doc.resources.iter().all(|r| r.module.is_none() && r.instances.len() == 1));
}

/// Test that the printed default configuration parses back
#[test]
fn test_print_config_roundtrip() {
    let json = GeneratorConfig::default().print_json().unwrap();
    let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, GeneratorConfig::default());
}
