//! Configuration structures for the state faker
//!
//! This module contains the generator configuration, the ordered override
//! operations applied on top of the defaults, and the command line / config
//! file intake that produces those overrides.
//!
//! Out-of-range values are never rejected. Percentages clamp into `0..=100`,
//! instance bounds clamp to at least one, and a final normalization pass
//! raises the maximum instance count to the minimum when they cross.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Default generation parameters
pub mod defaults {
    /// Top-level outputs per document
    pub const NUM_OUTPUTS: usize = 3;

    /// Resources per document
    pub const NUM_RESOURCES: usize = 3;

    /// Percent chance that a resource has several instances
    pub const MULTI_INSTANCE_CHANCE: u32 = 10;

    /// Smallest instance count for a multi-instance resource
    pub const MULTI_INSTANCE_MIN: usize = 3;

    /// Largest instance count for a multi-instance resource
    pub const MULTI_INSTANCE_MAX: usize = 50;

    /// Percent chance that a resource lives inside a module
    pub const MODULE_CHANCE: u32 = 70;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "state-faker",
    version,
    about = "State Faker - Generates realistic infrastructure state documents",
    long_about = "Generates structurally valid, realistic-looking infrastructure state documents (format version 4) for use as test fixtures, demo data or load-test inputs.

EXAMPLES:
    # Generate a small document with default settings
    state-faker

    # Generate a larger document
    state-faker --resources 200 --outputs 20

    # Every resource gets exactly 12 instances
    state-faker --pctmulti 100 --multimin 12 --multimax 12

    # Reproducible output, pretty printed to a file
    state-faker --seed 42 --format pretty --output fixture.tfstate

    # Generate configuration template
    state-faker --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Out-of-range values are clamped, never rejected."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of outputs to generate
    #[arg(long, allow_negative_numbers = true, help = "The number of outputs to generate")]
    pub outputs: Option<i64>,

    /// Number of resources to generate
    #[arg(long, allow_negative_numbers = true, help = "The number of resources to generate")]
    pub resources: Option<i64>,

    /// Percentage chance that a resource is multi-instance
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "The percentage chance a resource is multi-instance",
        long_help = "Percentage chance (0-100) that a resource has several instances distinguished by index keys. Default: 10"
    )]
    pub pctmulti: Option<i64>,

    /// Minimum instance count for multi-instance resources
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "The minimum number of instances for multi-instance resources"
    )]
    pub multimin: Option<i64>,

    /// Maximum instance count for multi-instance resources
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "The maximum number of instances for multi-instance resources"
    )]
    pub multimax: Option<i64>,

    /// Percentage chance that a resource appears within a module
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "The percentage chance a resource appears within a module",
        long_help = "Percentage chance (0-100) that a resource is placed inside a nested module. Default: 70"
    )]
    pub pctmodule: Option<i64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output style for the generated document
    #[arg(
        long,
        help = "Output style (compact or pretty)",
        long_help = "JSON rendering of the generated document. Supported styles: compact, pretty. Default: compact"
    )]
    pub format: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(short, long, help = "Write the document to this file instead of stdout")]
    pub output: Option<String>,

    /// Print a summary of the generated document to stderr
    #[arg(long, help = "Print a summary of the generated document to stderr")]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Also write JSON logs to a daily rolling file in this directory
    #[arg(long, help = "Also write JSON logs to a daily rolling file in this directory")]
    pub log_dir: Option<String>,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Overrides requested on the command line, in application order
    pub fn overrides(&self) -> Vec<ConfigOverride> {
        let mut overrides = Vec::new();

        if let Some(value) = self.outputs {
            overrides.push(ConfigOverride::Outputs(value));
        }
        if let Some(value) = self.resources {
            overrides.push(ConfigOverride::Resources(value));
        }
        if let Some(value) = self.pctmulti {
            overrides.push(ConfigOverride::MultiInstanceChance(value));
        }
        if let Some(value) = self.multimax {
            overrides.push(ConfigOverride::MultiInstanceMax(value));
        }
        if let Some(value) = self.multimin {
            overrides.push(ConfigOverride::MultiInstanceMin(value));
        }
        if let Some(value) = self.pctmodule {
            overrides.push(ConfigOverride::ModuleChance(value));
        }
        if let Some(value) = self.seed {
            overrides.push(ConfigOverride::Seed(value));
        }

        overrides
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of outputs to generate
    pub num_outputs: Option<i64>,

    /// Number of resources to generate
    pub num_resources: Option<i64>,

    /// Percent chance (0-100) that a resource has several instances
    pub multi_instance_chance: Option<i64>,

    /// Minimum instance count for multi-instance resources
    pub multi_instance_min: Option<i64>,

    /// Maximum instance count for multi-instance resources
    pub multi_instance_max: Option<i64>,

    /// Percent chance (0-100) that a resource lives inside a module
    pub module_chance: Option<i64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

impl ConfigFile {
    /// Overrides described by the file, in application order
    pub fn overrides(&self) -> Vec<ConfigOverride> {
        [
            self.num_outputs.map(ConfigOverride::Outputs),
            self.num_resources.map(ConfigOverride::Resources),
            self.multi_instance_chance.map(ConfigOverride::MultiInstanceChance),
            self.multi_instance_max.map(ConfigOverride::MultiInstanceMax),
            self.multi_instance_min.map(ConfigOverride::MultiInstanceMin),
            self.module_chance.map(ConfigOverride::ModuleChance),
            self.seed.map(ConfigOverride::Seed),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A single adjustment applied on top of a base configuration
///
/// Inputs are signed so that negative values clamp instead of failing to
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOverride {
    /// Number of outputs, clamped to zero or more
    Outputs(i64),
    /// Number of resources, clamped to zero or more
    Resources(i64),
    /// Multi-instance chance, clamped into `0..=100`
    MultiInstanceChance(i64),
    /// Minimum multi-instance count, clamped to one or more
    MultiInstanceMin(i64),
    /// Maximum multi-instance count, clamped to one or more
    MultiInstanceMax(i64),
    /// Module chance, clamped into `0..=100`
    ModuleChance(i64),
    /// Fixed random seed
    Seed(u64),
}

impl ConfigOverride {
    /// Apply this override to a configuration in place
    pub fn apply(&self, config: &mut GeneratorConfig) {
        match *self {
            ConfigOverride::Outputs(count) => config.num_outputs = clamp_count(count, 0),
            ConfigOverride::Resources(count) => config.num_resources = clamp_count(count, 0),
            ConfigOverride::MultiInstanceChance(percent) => {
                config.multi_instance_chance = clamp_percent(percent)
            }
            ConfigOverride::MultiInstanceMin(min) => config.multi_instance_min = clamp_count(min, 1),
            ConfigOverride::MultiInstanceMax(max) => config.multi_instance_max = clamp_count(max, 1),
            ConfigOverride::ModuleChance(percent) => config.module_chance = clamp_percent(percent),
            ConfigOverride::Seed(seed) => config.seed = Some(seed),
        }
    }
}

fn clamp_percent(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}

fn clamp_count(value: i64, floor: usize) -> usize {
    usize::try_from(value).unwrap_or(0).max(floor)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Parameters for one document generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of top-level outputs
    pub num_outputs: usize,

    /// Number of resources
    pub num_resources: usize,

    /// Percent chance (0-100) that a resource has several instances
    pub multi_instance_chance: u32,

    /// Minimum instance count for multi-instance resources (at least 1)
    pub multi_instance_min: usize,

    /// Maximum instance count for multi-instance resources (at least the minimum)
    pub multi_instance_max: usize,

    /// Percent chance (0-100) that a resource lives inside a module
    pub module_chance: u32,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_outputs: defaults::NUM_OUTPUTS,
            num_resources: defaults::NUM_RESOURCES,
            multi_instance_chance: defaults::MULTI_INSTANCE_CHANCE,
            multi_instance_min: defaults::MULTI_INSTANCE_MIN,
            multi_instance_max: defaults::MULTI_INSTANCE_MAX,
            module_chance: defaults::MODULE_CHANCE,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Apply overrides in order on top of `base`, then normalize
    pub fn with_overrides<I>(base: Self, overrides: I) -> Self
    where
        I: IntoIterator<Item = ConfigOverride>,
    {
        let mut config = base;
        for o in overrides {
            o.apply(&mut config);
        }
        config.normalize();
        config
    }

    /// Apply overrides in order on top of the defaults, then normalize
    pub fn from_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = ConfigOverride>,
    {
        Self::with_overrides(Self::default(), overrides)
    }

    /// Enforce the field invariants
    ///
    /// Percentages are clamped, the minimum instance count is raised to one,
    /// and the maximum is raised to the minimum. The minimum is never lowered.
    pub fn normalize(&mut self) {
        self.multi_instance_chance = self.multi_instance_chance.min(100);
        self.module_chance = self.module_chance.min(100);
        self.multi_instance_min = self.multi_instance_min.max(1);
        self.multi_instance_max = self.multi_instance_max.max(1);
        if self.multi_instance_min > self.multi_instance_max {
            self.multi_instance_max = self.multi_instance_min;
        }
    }

    /// Create configuration from parsed CLI arguments
    ///
    /// Layers are applied as defaults, then the config file, then the flags.
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut overrides = Vec::new();

        if let Some(config_path) = &args.config {
            overrides.extend(Self::read_config_file(config_path)?.overrides());
        }

        overrides.extend(args.overrides());

        Ok(Self::from_overrides(overrides))
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_file = Self::read_config_file(path)?;
        Ok(Self::from_overrides(config_file.overrides()))
    }

    fn read_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Instance counts drawn for multi-instance resources
    pub fn instance_range(&self) -> RangeInclusive<usize> {
        self.multi_instance_min..=self.multi_instance_max.max(self.multi_instance_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs::try_parse_from(["test"]).unwrap()
    }

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();

        assert_eq!(config.num_outputs, 3);
        assert_eq!(config.num_resources, 3);
        assert_eq!(config.multi_instance_chance, 10);
        assert_eq!(config.multi_instance_min, 3);
        assert_eq!(config.multi_instance_max, 50);
        assert_eq!(config.module_chance, 70);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_overrides_apply_in_order() {
        let config = GeneratorConfig::from_overrides([
            ConfigOverride::Resources(5),
            ConfigOverride::Resources(9),
            ConfigOverride::Outputs(1),
        ]);

        assert_eq!(config.num_resources, 9);
        assert_eq!(config.num_outputs, 1);
        // Untouched fields keep their defaults
        assert_eq!(config.module_chance, defaults::MODULE_CHANCE);
    }

    #[test]
    fn test_percentages_are_clamped() {
        let config = GeneratorConfig::from_overrides([
            ConfigOverride::MultiInstanceChance(150),
            ConfigOverride::ModuleChance(-20),
        ]);

        assert_eq!(config.multi_instance_chance, 100);
        assert_eq!(config.module_chance, 0);
    }

    #[test]
    fn test_instance_bounds_are_clamped_to_one() {
        let config = GeneratorConfig::from_overrides([
            ConfigOverride::MultiInstanceMin(0),
            ConfigOverride::MultiInstanceMax(-4),
        ]);

        assert_eq!(config.multi_instance_min, 1);
        assert_eq!(config.multi_instance_max, 1);
    }

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        let config = GeneratorConfig::from_overrides([
            ConfigOverride::Outputs(-1),
            ConfigOverride::Resources(-100),
        ]);

        assert_eq!(config.num_outputs, 0);
        assert_eq!(config.num_resources, 0);
    }

    #[test]
    fn test_crossed_bounds_raise_max_to_min() {
        let config = GeneratorConfig::from_overrides([
            ConfigOverride::MultiInstanceMin(50),
            ConfigOverride::MultiInstanceMax(3),
        ]);

        assert_eq!(config.multi_instance_min, 50);
        assert_eq!(config.multi_instance_max, 50);
        assert_eq!(config.instance_range(), 50..=50);
    }

    #[test]
    fn test_normalize_never_lowers_min() {
        let mut config = GeneratorConfig {
            multi_instance_min: 20,
            multi_instance_max: 2,
            multi_instance_chance: 250,
            ..Default::default()
        };
        config.normalize();

        assert_eq!(config.multi_instance_min, 20);
        assert_eq!(config.multi_instance_max, 20);
        assert_eq!(config.multi_instance_chance, 100);
    }

    #[test]
    fn test_cli_parsing() {
        let args = CliArgs::try_parse_from([
            "test",
            "--outputs",
            "4",
            "--resources",
            "12",
            "--pctmulti",
            "100",
            "--multimin",
            "12",
            "--multimax",
            "12",
            "--pctmodule",
            "-5",
            "--seed",
            "99",
        ])
        .unwrap();

        let config = GeneratorConfig::from_cli_args(&args).unwrap();
        assert_eq!(config.num_outputs, 4);
        assert_eq!(config.num_resources, 12);
        assert_eq!(config.multi_instance_chance, 100);
        assert_eq!(config.instance_range(), 12..=12);
        assert_eq!(config.module_chance, 0);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_cli_no_flags_uses_defaults() {
        let config = GeneratorConfig::from_cli_args(&empty_args()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "num_outputs": 7,
            "num_resources": 40,
            "multi_instance_min": 9,
            "multi_instance_max": 4,
            "module_chance": 0,
            "seed": 12345
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = GeneratorConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.num_outputs, 7);
        assert_eq!(config.num_resources, 40);
        assert_eq!(config.multi_instance_min, 9);
        assert_eq!(config.multi_instance_max, 9);
        assert_eq!(config.module_chance, 0);
        assert_eq!(config.multi_instance_chance, defaults::MULTI_INSTANCE_CHANCE);
        assert_eq!(config.seed, Some(12345));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{"num_resources": 40, "num_outputs": 2}"#).unwrap();
        temp_file.flush().unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let args =
            CliArgs::try_parse_from(["test", "--config", &path, "--resources", "8"]).unwrap();

        let config = GeneratorConfig::from_cli_args(&args).unwrap();
        assert_eq!(config.num_resources, 8);
        assert_eq!(config.num_outputs, 2);
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            GeneratorConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            GeneratorConfig::from_file(temp_file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_generator_config_serialization() {
        let config = GeneratorConfig::default();
        let json = config.print_json().unwrap();
        assert!(json.contains("\"num_resources\": 3"));

        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
