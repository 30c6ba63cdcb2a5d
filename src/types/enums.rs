//! Enumeration types for the state faker
//!
//! This module contains the enumerations shared by the generator, the document
//! model and the command line front end: resource modes and output styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a resource is owned by the state-management tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    /// Created and tracked by the tool
    Managed,
    /// Read-only lookup of something that already exists
    Data,
}

impl ResourceMode {
    /// Whether this is a data source
    pub fn is_data(&self) -> bool {
        matches!(self, ResourceMode::Data)
    }
}

impl fmt::Display for ResourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceMode::Managed => write!(f, "managed"),
            ResourceMode::Data => write!(f, "data"),
        }
    }
}

impl FromStr for ResourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "managed" => Ok(ResourceMode::Managed),
            "data" => Ok(ResourceMode::Data),
            _ => Err(format!("Unknown resource mode: {}", s)),
        }
    }
}

/// JSON rendering style for the emitted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStyle::Compact => write!(f, "compact"),
            OutputStyle::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" | "json" => Ok(OutputStyle::Compact),
            "pretty" | "indent" => Ok(OutputStyle::Pretty),
            _ => Err(format!("Unknown output style: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_mode_display() {
        assert_eq!(format!("{}", ResourceMode::Managed), "managed");
        assert_eq!(format!("{}", ResourceMode::Data), "data");
    }

    #[test]
    fn test_resource_mode_from_str() {
        assert_eq!("managed".parse::<ResourceMode>().unwrap(), ResourceMode::Managed);
        assert_eq!("DATA".parse::<ResourceMode>().unwrap(), ResourceMode::Data);

        // Test error case
        assert!("ephemeral".parse::<ResourceMode>().is_err());
    }

    #[test]
    fn test_resource_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ResourceMode::Managed).unwrap(), "\"managed\"");
        assert_eq!(serde_json::to_string(&ResourceMode::Data).unwrap(), "\"data\"");

        let mode: ResourceMode = serde_json::from_str("\"data\"").unwrap();
        assert!(mode.is_data());
    }

    #[test]
    fn test_output_style_from_str() {
        assert_eq!("compact".parse::<OutputStyle>().unwrap(), OutputStyle::Compact);
        assert_eq!("Pretty".parse::<OutputStyle>().unwrap(), OutputStyle::Pretty);
        assert_eq!(OutputStyle::default(), OutputStyle::Compact);

        assert!("yaml".parse::<OutputStyle>().is_err());
    }
}
