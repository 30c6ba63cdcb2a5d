//! State document model
//!
//! Serde types mirroring the on-disk JSON layout of a version 4 state file.
//! Optional fields are omitted from the JSON when absent, never written as
//! `null`.

use crate::types::{Lineage, OutputStyle, ResourceMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// State format version written by the generator
pub const FORMAT_VERSION: u32 = 4;

/// Tool version recorded in generated documents
pub const TOOL_VERSION: &str = "1.5.6";

/// Serial of a freshly generated state
pub const INITIAL_SERIAL: u64 = 1;

/// The root artifact: one snapshot of provisioned infrastructure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    /// State format version
    pub version: u32,

    /// Version of the tool that wrote the state
    pub terraform_version: String,

    /// Write counter
    pub serial: u64,

    /// Identifier shared by every serial of the same state
    pub lineage: Lineage,

    /// Top-level outputs keyed by name
    pub outputs: BTreeMap<String, Output>,

    /// Resources in generation order
    pub resources: Vec<Resource>,
}

impl StateDocument {
    /// An empty document with a fixed version, serial and the given lineage
    pub fn new(lineage: Lineage) -> Self {
        Self {
            version: FORMAT_VERSION,
            terraform_version: TOOL_VERSION.to_string(),
            serial: INITIAL_SERIAL,
            lineage,
            outputs: BTreeMap::new(),
            resources: Vec::new(),
        }
    }

    /// Number of resources
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Number of outputs
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Number of instances across all resources
    pub fn instance_count(&self) -> usize {
        self.resources.iter().map(|r| r.instances.len()).sum()
    }

    /// Render the document as JSON
    pub fn to_json(&self, style: OutputStyle) -> Result<String, serde_json::Error> {
        match style {
            OutputStyle::Compact => serde_json::to_string(self),
            OutputStyle::Pretty => serde_json::to_string_pretty(self),
        }
    }

    /// Parse a document from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One declared infrastructure object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Module address, absent for root-module resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Managed resource or data source
    pub mode: ResourceMode,

    /// Resource type name
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Resource block name
    pub name: String,

    /// Provider configuration address
    pub provider: String,

    /// One or more instances
    pub instances: Vec<Instance>,
}

impl Resource {
    /// The resource address, e.g. `module.app.data.aws_vpc.main`
    pub fn address(&self) -> String {
        let mut address = String::new();
        if let Some(module) = &self.module {
            address.push_str(module);
            address.push('.');
        }
        if self.mode.is_data() {
            address.push_str("data.");
        }
        address.push_str(&self.resource_type);
        address.push('.');
        address.push_str(&self.name);
        address
    }

    /// Addresses of every instance, with `["key"]` suffixes for keyed instances
    pub fn instance_addresses(&self) -> Vec<String> {
        let base = self.address();
        self.instances
            .iter()
            .map(|instance| match &instance.index_key {
                Some(key) => format!("{}[\"{}\"]", base, key),
                None => base.clone(),
            })
            .collect()
    }

    /// Whether the resource has several keyed instances
    pub fn is_multi_instance(&self) -> bool {
        self.instances.len() > 1
    }
}

/// One concrete realization of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Instance {
    /// Instance key; present exactly when the resource has several instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_key: Option<String>,

    /// Attribute schema version
    pub schema_version: u32,

    /// Type-specific attribute payload
    pub attributes: Value,

    /// Paths of sensitive attributes
    pub sensitive_attributes: Vec<String>,

    /// Identity schema version
    pub identity_schema_version: u32,

    /// Identity payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Value>,

    /// Opaque provider-private data, base64 encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<String>,

    /// Addresses of resources this instance depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// A named top-level value with its type descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// The value
    pub value: Value,

    /// Type descriptor describing `value`
    #[serde(rename = "type")]
    pub output_type: Value,
}

impl Output {
    /// Pair a value with its type descriptor
    pub fn new(value: Value, output_type: Value) -> Self {
        Self { value, output_type }
    }
}
