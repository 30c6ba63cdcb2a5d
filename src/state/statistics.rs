//! Document statistics
//!
//! Counts gathered from a finished document, used for the `--summary` report
//! and for checking generation rates in tests.

use crate::state::StateDocument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts describing one generated document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    // Resources
    /// Total number of resources
    pub total_resources: usize,
    /// Resources in managed mode
    pub managed_resources: usize,
    /// Data sources
    pub data_resources: usize,
    /// Resources placed inside a module
    pub module_resources: usize,
    /// Resources with more than one instance
    pub multi_instance_resources: usize,

    // Instances
    /// Total number of instances
    pub total_instances: usize,
    /// Largest instance count of any resource
    pub max_instances: usize,
    /// Instances carrying an identity block
    pub instances_with_identity: usize,
    /// Instances carrying private data
    pub instances_with_private: usize,
    /// Dependency references across all instances
    pub total_dependencies: usize,

    // Outputs
    /// Total number of outputs
    pub total_outputs: usize,
    /// Outputs whose type descriptor is structured rather than a primitive
    pub structured_outputs: usize,
}

impl DocumentStatistics {
    /// Collect statistics from a document
    pub fn from_document(doc: &StateDocument) -> Self {
        let mut stats = Self { total_outputs: doc.outputs.len(), ..Self::default() };

        for resource in &doc.resources {
            stats.total_resources += 1;
            if resource.mode.is_data() {
                stats.data_resources += 1;
            } else {
                stats.managed_resources += 1;
            }
            if resource.module.is_some() {
                stats.module_resources += 1;
            }
            if resource.is_multi_instance() {
                stats.multi_instance_resources += 1;
            }

            stats.total_instances += resource.instances.len();
            stats.max_instances = stats.max_instances.max(resource.instances.len());

            for instance in &resource.instances {
                if instance.identity.is_some() {
                    stats.instances_with_identity += 1;
                }
                if instance.private.is_some() {
                    stats.instances_with_private += 1;
                }
                stats.total_dependencies += instance.dependencies.len();
            }
        }

        stats.structured_outputs =
            doc.outputs.values().filter(|output| output.output_type.is_array()).count();

        stats
    }

    /// Percentage of resources that are data sources
    pub fn data_percentage(&self) -> f64 {
        percentage(self.data_resources, self.total_resources)
    }

    /// Percentage of resources placed inside a module
    pub fn module_percentage(&self) -> f64 {
        percentage(self.module_resources, self.total_resources)
    }

    /// Percentage of resources with several instances
    pub fn multi_instance_percentage(&self) -> f64 {
        percentage(self.multi_instance_resources, self.total_resources)
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "State Summary: {} resources ({} managed, {} data) | {} instances | {} in modules ({:.1}%) | {} multi-instance ({:.1}%) | {} outputs ({} structured)",
            self.total_resources,
            self.managed_resources,
            self.data_resources,
            self.total_instances,
            self.module_resources,
            self.module_percentage(),
            self.multi_instance_resources,
            self.multi_instance_percentage(),
            self.total_outputs,
            self.structured_outputs
        )
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for DocumentStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State Statistics:")?;
        writeln!(
            f,
            "  Resources: {} ({} managed, {} data, {:.1}% data)",
            self.total_resources,
            self.managed_resources,
            self.data_resources,
            self.data_percentage()
        )?;
        writeln!(f, "  Module Resources: {} ({:.1}%)", self.module_resources, self.module_percentage())?;
        writeln!(
            f,
            "  Multi-Instance Resources: {} ({:.1}%), largest has {}",
            self.multi_instance_resources,
            self.multi_instance_percentage(),
            self.max_instances
        )?;
        writeln!(f, "  Instances: {}", self.total_instances)?;
        writeln!(f, "    with identity: {}", self.instances_with_identity)?;
        writeln!(f, "    with private data: {}", self.instances_with_private)?;
        writeln!(f, "    dependency references: {}", self.total_dependencies)?;
        write!(f, "  Outputs: {} ({} structured)", self.total_outputs, self.structured_outputs)
    }
}
