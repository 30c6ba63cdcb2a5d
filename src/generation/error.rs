//! Error types for document generation
//!
//! Generation has a single failure kind: a structural field that could not be
//! populated. Either variant aborts the whole call and no partial document is
//! returned.

use crate::faker::ProviderError;
use thiserror::Error;

/// Terminal failure of a generation call
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A field provider failed while populating an instance
    #[error("random data population for instance {instance} of {resource} failed: {source}")]
    InstancePopulation {
        /// Address of the resource being built
        resource: String,
        /// Zero-based instance ordinal
        instance: usize,
        /// Provider failure
        #[source]
        source: ProviderError,
    },

    /// An output could not be named or populated
    #[error("output {index} generation failed: {source}")]
    OutputGeneration {
        /// Zero-based output ordinal
        index: usize,
        /// Provider failure
        #[source]
        source: ProviderError,
    },
}

impl GenerationError {
    /// Create an instance population error
    pub fn instance_population(
        resource: impl Into<String>,
        instance: usize,
        source: ProviderError,
    ) -> Self {
        Self::InstancePopulation { resource: resource.into(), instance, source }
    }

    /// Create an output generation error
    pub fn output_generation(index: usize, source: ProviderError) -> Self {
        Self::OutputGeneration { index, source }
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
