//! State Faker
//!
//! A generator of synthetic, structurally valid infrastructure state
//! documents (state format version 4) for use as test fixtures, demo data and
//! load-test inputs.
//!
//! # Overview
//!
//! A document is a tree: the root carries a lineage identifier and a set of
//! named outputs, and owns a list of resources. Each resource owns one or
//! more instances, and several instances of one resource are told apart by
//! unique index keys. Generation is driven by a small configuration that
//! controls counts and probabilities; every other value comes from a shared
//! random source.
//!
//! ## Key Features
//!
//! - **Configurable Shape**: resource and output counts, module placement and
//!   multi-instance cardinality, all clamped rather than rejected
//! - **Realistic Payloads**: five attribute archetypes and five structured
//!   output archetypes with internally consistent values
//! - **Explicit Randomization Policy**: one weighted-choice utility, a field
//!   role registry and a uniqueness tracker with visible reset scopes
//! - **Reproducible Runs**: an optional seed fixes every draw, lineage included
//!
//! ## Quick Start
//!
//! ```rust
//! use state_faker::*;
//!
//! let config = GeneratorConfig {
//!     num_resources: 5,
//!     num_outputs: 3,
//!     module_chance: 0,
//!     multi_instance_chance: 0,
//!     ..Default::default()
//! };
//!
//! let doc = StateAssembler::new(config).generate()?;
//! assert_eq!(doc.resources.len(), 5);
//! assert!(doc.resources.iter().all(|r| r.module.is_none()));
//!
//! let json = doc.to_json(OutputStyle::Pretty)?;
//! println!("{}", json);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: configuration, resource modes and the lineage identifier
//! - [`faker`]: randomization providers and registries
//! - [`state`]: the serializable document model, checks and statistics
//! - [`generation`]: the assembler, its errors and logging setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Faker     │    │ Generation  │
//! │             │    │             │    │             │
//! │ Config      │◄───┤ Chance      │◄───┤ Assembler   │
//! │ Enums       │    │ Registries  │    │ Errors      │
//! │ Lineage     │    │ Uniqueness  │    │ Logging     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                  │                  │
//!        │           ┌─────────────┐           │
//!        └───────────┤   State     │◄──────────┘
//!                    │ Document    │
//!                    │ Validation  │
//!                    │ Statistics  │
//!                    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod faker;
pub mod generation;
pub mod state;
pub mod types;

// Core types and configuration
pub use types::{
    CliArgs, ConfigError, ConfigFile, ConfigOverride, GeneratorConfig, Lineage, OutputStyle,
    ResourceMode,
};

// Randomization providers
pub use faker::{FieldRegistry, FieldRole, Probability, ProviderError, UniquenessTracker};

// Document model
pub use state::{
    check_document, DocumentStatistics, Instance, Output, Resource, StateDocument, Violation,
};

// Generation
pub use generation::{
    generate_document, GenerationError, GenerationResult, LoggingConfig, StateAssembler,
};
