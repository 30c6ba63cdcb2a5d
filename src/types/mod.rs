//! Core types and configuration for the state faker
//!
//! This module contains the fundamental types shared by the generator and the
//! command line front end.
//!
//! # Overview
//!
//! - **Identifiers**: the per-document lineage UUID
//! - **Enums**: resource modes and output styles
//! - **Configuration**: generation parameters with clamping overrides and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use state_faker::types::*;
//!
//! // Defaults plus ordered overrides; crossed bounds are normalized
//! let config = GeneratorConfig::from_overrides([
//!     ConfigOverride::Resources(10),
//!     ConfigOverride::MultiInstanceMin(50),
//!     ConfigOverride::MultiInstanceMax(3),
//! ]);
//! assert_eq!(config.multi_instance_max, 50);
//!
//! let mode = ResourceMode::Data;
//! assert_eq!(mode.to_string(), "data");
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
