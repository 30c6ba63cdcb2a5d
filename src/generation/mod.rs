//! Document generation
//!
//! This module contains the state assembler and the supporting error and
//! logging infrastructure.
//!
//! # Overview
//!
//! - **assembler**: `StateAssembler`, which turns a `GeneratorConfig` into a
//!   `StateDocument`
//! - **error**: the terminal `GenerationError`
//! - **logging**: `LoggingConfig` for the tracing subscriber
//!
//! # Usage Example
//!
//! ```rust
//! use state_faker::generation::StateAssembler;
//! use state_faker::types::GeneratorConfig;
//!
//! let config = GeneratorConfig { num_resources: 5, num_outputs: 2, ..Default::default() };
//! let doc = StateAssembler::with_seed(config, 42).generate()?;
//!
//! assert_eq!(doc.resources.len(), 5);
//! assert_eq!(doc.outputs.len(), 2);
//! # Ok::<(), state_faker::generation::GenerationError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod logging;

pub use assembler::*;
pub use error::*;
pub use logging::*;
