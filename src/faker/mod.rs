//! Randomization providers
//!
//! Everything that turns a random source into plausible values lives here.
//!
//! # Overview
//!
//! - **chance**: the weighted-choice utility every probability goes through
//! - **words**: dictionary words, sentences, user names and secrets
//! - **unique**: the explicit uniqueness tracker and its reset scopes
//! - **aws**: ids, regions, ARNs, resource catalogs and module addresses
//! - **attributes**: the per-archetype attribute payload registry
//! - **outputs**: the simple and structured output registry
//! - **fields**: the role → provider registry for auxiliary instance fields
//!
//! # Usage Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use state_faker::faker::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let attributes = random_attributes(&mut rng);
//! assert!(attributes.get("arn").is_some());
//!
//! let output = random_output(&mut rng);
//! assert!(!output.output_type.is_null());
//!
//! let mut tracker = UniquenessTracker::new();
//! let key = tracker.unique(&mut rng, |r| words::word(r).to_string()).unwrap();
//! assert!(!tracker.claim(&key));
//! ```

pub mod attributes;
pub mod aws;
pub mod chance;
pub mod fields;
pub mod outputs;
pub mod unique;
pub mod words;

// Re-export all public types for convenience
pub use attributes::{random_attributes, AttributeArchetype};
pub use chance::{pick, Probability};
pub use fields::{FieldProvider, FieldRegistry, FieldRole, ProviderContext, ProviderError};
pub use outputs::{random_output, ComplexOutputKind, SimpleOutputKind};
pub use unique::{UniquenessError, UniquenessTracker};
