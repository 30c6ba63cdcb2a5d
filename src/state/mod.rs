//! State document model
//!
//! The serializable document, its structural checks and summary statistics.
//!
//! # Overview
//!
//! - **document**: `StateDocument`, `Resource`, `Instance` and `Output`
//! - **validate**: index-key, provider-prefix, address and output-type checks
//! - **statistics**: counts for reporting
//!
//! # Usage Example
//!
//! ```rust
//! use state_faker::state::*;
//! use state_faker::types::{Lineage, OutputStyle};
//!
//! let doc = StateDocument::new(Lineage::new());
//! assert!(check_document(&doc).is_empty());
//!
//! let json = doc.to_json(OutputStyle::Compact).unwrap();
//! assert!(json.starts_with("{\"version\":4,"));
//! ```

pub mod document;
pub mod statistics;
pub mod validate;

pub use document::*;
pub use statistics::*;
pub use validate::{check_document, log_violations, value_conforms, Violation};
