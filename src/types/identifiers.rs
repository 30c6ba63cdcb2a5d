//! Identifier types for generated state documents
//!
//! The lineage is the only identifier the document format defines. It is a
//! hyphenated v4 UUID shared by every serial of the same state.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::{Builder, Uuid};

/// Per-document lineage identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lineage(pub Uuid);

impl Lineage {
    /// Create a new lineage from the operating system's entropy
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a v4 lineage from the given random source
    ///
    /// Seeded sources produce the same lineage on every run.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Lineage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for Lineage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.hyphenated().to_string())
    }
}

impl<'de> Deserialize<'de> for Lineage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
        Ok(Lineage(uuid))
    }
}
