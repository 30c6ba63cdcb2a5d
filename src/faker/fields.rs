//! Field-level randomization providers
//!
//! Each auxiliary instance field has a role, and the registry maps every role
//! to the function that fills it. The assembler walks the registry once per
//! instance. Providers are independent of one another; nothing correlates a
//! resource's module with the modules its dependencies point into, apart from
//! never reusing the owning module itself.

use crate::faker::attributes::random_attributes;
use crate::faker::aws;
use crate::faker::chance::Probability;
use crate::faker::unique::UniquenessError;
use crate::state::Instance;
use crate::types::ResourceMode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::{Rng, RngCore};
use serde_json::json;
use std::fmt;

/// Chance that an instance carries an identity payload
const IDENTITY_CHANCE: Probability = Probability::percent(40);

/// Chance that an instance carries private data
const PRIVATE_CHANCE: Probability = Probability::percent(20);

/// Chance that a dependency points into a module
const DEPENDENCY_MODULE_CHANCE: Probability = Probability::percent(30);

/// Most dependencies listed on a single instance
pub const MAX_DEPENDENCIES: usize = 3;

/// Attempts at drawing a dependency module that differs from the owner's
const MODULE_REDRAW_ATTEMPTS: usize = 8;

/// Failure to populate an instance field
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A unique value could not be produced
    #[error("{role}: {source}")]
    Uniqueness {
        /// Field being populated
        role: String,
        /// Underlying tracker error
        #[source]
        source: UniquenessError,
    },
}

impl ProviderError {
    /// Wrap a tracker failure for the named field
    pub fn uniqueness(role: impl Into<String>, source: UniquenessError) -> Self {
        Self::Uniqueness { role: role.into(), source }
    }
}

/// Auxiliary instance fields filled by providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Type-specific attribute payload
    Attributes,
    /// Optional identity payload
    Identity,
    /// Optional opaque private data
    Private,
    /// Dependency addresses
    Dependencies,
    /// Sensitive attribute paths
    SensitiveAttributes,
}

impl FieldRole {
    /// Every role, in population order
    pub const ALL: [FieldRole; 5] = [
        FieldRole::Attributes,
        FieldRole::Identity,
        FieldRole::Private,
        FieldRole::Dependencies,
        FieldRole::SensitiveAttributes,
    ];
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRole::Attributes => write!(f, "attributes"),
            FieldRole::Identity => write!(f, "identity"),
            FieldRole::Private => write!(f, "private"),
            FieldRole::Dependencies => write!(f, "dependencies"),
            FieldRole::SensitiveAttributes => write!(f, "sensitive_attributes"),
        }
    }
}

/// What a provider may know about the instance it is filling
pub struct ProviderContext<'a> {
    /// Shared random source
    pub rng: &'a mut dyn RngCore,
    /// Module address of the owning resource, if any
    pub module: Option<&'a str>,
}

impl fmt::Debug for ProviderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderContext").field("module", &self.module).finish()
    }
}

/// Function that fills one field of an instance
pub type FieldProvider = fn(&mut Instance, &mut ProviderContext<'_>) -> Result<(), ProviderError>;

/// Registry mapping field roles to providers
#[derive(Clone)]
pub struct FieldRegistry {
    providers: Vec<(FieldRole, FieldProvider)>,
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry").field("roles", &self.roles().collect::<Vec<_>>()).finish()
    }
}

impl FieldRegistry {
    /// A registry with no providers
    pub fn empty() -> Self {
        Self { providers: Vec::new() }
    }

    /// Register `provider` for `role`, replacing any earlier provider for it
    pub fn register(&mut self, role: FieldRole, provider: FieldProvider) -> &mut Self {
        match self.providers.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = provider,
            None => self.providers.push((role, provider)),
        }
        self
    }

    /// The provider registered for `role`
    pub fn provider(&self, role: FieldRole) -> Option<FieldProvider> {
        self.providers.iter().find(|(r, _)| *r == role).map(|(_, p)| *p)
    }

    /// Registered roles, in population order
    pub fn roles(&self) -> impl Iterator<Item = FieldRole> + '_ {
        self.providers.iter().map(|(role, _)| *role)
    }

    /// Run every registered provider against `instance`
    ///
    /// Stops at the first failing provider.
    pub fn populate(
        &self,
        instance: &mut Instance,
        ctx: &mut ProviderContext<'_>,
    ) -> Result<(), ProviderError> {
        for (_, provider) in &self.providers {
            provider(instance, ctx)?;
        }
        Ok(())
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(FieldRole::Attributes, attributes_provider)
            .register(FieldRole::Identity, identity_provider)
            .register(FieldRole::Private, private_provider)
            .register(FieldRole::Dependencies, dependencies_provider)
            .register(FieldRole::SensitiveAttributes, sensitive_attributes_provider);
        registry
    }
}

/// Fill the attribute payload from a random archetype
pub fn attributes_provider(
    instance: &mut Instance,
    ctx: &mut ProviderContext<'_>,
) -> Result<(), ProviderError> {
    instance.attributes = random_attributes(ctx.rng);
    Ok(())
}

/// Leave the identity empty most of the time, otherwise attach a user identity
pub fn identity_provider(
    instance: &mut Instance,
    ctx: &mut ProviderContext<'_>,
) -> Result<(), ProviderError> {
    let rng = &mut *ctx.rng;

    instance.identity = if IDENTITY_CHANCE.sample(rng) {
        let region = aws::region(rng);
        let account = aws::account_id(rng);
        Some(json!({
            "arn": format!("arn:aws:iam::{}:user/{}", account, aws::user_name(rng)),
            "account_id": account,
            "region": region,
        }))
    } else {
        None
    };
    Ok(())
}

/// Occasionally attach 16 random bytes, base64 encoded
pub fn private_provider(
    instance: &mut Instance,
    ctx: &mut ProviderContext<'_>,
) -> Result<(), ProviderError> {
    instance.private = if PRIVATE_CHANCE.sample(ctx.rng) {
        let mut bytes = [0u8; 16];
        ctx.rng.fill_bytes(&mut bytes);
        Some(STANDARD.encode(bytes))
    } else {
        None
    };
    Ok(())
}

/// Attach zero to three synthetic dependency addresses
pub fn dependencies_provider(
    instance: &mut Instance,
    ctx: &mut ProviderContext<'_>,
) -> Result<(), ProviderError> {
    let count = ctx.rng.gen_range(0..=MAX_DEPENDENCIES);

    instance.dependencies = (0..count)
        .map(|_| {
            let rng = &mut *ctx.rng;
            let address = format!(
                "{}.{}",
                aws::resource_type(rng, ResourceMode::Managed),
                aws::resource_name(rng)
            );
            if DEPENDENCY_MODULE_CHANCE.sample(rng) {
                format!("{}.{}", foreign_module(rng, ctx.module), address)
            } else {
                address
            }
        })
        .collect();
    Ok(())
}

/// Sensitive attributes are always empty
pub fn sensitive_attributes_provider(
    instance: &mut Instance,
    _ctx: &mut ProviderContext<'_>,
) -> Result<(), ProviderError> {
    instance.sensitive_attributes = Vec::new();
    Ok(())
}

/// A module address that differs from `owner`
fn foreign_module(rng: &mut dyn RngCore, owner: Option<&str>) -> String {
    let mut candidate = aws::module_address(rng);
    for _ in 0..MODULE_REDRAW_ATTEMPTS {
        if Some(candidate.as_str()) != owner {
            return candidate;
        }
        candidate = aws::module_address(rng);
    }
    if Some(candidate.as_str()) != owner {
        return candidate;
    }

    // Still colliding: nest below the owner, which can never equal it
    format!("{}.module.shared", candidate)
}
