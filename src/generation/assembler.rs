//! State assembler
//!
//! Drives one generation call: draws every resource with its instances, then
//! the outputs, and returns the finished document. A failure at any point
//! aborts the call and discards everything built so far.

use crate::faker::aws;
use crate::faker::words;
use crate::faker::{
    random_output, FieldRegistry, Probability, ProviderContext, ProviderError, UniquenessTracker,
};
use crate::generation::{GenerationError, GenerationResult};
use crate::state::{Instance, Output, Resource, StateDocument};
use crate::types::{GeneratorConfig, Lineage, ResourceMode};
use rand::{Rng, RngCore, SeedableRng};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Chance that a resource is a data source rather than a managed resource
const DATA_MODE_CHANCE: Probability = Probability::one_in(5);

/// Builds state documents from a configuration
///
/// The assembler owns its random source, its uniqueness tracker and its
/// field registry. Calls to [`StateAssembler::generate`] take `&mut self`, so
/// two generations can never share a tracker concurrently.
pub struct StateAssembler {
    config: GeneratorConfig,
    rng: Box<dyn RngCore>,
    tracker: UniquenessTracker,
    registry: FieldRegistry,
}

impl fmt::Debug for StateAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateAssembler")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("registry", &self.registry)
            .finish()
    }
}

impl StateAssembler {
    /// Create an assembler, seeded from `config.seed` when one is set
    pub fn new(config: GeneratorConfig) -> Self {
        let rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => {
                debug!(seed, "using deterministic seed");
                Box::new(rand::rngs::StdRng::seed_from_u64(seed))
            }
            None => Box::new(rand::thread_rng()),
        };

        Self { config, rng, tracker: UniquenessTracker::new(), registry: FieldRegistry::default() }
    }

    /// Create an assembler with an explicit seed, ignoring `config.seed`
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(GeneratorConfig { seed: Some(seed), ..config })
    }

    /// Replace the field registry
    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the uniqueness tracker
    pub fn with_tracker(mut self, tracker: UniquenessTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// The configuration this assembler generates from
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one complete document
    #[instrument(skip(self), fields(resources = self.config.num_resources, outputs = self.config.num_outputs))]
    pub fn generate(&mut self) -> GenerationResult<StateDocument> {
        let mut doc = StateDocument::new(Lineage::from_rng(&mut *self.rng));
        let mut addresses = HashSet::with_capacity(self.config.num_resources);

        for _ in 0..self.config.num_resources {
            let resource = self.build_resource(&mut addresses)?;
            debug!(
                address = %resource.address(),
                instances = resource.instances.len(),
                provider = %resource.provider,
                "resource generated"
            );
            doc.resources.push(resource);
        }
        self.tracker.reset();

        doc.outputs = self.build_outputs()?;
        self.tracker.reset();

        info!(
            lineage = %doc.lineage,
            resources = doc.resource_count(),
            instances = doc.instance_count(),
            outputs = doc.output_count(),
            "state document generated"
        );
        Ok(doc)
    }

    fn build_resource(&mut self, addresses: &mut HashSet<String>) -> GenerationResult<Resource> {
        let rng = &mut *self.rng;

        let mode = if DATA_MODE_CHANCE.sample(rng) { ResourceMode::Data } else { ResourceMode::Managed };
        let resource_type = aws::resource_type(rng, mode);
        let module = if Probability::percent(self.config.module_chance).sample(rng) {
            Some(aws::module_address(rng))
        } else {
            None
        };
        let count = if Probability::percent(self.config.multi_instance_chance).sample(rng) {
            rng.gen_range(self.config.instance_range())
        } else {
            1
        };

        let base_name = aws::resource_name(rng);
        let mut resource = Resource {
            provider: aws::provider_address(resource_type, module.as_deref()),
            module,
            mode,
            resource_type: resource_type.to_string(),
            name: base_name.to_string(),
            instances: Vec::with_capacity(count),
        };

        let mut suffix = 2;
        while !addresses.insert(resource.address()) {
            resource.name = format!("{}_{}", base_name, suffix);
            suffix += 1;
        }

        self.tracker.reset();
        let address = resource.address();
        let mut fresh_words = true;
        for ordinal in 0..count {
            let mut instance = Instance::default();

            let mut ctx =
                ProviderContext { rng: &mut *self.rng, module: resource.module.as_deref() };
            self.registry
                .populate(&mut instance, &mut ctx)
                .map_err(|e| GenerationError::instance_population(&address, ordinal, e))?;

            if count > 1 {
                let first = self.key_word(&mut fresh_words);
                let second = words::word(&mut *self.rng);
                instance.index_key = Some(format!("{}-{}-{}", first, second, ordinal));
            }

            trace!(address = %address, ordinal, key = ?instance.index_key, "instance populated");
            resource.instances.push(instance);
        }

        Ok(resource)
    }

    /// Leading word of an index key, unused within the resource while the dictionary lasts
    ///
    /// The ordinal keeps keys distinct, so once the tracker runs dry the
    /// remaining keys of the resource take plain draws.
    fn key_word(&mut self, fresh: &mut bool) -> String {
        if *fresh {
            match self.tracker.unique(&mut *self.rng, |r| words::word(r).to_string()) {
                Ok(word) => return word,
                Err(e) => {
                    debug!(error = %e, "index key words exhausted, allowing repeats");
                    *fresh = false;
                }
            }
        }
        words::word(&mut *self.rng).to_string()
    }

    fn build_outputs(&mut self) -> GenerationResult<BTreeMap<String, Output>> {
        let mut outputs = BTreeMap::new();

        for index in 0..self.config.num_outputs {
            let name = self
                .tracker
                .unique(&mut *self.rng, |r| {
                    let first = words::word(r);
                    let second = words::word(r);
                    format!("{}_{}_{}", first, second, aws::unix_time(r))
                })
                .map_err(|e| {
                    GenerationError::output_generation(
                        index,
                        ProviderError::uniqueness("output_name", e),
                    )
                })?;

            outputs.insert(name, random_output(&mut *self.rng));
        }

        Ok(outputs)
    }
}

/// Generate one document from `config` with a fresh assembler
pub fn generate_document(config: GeneratorConfig) -> GenerationResult<StateDocument> {
    StateAssembler::new(config).generate()
}
