#[cfg(test)]
#[path = "../../../tests/unit/algorithms/ghng/builder_test.rs"]
mod builder_test;

use super::*;
use std::sync::Arc;

/// Provides configurable way to build [`Hierarchy`] using fluent interface style.
pub struct HierarchyBuilder {
    config: GngConfig,
    max_levels: usize,
    seed: Option<u64>,
    random: Option<Box<dyn Random + Send>>,
    logger: Option<InfoLogger>,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self { config: GngConfig::default(), max_levels: 4, seed: None, random: None, logger: None }
    }
}

impl HierarchyBuilder {
    /// Sets configuration used to train every graph of the hierarchy.
    pub fn with_gng_config(mut self, config: GngConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the deepest level which can be trained. Default is 4.
    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Sets seed of the default random generator. Ignored when a custom generator is set.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets custom random generator.
    pub fn with_random(mut self, random: Box<dyn Random + Send>) -> Self {
        self.random = Some(random);
        self
    }

    /// Sets information logger. Default prints to stdout.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validates settings and builds the driver.
    pub fn build(self) -> Result<Hierarchy, GenericError> {
        self.config.validate()?;

        let random: Box<dyn Random + Send> = match (self.random, self.seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => Box::new(DefaultRandom::new_with_seed(seed)),
            (None, None) => Box::<DefaultRandom>::default(),
        };
        let logger: InfoLogger = match self.logger {
            Some(logger) => logger,
            None => Arc::new(|msg: &str| println!("{msg}")),
        };

        let config = &self.config;
        (logger)(
            format!(
                "configured hierarchy: max levels: {}, epochs: {}, max units: {}, lambda: {}, tau: {}",
                self.max_levels, config.epochs, config.max_units, config.lambda, config.tau
            )
            .as_str(),
        );
        (logger)(
            format!(
                "learning: epsilon b: {}, epsilon n: {}, alpha: {}, a max: {}, decay: {}",
                config.epsilon_b, config.epsilon_n, config.alpha, config.a_max, config.decay
            )
            .as_str(),
        );

        Ok(Hierarchy::new(self.config, self.max_levels, Environment::new(random, logger)))
    }
}
