use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the trainer.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which influence training.
pub struct Environment {
    /// A random generator, shared by all graphs trained within one hierarchy.
    pub random: Box<dyn Random + Send>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Box<dyn Random + Send>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` with seeded random and default logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Box::new(DefaultRandom::new_with_seed(seed)), Arc::new(|msg| println!("{msg}")))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Box::new(DefaultRandom::default()), Arc::new(|msg| println!("{msg}")))
    }
}
