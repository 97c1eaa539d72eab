//! Random baseline configuration.

use crate::error::{ConfigError, Result};

/// Configuration for [`RandomRunner`](super::RandomRunner).
///
/// The total number of samples is `population_size * generations`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Itineraries sampled per generation.
    pub population_size: usize,

    /// Number of generations.
    pub generations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Emit the running best after each generation at `info` level.
    pub log_generations: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            population_size: 25,
            generations: 200,
            seed: None,
            log_generations: false,
        }
    }
}

impl RandomConfig {
    /// Sets the samples drawn per generation.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Logs the running best at `info` level.
    pub fn with_log_generations(mut self, log: bool) -> Self {
        self.log_generations = log;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationTooSmall { min: 1, got: 0 }.into());
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations.into());
        }
        Ok(())
    }
}
