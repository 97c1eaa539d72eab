//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{ConfigError, Result};

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use salesman_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 25);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.pool_size(), 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use salesman_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mate_percentage(0.2)
///     .with_elitism(false)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Fraction of each generation, by rank, that may mate (0.0–1.0).
    ///
    /// The pool size is `round(population_size * mate_percentage)` and must
    /// be at least 2.
    pub mate_percentage: f64,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Copy the previous generation's best unchanged into the next one.
    pub elitism: bool,

    /// Probability of switching the active parent after each position (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-position mutation rate (0.0–1.0). The applied probability is doubled
    /// to offset repair reverting about half of all mutations.
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Emit each generation's best at `info` level instead of `debug`.
    pub log_generations: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 25,
            mate_percentage: 0.10,
            generations: 200,
            elitism: true,
            crossover_rate: 0.3,
            mutation_rate: 0.05,
            seed: None,
            log_generations: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mating fraction, clamped to `[0, 1]`.
    pub fn with_mate_percentage(mut self, ratio: f64) -> Self {
        self.mate_percentage = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Logs each generation's best at `info` level.
    pub fn with_log_generations(mut self, log: bool) -> Self {
        self.log_generations = log;
        self
    }

    /// Size of the mating pool: `round(population_size * mate_percentage)`,
    /// capped at the population size.
    pub fn pool_size(&self) -> usize {
        let k = (self.population_size as f64 * self.mate_percentage).round();
        (k.max(0.0) as usize).min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                min: 2,
                got: self.population_size,
            }
            .into());
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations.into());
        }
        check_rate("mate_percentage", self.mate_percentage)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;

        let pool = self.pool_size();
        if pool < 2 {
            return Err(ConfigError::InvalidPoolSize { pool }.into());
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value }.into())
    }
}
