//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization -> rank -> pool -> breed -> repeat, for a fixed number of
//! generations.
//!
//! The reported best is taken fresh from each generation's ranking; it is
//! not carried over from earlier generations. Without elitism a later
//! generation can therefore report a longer tour than an earlier one. The
//! random baseline in [`crate::random_search`] instead keeps the best over
//! the whole run.

use super::config::GaConfig;
use super::fitness::total_distance;
use super::operators::breed;
use super::selection::select_parents;
use super::types::{sort_population, Itinerary, Population, Scored};
use crate::error::Result;
use crate::map::DistanceOracle;
use crate::random::rng_from_option;
use rand::Rng;

/// Best individual of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Shortest distance in the generation.
    pub best_distance: f64,

    /// Mean distance over the whole generation.
    pub mean_distance: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best itinerary of the final ranked generation.
    pub best: Itinerary,

    /// Total distance of `best`.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// One entry per generation, in order.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use salesman_ga::ga::{GaConfig, GaRunner};
/// use salesman_ga::map::SalesmanMap;
/// use salesman_ga::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let map = SalesmanMap::generate(10, 15, 40, &mut rng).unwrap();
/// let config = GaConfig::default().with_generations(20);
/// let result = GaRunner::run_with_rng(&map, &config, &mut rng).unwrap();
/// assert_eq!(result.best.sites()[0], 0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search with a generator seeded from `config.seed`.
    pub fn run<M: DistanceOracle + ?Sized>(map: &M, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(map, config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Configuration errors are returned before any individual is created.
    /// An [`InvariantViolation`](crate::error::InvariantViolation) during
    /// breeding aborts the run.
    pub fn run_with_rng<M: DistanceOracle + ?Sized, R: Rng>(
        map: &M,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        let num_sites = map.num_sites();
        let pool_size = config.pool_size();

        // 1. Initialize
        let mut population: Population = (0..config.population_size)
            .map(|_| evaluate(Itinerary::random(num_sites, rng), map))
            .collect();

        let mut history = Vec::with_capacity(config.generations);
        let mut best = population[0].clone();

        // 2. Evolve
        for generation in 0..config.generations {
            sort_population(&mut population);
            let pool = &population[..pool_size];

            best = pool[0].clone();
            let stats = GenerationStats {
                generation,
                best_distance: best.distance,
                mean_distance: mean_distance(&population),
            };
            if config.log_generations {
                tracing::info!(generation, best = %best.itinerary, distance = best.distance, "generation best");
            } else {
                tracing::debug!(generation, best = %best.itinerary, distance = best.distance, "generation best");
            }
            history.push(stats);

            let mut next: Population = Vec::with_capacity(config.population_size);
            if config.elitism {
                next.push(best.clone());
            }
            while next.len() < config.population_size {
                let (p1, p2) = select_parents(pool, rng)?;
                let child = breed(
                    &p1.itinerary,
                    &p2.itinerary,
                    config.crossover_rate,
                    config.mutation_rate,
                    rng,
                )?;
                next.push(evaluate(child, map));
            }
            population = next;
        }

        tracing::info!(
            generations = config.generations,
            distance = best.distance,
            "genetic run finished"
        );

        Ok(GaResult {
            best_distance: best.distance,
            best: best.itinerary,
            generations: config.generations,
            history,
        })
    }
}

fn evaluate<M: DistanceOracle + ?Sized>(itinerary: Itinerary, map: &M) -> Scored {
    let distance = total_distance(itinerary.sites(), map);
    Scored::new(itinerary, distance)
}

fn mean_distance(population: &[Scored]) -> f64 {
    population.iter().map(|s| s.distance).sum::<f64>() / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
