//! Random baseline loop.

use super::config::RandomConfig;
use crate::error::Result;
use crate::ga::{total_distance, Itinerary, Scored};
use crate::map::DistanceOracle;
use crate::random::rng_from_option;
use rand::Rng;

/// Result of a random baseline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomResult {
    /// Shortest itinerary sampled during the run.
    pub best: Itinerary,

    /// Total distance of `best`.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Running best after each generation. Non-increasing.
    pub history: Vec<f64>,
}

/// Executes the random baseline.
pub struct RandomRunner;

impl RandomRunner {
    /// Runs the baseline with a generator seeded from `config.seed`.
    pub fn run<M: DistanceOracle + ?Sized>(
        map: &M,
        config: &RandomConfig,
    ) -> Result<RandomResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(map, config, &mut rng)
    }

    /// Runs the baseline drawing all randomness from `rng`.
    pub fn run_with_rng<M: DistanceOracle + ?Sized, R: Rng>(
        map: &M,
        config: &RandomConfig,
        rng: &mut R,
    ) -> Result<RandomResult> {
        config.validate()?;

        let num_sites = map.num_sites();
        let mut history = Vec::with_capacity(config.generations);

        // The first sample of generation 0 seeds the running best.
        let mut best = sample(num_sites, map, rng);
        for generation in 0..config.generations {
            let draws = if generation == 0 {
                config.population_size - 1
            } else {
                config.population_size
            };
            for _ in 0..draws {
                let candidate = sample(num_sites, map, rng);
                if candidate.distance < best.distance {
                    best = candidate;
                }
            }

            if config.log_generations {
                tracing::info!(generation, best = %best.itinerary, distance = best.distance, "running best");
            } else {
                tracing::debug!(generation, best = %best.itinerary, distance = best.distance, "running best");
            }
            history.push(best.distance);
        }

        tracing::info!(
            generations = config.generations,
            distance = best.distance,
            "random run finished"
        );

        Ok(RandomResult {
            best_distance: best.distance,
            best: best.itinerary,
            generations: config.generations,
            history,
        })
    }
}

fn sample<M: DistanceOracle + ?Sized, R: Rng>(num_sites: usize, map: &M, rng: &mut R) -> Scored {
    let itinerary = Itinerary::random(num_sites, rng);
    let distance = total_distance(itinerary.sites(), map);
    Scored::new(itinerary, distance)
}
