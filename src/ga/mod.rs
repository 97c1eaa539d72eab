//! Genetic search over itineraries.
//!
//! Individuals are permutations of site ids with site `0` fixed first. Each
//! generation is ranked by total distance; the top `k` form the mating pool,
//! parents are drawn from it by rank weight, and children are bred with
//! switching crossover plus point mutation, each followed by permutation
//! repair.
//!
//! # Key Types
//!
//! - [`Itinerary`]: a validated tour
//! - [`GaConfig`]: population, pool, rates, elitism and seed
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best tour plus per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: crossover, repair and mutation
//! - [`selection`]: linear rank selection of two distinct parents
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::total_distance;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{check_permutation, sort_population, Itinerary, Population, Scored};
