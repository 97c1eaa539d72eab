//! Genetic search for short traveling-salesman itineraries.
//!
//! A salesman starts at site `0` of a synthetic grid map and must visit every
//! other site once. This crate evolves visiting orders with a genetic
//! algorithm and compares them against pure random sampling:
//!
//! - **Map**: [`map::SalesmanMap`] places sites on a grid and answers
//!   Euclidean distances through the [`map::DistanceOracle`] trait.
//! - **Genetic search**: [`ga::GaRunner`] ranks each generation, draws
//!   parents from an elite pool by rank weight, and breeds children with
//!   switching crossover and point mutation, repairing each child back into a
//!   permutation.
//! - **Random baseline**: [`random_search::RandomRunner`] samples independent
//!   itineraries and keeps the shortest.
//! - **Trials and reports**: [`trials::run_trials`] repeats both searches with
//!   independent seeds; [`report`] ranks and summarizes the outcomes.
//!
//! Every search function takes an explicit random generator (or a seed), so
//! runs are reproducible and safe to execute concurrently.
//!
//! # Example
//!
//! ```
//! use salesman_ga::ga::{GaConfig, GaRunner};
//! use salesman_ga::map::SalesmanMap;
//! use salesman_ga::random::create_rng;
//! use salesman_ga::random_search::{RandomConfig, RandomRunner};
//!
//! let mut rng = create_rng(42);
//! let map = SalesmanMap::generate(12, 15, 50, &mut rng)?;
//!
//! let genetic = GaRunner::run_with_rng(&map, &GaConfig::default().with_generations(50), &mut rng)?;
//! let random = RandomRunner::run_with_rng(&map, &RandomConfig::default().with_generations(50), &mut rng)?;
//! assert!(genetic.best_distance > 0.0 && random.best_distance > 0.0);
//! # Ok::<(), salesman_ga::error::SalesmanError>(())
//! ```

pub mod error;
pub mod ga;
pub mod map;
pub mod random;
pub mod random_search;
pub mod report;
pub mod trials;

pub use error::{Result, SalesmanError};
