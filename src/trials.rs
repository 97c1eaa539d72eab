//! Repeated trials over one map.
//!
//! A [`TrialPlan`] runs the genetic search and the random baseline several
//! times each. Every trial owns its generator, seeded from the plan's base
//! seed plus the trial's position, so trials share no mutable state. With
//! the `parallel` feature they run on rayon's thread pool; the outcomes are
//! identical either way.

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner, Itinerary};
use crate::map::DistanceOracle;
use crate::random::create_rng;
use crate::random_search::{RandomConfig, RandomRunner};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which search produced a trial outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrialKind {
    Genetic,
    Random,
}

impl fmt::Display for TrialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialKind::Genetic => f.write_str("Genetic trial"),
            TrialKind::Random => f.write_str("Random trial"),
        }
    }
}

/// The outcome of one trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    pub kind: TrialKind,
    /// Zero-based index among trials of the same kind.
    pub index: usize,
    pub seed: u64,
    pub best: Itinerary,
    pub distance: f64,
}

/// How many trials of each kind to run, and with what parameters.
///
/// The `seed` fields of `genetic` and `random` are ignored; per-trial seeds
/// derive from `base_seed`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialPlan {
    pub genetic: GaConfig,
    pub random: RandomConfig,
    pub genetic_trials: usize,
    pub random_trials: usize,
    /// `None` draws a base seed from entropy.
    pub base_seed: Option<u64>,
}

impl Default for TrialPlan {
    fn default() -> Self {
        Self {
            genetic: GaConfig::default(),
            random: RandomConfig::default(),
            genetic_trials: 10,
            random_trials: 10,
            base_seed: None,
        }
    }
}

impl TrialPlan {
    /// Seed for the `position`-th trial overall (genetic trials first).
    pub fn trial_seed(base: u64, position: usize) -> u64 {
        base.wrapping_add(position as u64)
    }
}

/// Outcomes of a whole plan, in trial order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcomes {
    pub genetic: Vec<TrialOutcome>,
    pub random: Vec<TrialOutcome>,
}

impl TrialOutcomes {
    /// All outcomes, genetic first.
    pub fn iter(&self) -> impl Iterator<Item = &TrialOutcome> {
        self.genetic.iter().chain(self.random.iter())
    }

    /// Best distances of one kind, in trial order.
    pub fn distances(&self, kind: TrialKind) -> Vec<f64> {
        let outcomes = match kind {
            TrialKind::Genetic => &self.genetic,
            TrialKind::Random => &self.random,
        };
        outcomes.iter().map(|o| o.distance).collect()
    }
}

/// Runs every trial in `plan` against `map`.
///
/// Both configurations are validated before the first trial starts. The
/// first failing trial aborts the plan.
pub fn run_trials<M: DistanceOracle + ?Sized>(map: &M, plan: &TrialPlan) -> Result<TrialOutcomes> {
    if plan.genetic_trials > 0 {
        plan.genetic.validate()?;
    }
    if plan.random_trials > 0 {
        plan.random.validate()?;
    }

    let base = plan.base_seed.unwrap_or_else(rand::random);
    tracing::info!(
        genetic_trials = plan.genetic_trials,
        random_trials = plan.random_trials,
        base_seed = base,
        "running trials"
    );

    let genetic_trial = |index: usize| -> Result<TrialOutcome> {
        let seed = TrialPlan::trial_seed(base, index);
        let mut rng = create_rng(seed);
        let result = GaRunner::run_with_rng(map, &plan.genetic, &mut rng)?;
        Ok(TrialOutcome {
            kind: TrialKind::Genetic,
            index,
            seed,
            best: result.best,
            distance: result.best_distance,
        })
    };
    let random_trial = |index: usize| -> Result<TrialOutcome> {
        let seed = TrialPlan::trial_seed(base, plan.genetic_trials + index);
        let mut rng = create_rng(seed);
        let result = RandomRunner::run_with_rng(map, &plan.random, &mut rng)?;
        Ok(TrialOutcome {
            kind: TrialKind::Random,
            index,
            seed,
            best: result.best,
            distance: result.best_distance,
        })
    };

    #[cfg(feature = "parallel")]
    let (genetic, random) = (
        (0..plan.genetic_trials)
            .into_par_iter()
            .map(genetic_trial)
            .collect::<Result<Vec<_>>>()?,
        (0..plan.random_trials)
            .into_par_iter()
            .map(random_trial)
            .collect::<Result<Vec<_>>>()?,
    );

    #[cfg(not(feature = "parallel"))]
    let (genetic, random) = (
        (0..plan.genetic_trials)
            .map(genetic_trial)
            .collect::<Result<Vec<_>>>()?,
        (0..plan.random_trials)
            .map(random_trial)
            .collect::<Result<Vec<_>>>()?,
    );

    Ok(TrialOutcomes { genetic, random })
}
