//! Breeding operators for itineraries.
//!
//! Crossover and mutation work position by position and therefore break the
//! permutation invariant. [`repair`] restores it afterwards by replacing one
//! copy of a duplicated site with a missing site, until no duplicates remain.
//!
//! # Pipeline
//!
//! [`breed`] = [`crossover`] -> [`repair`] -> [`mutate`] (which repairs after
//! every changed gene).
//!
//! Site `0` stays at position `0` throughout: both parents start with it,
//! mutation skips that position, and repair never overwrites it.

use super::types::{check_permutation, Itinerary};
use crate::error::{InvariantViolation, Result};
use rand::Rng;

/// Switching crossover.
///
/// One parent is chosen at random as the active source. Each position copies
/// the active parent's gene, then with probability `crossover_rate` the other
/// parent becomes active for the next position. The number of switch points
/// is therefore variable.
///
/// The result is generally not a permutation; pass it through [`repair`].
///
/// # Errors
/// [`InvariantViolation::LengthMismatch`] if the parents differ in length.
pub fn crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    crossover_rate: f64,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if parent1.len() != parent2.len() {
        return Err(InvariantViolation::LengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        }
        .into());
    }

    let mut from_first = rng.random_bool(0.5);
    let child = parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| {
            let gene = if from_first { a } else { b };
            if rng.random::<f64>() < crossover_rate {
                from_first = !from_first;
            }
            gene
        })
        .collect();
    Ok(child)
}

/// Restores the permutation invariant in place.
///
/// Each step counts occurrences, takes the first missing site and the first
/// duplicated site, and overwrites one of the duplicate's two positions
/// (chosen uniformly) with the missing site. A duplicated site `0` is always
/// rewritten away from position `0`.
///
/// A valid permutation is left untouched and consumes no randomness.
///
/// # Errors
/// Any count other than 0, 1 or 2, any value outside `0..len`, or an
/// unpaired missing/duplicated site is reported as an
/// [`InvariantViolation`]. The loop is bounded by `len` steps.
pub fn repair<R: Rng>(sites: &mut [usize], rng: &mut R) -> Result<()> {
    let n = sites.len();
    let mut counts = vec![0usize; n];

    for step in 0..=n {
        counts.iter_mut().for_each(|c| *c = 0);
        for &v in sites.iter() {
            if v >= n {
                return Err(InvariantViolation::OutOfRange { value: v, len: n }.into());
            }
            counts[v] += 1;
        }

        let mut missing = None;
        let mut duplicated = None;
        for (value, &count) in counts.iter().enumerate() {
            match count {
                0 => {
                    missing.get_or_insert(value);
                }
                1 => {}
                2 => {
                    duplicated.get_or_insert(value);
                }
                _ => return Err(InvariantViolation::UnexpectedCount { value, count }.into()),
            }
        }

        // Only the first two arms are reachable once counts are in 0..=2.
        let (missing, duplicated) = match (missing, duplicated) {
            (None, None) => return Ok(()),
            (Some(m), Some(d)) => (m, d),
            (Some(value), None) => {
                return Err(InvariantViolation::MissingWithoutDuplicate { value }.into())
            }
            (None, Some(value)) => {
                return Err(InvariantViolation::DuplicateWithoutMissing { value }.into())
            }
        };

        let mut positions = sites
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == duplicated)
            .map(|(i, _)| i);
        // `duplicated` was counted twice above.
        let (Some(first), Some(second)) = (positions.next(), positions.next()) else {
            return Err(InvariantViolation::UnexpectedCount {
                value: duplicated,
                count: 2,
            }
            .into());
        };

        let target = if duplicated == 0 && first == 0 {
            second
        } else if rng.random_bool(0.5) {
            first
        } else {
            second
        };
        tracing::trace!(step, target, missing, duplicated, "repair");
        sites[target] = missing;
    }

    Err(InvariantViolation::RepairDidNotConverge { steps: n }.into())
}

/// Point mutation with repair.
///
/// Every position after the start is replaced, with probability
/// `2 * mutation_rate`, by a uniformly random site, and the itinerary is
/// repaired immediately. Repair undoes roughly half of these changes, so the
/// doubled probability keeps the effective rate near `mutation_rate`.
pub fn mutate<R: Rng>(sites: &mut [usize], mutation_rate: f64, rng: &mut R) -> Result<()> {
    let n = sites.len();
    let threshold = mutation_rate * 2.0;
    for index in 1..n {
        if rng.random::<f64>() < threshold {
            sites[index] = rng.random_range(0..n);
            repair(sites, rng)?;
        }
    }
    Ok(())
}

/// Produces one child from two parents: crossover, repair, then mutation.
pub fn breed<R: Rng>(
    parent1: &Itinerary,
    parent2: &Itinerary,
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Itinerary> {
    let mut child = crossover(parent1.sites(), parent2.sites(), crossover_rate, rng)?;
    repair(&mut child, rng)?;
    mutate(&mut child, mutation_rate, rng)?;

    debug_assert!(check_permutation(&child).is_ok());
    Ok(Itinerary::from_vec_unchecked(child))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesmanError;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn is_valid_itinerary(sites: &[usize]) -> bool {
        check_permutation(sites).is_ok() && sites.first().map_or(true, |&s| s == 0)
    }

    // ---- Crossover ----

    #[test]
    fn test_zero_rate_copies_one_parent() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![0, 5, 4, 3, 2, 1];
        let mut saw = (false, false);
        for _ in 0..50 {
            let child = crossover(&p1, &p2, 0.0, &mut rng).unwrap();
            if child == p1 {
                saw.0 = true;
            } else if child == p2 {
                saw.1 = true;
            } else {
                panic!("child {child:?} is not a parent");
            }
        }
        assert!(saw.0 && saw.1, "both parents should be picked sometimes");
    }

    #[test]
    fn test_full_rate_alternates() {
        let mut rng = create_rng(42);
        let p1 = vec![10, 11, 12, 13];
        let p2 = vec![20, 21, 22, 23];
        let child = crossover(&p1, &p2, 1.0, &mut rng).unwrap();
        let alternating_a = vec![10, 21, 12, 23];
        let alternating_b = vec![20, 11, 22, 13];
        assert!(child == alternating_a || child == alternating_b, "{child:?}");
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        let err = crossover(&[0, 1, 2], &[0, 1], 0.5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SalesmanError::Invariant(InvariantViolation::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_crossover_genes_come_from_parents() {
        let mut rng = create_rng(5);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![0, 7, 6, 5, 4, 3, 2, 1];
        for _ in 0..100 {
            let child = crossover(&p1, &p2, 0.3, &mut rng).unwrap();
            for (i, &g) in child.iter().enumerate() {
                assert!(g == p1[i] || g == p2[i]);
            }
        }
    }

    // ---- Repair ----

    #[test]
    fn test_repair_fills_missing() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let mut sites = vec![0, 1, 1, 3];
            repair(&mut sites, &mut rng).unwrap();
            assert!(
                sites == vec![0, 2, 1, 3] || sites == vec![0, 1, 2, 3],
                "{sites:?}"
            );
        }
    }

    #[test]
    fn test_repair_keeps_start() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let mut sites = vec![0, 1, 0];
            repair(&mut sites, &mut rng).unwrap();
            assert_eq!(sites, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_repair_multiple_pairs() {
        let mut rng = create_rng(42);
        let mut sites = vec![0, 1, 1, 2, 2, 3];
        repair(&mut sites, &mut rng).unwrap();
        assert!(is_valid_itinerary(&sites), "{sites:?}");
    }

    #[test]
    fn test_repair_is_noop_on_valid() {
        let mut rng = create_rng(42);
        let original = vec![0, 4, 2, 1, 3];
        let mut sites = original.clone();
        repair(&mut sites, &mut rng).unwrap();
        assert_eq!(sites, original);
    }

    #[test]
    fn test_repair_rejects_triple() {
        let mut rng = create_rng(42);
        let mut sites = vec![0, 1, 1, 1];
        assert_eq!(
            repair(&mut sites, &mut rng),
            Err(SalesmanError::Invariant(
                InvariantViolation::UnexpectedCount { value: 1, count: 3 }
            ))
        );
    }

    #[test]
    fn test_repair_rejects_out_of_range() {
        let mut rng = create_rng(42);
        let mut sites = vec![0, 7, 1];
        assert_eq!(
            repair(&mut sites, &mut rng),
            Err(SalesmanError::Invariant(InvariantViolation::OutOfRange {
                value: 7,
                len: 3
            }))
        );
    }

    #[test]
    fn test_repair_empty() {
        let mut rng = create_rng(42);
        let mut sites: Vec<usize> = vec![];
        assert!(repair(&mut sites, &mut rng).is_ok());
    }

    // ---- Mutation ----

    #[test]
    fn test_zero_mutation_is_noop() {
        let mut rng = create_rng(42);
        let original = vec![0, 3, 1, 4, 2];
        let mut sites = original.clone();
        mutate(&mut sites, 0.0, &mut rng).unwrap();
        assert_eq!(sites, original);
    }

    #[test]
    fn test_full_mutation_stays_valid() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut sites: Vec<usize> = (0..12).collect();
            mutate(&mut sites, 1.0, &mut rng).unwrap();
            assert!(is_valid_itinerary(&sites), "{sites:?}");
        }
    }

    #[test]
    fn test_mutation_changes_something_eventually() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..10).collect();
        let changed = (0..50).any(|_| {
            let mut sites = original.clone();
            mutate(&mut sites, 0.2, &mut rng).unwrap();
            sites != original
        });
        assert!(changed);
    }

    // ---- Breed ----

    #[test]
    fn test_identical_parents_without_mutation() {
        let mut rng = create_rng(42);
        let parent = Itinerary::new(vec![0, 2, 4, 1, 3]).unwrap();
        for rate in [0.0, 0.5, 1.0] {
            let child = breed(&parent, &parent, rate, 0.0, &mut rng).unwrap();
            assert_eq!(child, parent);
        }
    }

    #[test]
    fn test_breed_zero_rates_copies_parent() {
        let mut rng = create_rng(11);
        let p1 = Itinerary::new(vec![0, 1, 2, 3, 4]).unwrap();
        let p2 = Itinerary::new(vec![0, 4, 3, 2, 1]).unwrap();
        for _ in 0..20 {
            let child = breed(&p1, &p2, 0.0, 0.0, &mut rng).unwrap();
            assert!(child == p1 || child == p2);
        }
    }

    proptest! {
        #[test]
        fn prop_breed_yields_valid_itinerary(
            seed in any::<u64>(),
            n in 1usize..30,
            crossover_rate in 0.0f64..=1.0,
            mutation_rate in 0.0f64..=0.5,
        ) {
            let mut rng = create_rng(seed);
            let p1 = Itinerary::random(n, &mut rng);
            let p2 = Itinerary::random(n, &mut rng);
            let child = breed(&p1, &p2, crossover_rate, mutation_rate, &mut rng).unwrap();
            prop_assert!(is_valid_itinerary(child.sites()), "{:?}", child);
        }

        #[test]
        fn prop_repair_is_idempotent(seed in any::<u64>(), n in 1usize..30) {
            let mut rng = create_rng(seed);
            let p1 = Itinerary::random(n, &mut rng);
            let p2 = Itinerary::random(n, &mut rng);
            let mut child = crossover(p1.sites(), p2.sites(), 0.5, &mut rng).unwrap();
            repair(&mut child, &mut rng).unwrap();
            let once = child.clone();
            repair(&mut child, &mut rng).unwrap();
            prop_assert_eq!(once, child);
        }
    }
}
