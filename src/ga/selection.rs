//! Rank-based parent selection.
//!
//! The mating pool is the top `k` individuals of a generation, sorted best
//! first. Selection probability depends only on position in that order, not
//! on raw distance, so a single very short tour cannot swamp the pool.
//!
//! Weights are linear: the best of `k` gets weight `k`, the next `k - 1`,
//! down to `1` for the worst. The total is `k(k + 1) / 2`.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::error::{ConfigError, Result};
use rand::Rng;

/// Draws one pool position according to linear rank weights.
///
/// `pool_size` must be non-zero. Position `0` is the best individual.
pub fn rank_index<R: Rng>(pool_size: usize, rng: &mut R) -> usize {
    let total = pool_size * (pool_size + 1) / 2;
    let threshold = rng.random_range(0..total);

    let mut cumulative = 0;
    for position in 0..pool_size {
        cumulative += pool_size - position;
        if threshold < cumulative {
            return position;
        }
    }
    pool_size - 1
}

/// Picks two distinct pool positions by rank weight.
///
/// A draw that repeats the first parent is rejected and redrawn.
///
/// # Errors
/// [`ConfigError::InvalidPoolSize`] if the pool has fewer than 2 members.
pub fn select_two<R: Rng>(pool_size: usize, rng: &mut R) -> Result<(usize, usize)> {
    if pool_size < 2 {
        return Err(ConfigError::InvalidPoolSize { pool: pool_size }.into());
    }

    let first = rank_index(pool_size, rng);
    let second = loop {
        let candidate = rank_index(pool_size, rng);
        if candidate != first {
            break candidate;
        }
    };
    Ok((first, second))
}

/// Borrows two distinct parents from a pool sorted best first.
pub fn select_parents<'a, T, R: Rng>(pool: &'a [T], rng: &mut R) -> Result<(&'a T, &'a T)> {
    let (a, b) = select_two(pool.len(), rng)?;
    Ok((&pool[a], &pool[b]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesmanError;
    use crate::random::create_rng;

    #[test]
    fn test_never_returns_same_index() {
        let mut rng = create_rng(42);
        for k in 2..8 {
            for _ in 0..500 {
                let (a, b) = select_two(k, &mut rng).unwrap();
                assert_ne!(a, b);
                assert!(a < k && b < k);
            }
        }
    }

    #[test]
    fn test_weights_follow_rank() {
        let mut rng = create_rng(42);
        let k = 5;
        let mut counts = [0u32; 5];
        let n = 30_000;
        for _ in 0..n {
            counts[rank_index(k, &mut rng)] += 1;
        }
        // Expected shares 5:4:3:2:1 out of 15.
        for (pos, &c) in counts.iter().enumerate() {
            let expected = n as f64 * (k - pos) as f64 / 15.0;
            let ratio = c as f64 / expected;
            assert!(
                (0.9..1.1).contains(&ratio),
                "position {pos}: got {c}, expected about {expected}"
            );
        }
        let best_to_worst = counts[0] as f64 / counts[4] as f64;
        assert!(
            (4.0..6.0).contains(&best_to_worst),
            "best:worst ratio {best_to_worst}"
        );
    }

    #[test]
    fn test_best_selected_more_than_worst_in_pairs() {
        let mut rng = create_rng(7);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            let (a, b) = select_two(4, &mut rng).unwrap();
            counts[a] += 1;
            counts[b] += 1;
        }
        assert!(counts[0] > counts[3], "counts: {counts:?}");
    }

    #[test]
    fn test_pool_of_two_returns_both() {
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let (a, b) = select_two(2, &mut rng).unwrap();
            assert_eq!(a + b, 1);
        }
    }

    #[test]
    fn test_rejects_small_pool() {
        let mut rng = create_rng(1);
        for k in 0..2 {
            assert_eq!(
                select_two(k, &mut rng),
                Err(SalesmanError::Configuration(ConfigError::InvalidPoolSize {
                    pool: k
                }))
            );
        }
    }

    #[test]
    fn test_select_parents_borrows_pool() {
        let mut rng = create_rng(9);
        let pool = ["best", "middle", "worst"];
        let (a, b) = select_parents(&pool, &mut rng).unwrap();
        assert_ne!(a, b);
    }
}
