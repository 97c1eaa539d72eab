//! Population data types.
//!
//! An [`Itinerary`] is a visiting order over sites `0..n`, always starting
//! at site `0`. A [`Scored`] record pairs an itinerary with its total
//! distance; a [`Population`] is a plain sequence of those records.
//!
//! Fitness is never used as a key. Two different itineraries can have the
//! same length, and both must survive as separate individuals.

use crate::error::{InvariantViolation, Result};
use crate::map::site_label;
use rand::Rng;
use std::fmt;

/// A tour: site `0` followed by a permutation of `1..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>"))]
pub struct Itinerary(Vec<usize>);

impl Itinerary {
    /// Site `0` followed by a uniformly random permutation of `1..num_sites`.
    ///
    /// # Panics
    /// Panics if `num_sites` is zero.
    pub fn random<R: Rng>(num_sites: usize, rng: &mut R) -> Self {
        assert!(num_sites > 0, "an itinerary needs at least one site");
        let mut sites: Vec<usize> = (0..num_sites).collect();
        crate::random::shuffle(&mut sites[1..], rng);
        Self(sites)
    }

    /// Wraps `sites` after checking the permutation and start invariants.
    pub fn new(sites: Vec<usize>) -> Result<Self> {
        check_permutation(&sites)?;
        if let Some(&first) = sites.first() {
            if first != 0 {
                return Err(InvariantViolation::WrongStart { found: first }.into());
            }
        }
        Ok(Self(sites))
    }

    /// Wraps `sites` without checking.
    ///
    /// Callers must uphold the invariants, as the breeder does after repair.
    pub(crate) fn from_vec_unchecked(sites: Vec<usize>) -> Self {
        Self(sites)
    }

    /// Sites in visiting order.
    pub fn sites(&self) -> &[usize] {
        &self.0
    }

    /// Number of sites visited.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a tour with no sites.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the itinerary, returning the site order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl TryFrom<Vec<usize>> for Itinerary {
    type Error = crate::error::SalesmanError;

    fn try_from(sites: Vec<usize>) -> Result<Self> {
        Self::new(sites)
    }
}

impl AsRef<[usize]> for Itinerary {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Space-separated site labels, e.g. `a d c b`.
impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &site) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", site_label(site))?;
        }
        Ok(())
    }
}

/// Checks that every value in `0..sites.len()` occurs exactly once.
pub fn check_permutation(sites: &[usize]) -> Result<()> {
    let n = sites.len();
    let mut seen = vec![false; n];
    for &v in sites {
        if v >= n {
            return Err(InvariantViolation::OutOfRange { value: v, len: n }.into());
        }
        if seen[v] {
            return Err(InvariantViolation::Repeated { value: v }.into());
        }
        seen[v] = true;
    }
    Ok(())
}

/// An itinerary together with its total distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub itinerary: Itinerary,
    pub distance: f64,
}

impl Scored {
    pub fn new(itinerary: Itinerary, distance: f64) -> Self {
        Self {
            itinerary,
            distance,
        }
    }
}

/// One generation of individuals.
pub type Population = Vec<Scored>;

/// Sorts ascending by distance; shorter tours first.
///
/// Stable, so equal distances keep their insertion order.
pub fn sort_population(population: &mut [Scored]) {
    population.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_starts_at_zero_and_is_permutation() {
        let mut rng = create_rng(42);
        for n in 1..12 {
            let it = Itinerary::random(n, &mut rng);
            assert_eq!(it.len(), n);
            assert_eq!(it.sites()[0], 0);
            assert!(check_permutation(it.sites()).is_ok(), "{it:?}");
        }
    }

    #[test]
    fn test_random_covers_all_orders() {
        // 1..4 has 6 orderings; all should appear.
        let mut rng = create_rng(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Itinerary::random(4, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_new_validates() {
        assert!(Itinerary::new(vec![0, 2, 1]).is_ok());
        assert!(Itinerary::new(vec![0, 1, 1]).is_err());
        assert!(Itinerary::new(vec![0, 3, 1]).is_err());
        assert!(Itinerary::new(vec![1, 0, 2]).is_err());
    }

    #[test]
    fn test_try_from_validates() {
        assert_eq!(
            Itinerary::try_from(vec![0, 2, 1]).unwrap().sites(),
            &[0, 2, 1]
        );
        assert_eq!(
            Itinerary::try_from(vec![2, 0, 1]),
            Err(InvariantViolation::WrongStart { found: 2 }.into())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_invalid_tours() {
        assert!(serde_json::from_str::<Itinerary>("[3, 1, 1]").is_err());
        assert!(serde_json::from_str::<Itinerary>("[1, 0, 2]").is_err());

        let it: Itinerary = serde_json::from_str("[0, 2, 1]").unwrap();
        assert_eq!(it.sites(), &[0, 2, 1]);
        assert_eq!(serde_json::to_string(&it).unwrap(), "[0,2,1]");
    }

    #[test]
    fn test_display_uses_labels() {
        let it = Itinerary::new(vec![0, 3, 1, 2]).unwrap();
        assert_eq!(it.to_string(), "a d b c");
    }

    #[test]
    fn test_sort_keeps_equal_distances() {
        let a = Itinerary::new(vec![0, 1, 2]).unwrap();
        let b = Itinerary::new(vec![0, 2, 1]).unwrap();
        let mut pop = vec![
            Scored::new(a.clone(), 3.0),
            Scored::new(b.clone(), 1.0),
            Scored::new(b.clone(), 3.0),
        ];
        sort_population(&mut pop);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop[0].itinerary, b);
        assert_eq!(pop[1].itinerary, a);
        assert_eq!(pop[2].itinerary, b);
    }
}
