//! Itinerary evaluation.

use crate::map::DistanceOracle;

/// Sum of distances between consecutive sites.
///
/// The path is open: there is no leg back from the last site to the start.
/// Lower is better.
pub fn total_distance<M: DistanceOracle + ?Sized>(sites: &[usize], map: &M) -> f64 {
    sites
        .windows(2)
        .map(|pair| map.distance(pair[0], pair[1]))
        .sum()
}
