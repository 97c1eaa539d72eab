//! Summary statistics over trial outcomes.

use crate::trials::{TrialKind, TrialOutcome, TrialOutcomes};

/// Descriptive statistics of a set of best distances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Middle value; the mean of the two middle values for even counts.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Returns `None` for an empty slice.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let count = n as f64;
        let mean = sorted.iter().sum::<f64>() / count;
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        Some(Self {
            count: n,
            mean,
            median,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}

/// All outcomes of a plan sorted by distance, shortest first.
///
/// Ties keep trial order (genetic before random).
pub fn ranking(outcomes: &TrialOutcomes) -> Vec<&TrialOutcome> {
    let mut ranked: Vec<&TrialOutcome> = outcomes.iter().collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// Per-kind summaries, `None` where a kind ran no trials.
pub fn summarize(outcomes: &TrialOutcomes) -> (Option<Summary>, Option<Summary>) {
    (
        Summary::from_scores(&outcomes.distances(TrialKind::Genetic)),
        Summary::from_scores(&outcomes.distances(TrialKind::Random)),
    )
}
