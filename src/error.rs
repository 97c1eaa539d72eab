//! Error types.
//!
//! Two families exist. [`ConfigError`] is raised before any generation runs
//! when parameters cannot produce a meaningful search. [`InvariantViolation`]
//! means an itinerary stopped being a permutation, which is a logic bug; the
//! run is aborted rather than continued with a corrupt individual.
//!
//! Nothing in the crate retries. Callers that want another attempt should
//! start a fresh run with fresh randomness.

/// Invalid parameters, detected before the search starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("mating pool needs at least 2 members, got {pool}")]
    InvalidPoolSize { pool: usize },
    #[error("cannot place {sites} sites on a {height}x{width} map")]
    TooManySites {
        sites: usize,
        height: usize,
        width: usize,
    },
    #[error("a {height}x{width} map has more cells than can be addressed")]
    GridTooLarge { height: usize, width: usize },
    #[error("a map needs at least one site, got {sites}")]
    TooFewSites { sites: usize },
    #[error("site {site} at ({row}, {col}) lies outside the map")]
    SiteOutOfBounds { site: usize, row: usize, col: usize },
    #[error("site {site} shares a cell with site {other}")]
    SiteCollision { site: usize, other: usize },
    #[error("population_size must be at least {min}, got {got}")]
    PopulationTooSmall { min: usize, got: usize },
    #[error("generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// An itinerary failed the permutation invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("parents must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("site {value} occurs {count} times, expected 0, 1 or 2")]
    UnexpectedCount { value: usize, count: usize },
    #[error("site {value} is missing but no site is duplicated")]
    MissingWithoutDuplicate { value: usize },
    #[error("site {value} is duplicated but no site is missing")]
    DuplicateWithoutMissing { value: usize },
    #[error("site {value} is out of range for an itinerary of {len} sites")]
    OutOfRange { value: usize, len: usize },
    #[error("site {value} appears more than once")]
    Repeated { value: usize },
    #[error("itinerary must start at site 0, starts at {found}")]
    WrongStart { found: usize },
    #[error("repair did not converge within {steps} steps")]
    RepairDidNotConverge { steps: usize },
}

/// Top-level error for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SalesmanError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl SalesmanError {
    /// Returns `true` for errors caused by parameters rather than by a bug.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SalesmanError::Configuration(_))
    }
}

pub type Result<T, E = SalesmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let e: SalesmanError = ConfigError::ZeroGenerations.into();
        assert!(e.is_configuration());

        let e: SalesmanError = InvariantViolation::LengthMismatch { left: 3, right: 4 }.into();
        assert!(!e.is_configuration());
    }

    #[test]
    fn test_messages() {
        let e = SalesmanError::from(ConfigError::TooManySites {
            sites: 10,
            height: 3,
            width: 3,
        });
        assert_eq!(
            e.to_string(),
            "configuration error: cannot place 10 sites on a 3x3 map"
        );

        let e = InvariantViolation::UnexpectedCount { value: 2, count: 3 };
        assert_eq!(e.to_string(), "site 2 occurs 3 times, expected 0, 1 or 2");
    }
}
