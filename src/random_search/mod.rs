//! Random-sampling baseline.
//!
//! Draws independent random itineraries and keeps the shortest one seen.
//! There is no selection and no breeding; the loop exists as a control for
//! judging how much the genetic search actually contributes.
//!
//! Unlike [`GaRunner`](crate::ga::GaRunner), the best is tracked over the
//! whole run and never reset between generations.

mod config;
mod runner;

pub use config::RandomConfig;
pub use runner::{RandomResult, RandomRunner};
