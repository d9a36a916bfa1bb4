//! Logistic (Elo) rating update rule
//!
//! This module provides the pure rating-update formula: a logistic expected
//! score over the rating difference, scaled by a K-factor and rounded to a
//! configured precision.

use crate::config::EloConfig;
use crate::utils::round_to_decimals;

/// Pure implementation of the logistic rating-update formula.
///
/// The calculator never touches shared state: callers pass both sides'
/// pre-contest ratings and receive exactly one new rating back. Both sides
/// of a contest must be rated from each other's PRE-contest ratings; feeding
/// one side's updated rating into the other side's computation breaks the
/// per-contest zero-sum property.
#[derive(Debug, Clone)]
pub struct EloCalculator {
    config: EloConfig,
}

impl EloCalculator {
    /// Create a new calculator from a validated configuration
    pub fn new(config: EloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// The configuration this calculator was built with
    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Rating installed for new participants
    pub fn default_rating(&self) -> f64 {
        self.config.default_rating
    }

    /// Logistic win probability for a subject against an agent.
    ///
    /// Bounded in (0, 1) for all finite inputs; the expected scores of the
    /// two sides of a pairing always sum to exactly 1.
    pub fn expected_score(&self, subject_rating: f64, agent_rating: f64) -> f64 {
        let rating_difference = agent_rating - subject_rating;
        1.0 / (1.0 + 10f64.powf(rating_difference / 400.0))
    }

    /// Updated rating for the subject after one contest, rounded to the
    /// configured precision
    pub fn rate(&self, subject_rating: f64, agent_rating: f64, outcome_score: f64) -> f64 {
        let expected = self.expected_score(subject_rating, agent_rating);
        let updated = subject_rating + self.config.k_factor * (outcome_score - expected);
        round_to_decimals(updated, self.config.rounding_digits)
    }
}
