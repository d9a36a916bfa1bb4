//! Rating update configuration

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Parameters of the logistic rating-update rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloConfig {
    /// Development coefficient: how far a single contest can move a rating
    pub k_factor: f64,
    /// Rating installed for a participant on first appearance
    pub default_rating: f64,
    /// Decimal digits kept on updated ratings
    pub rounding_digits: u32,
    /// Outcome score credited to the winner
    pub win_score: f64,
    /// Outcome score credited to the loser
    pub loss_score: f64,
    /// Outcome score credited to both sides of a tie
    pub tie_score: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: 20.0,
            default_rating: 1000.0,
            rounding_digits: 1,
            win_score: 1.0,
            loss_score: 0.0,
            tie_score: 0.5,
        }
    }
}

impl EloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: 10.0,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: 40.0,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "K-factor must be positive and finite".to_string(),
            }
            .into());
        }

        if !self.default_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: "Default rating must be finite".to_string(),
            }
            .into());
        }

        if self.rounding_digits > 12 {
            return Err(RatingError::ConfigurationError {
                message: "Rounding digits must be at most 12".to_string(),
            }
            .into());
        }

        for (name, score) in [
            ("Win", self.win_score),
            ("Loss", self.loss_score),
            ("Tie", self.tie_score),
        ] {
            if !score.is_finite() {
                return Err(RatingError::ConfigurationError {
                    message: format!("{} score must be finite", name),
                }
                .into());
            }
        }

        Ok(())
    }
}
