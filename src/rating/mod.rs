//! Elo rating calculation, storage, and rank derivation
//!
//! This module provides the pure rating-update rule, the owned per-run
//! rating store, and ranking over rating snapshots.

pub mod elo;
pub mod ranking;
pub mod store;

// Re-export commonly used types
pub use elo::EloCalculator;
pub use ranking::{rank_of, standings};
pub use store::{RatingEntry, RatingStore};
