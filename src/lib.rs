//! Elo Ledger - sequential pairwise rating engine
//!
//! This crate maintains running Elo ratings over an ordered stream of
//! contest outcomes and emits a full per-contest history with pre- and
//! post-contest ratings, outcome scores, and derived rankings for
//! downstream reporting.

pub mod config;
pub mod error;
pub mod processor;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{EloConfig, SchemaConfig};
pub use processor::{process_matches, MatchProcessor};
pub use rating::{EloCalculator, RatingStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
