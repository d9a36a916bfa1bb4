//! Configuration for the rating engine
//!
//! This module holds the tunable parameters of the rating update rule and
//! the field mapping that describes how contest records are laid out.

pub mod rating;
pub mod schema;

// Re-export commonly used types
pub use rating::EloConfig;
pub use schema::SchemaConfig;
