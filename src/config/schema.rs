//! Contest record field mapping

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Names of the fields the engine reads from each contest record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Field carrying the winner's id
    pub winner_field: String,
    /// Field carrying the loser's id
    pub loser_field: String,
    /// Field whose non-null value marks a tie, if any
    pub tie_field: Option<String>,
    /// Fields copied verbatim onto every emitted history row
    pub passthrough_fields: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            winner_field: "winner_id".to_string(),
            loser_field: "loser_id".to_string(),
            tie_field: None,
            passthrough_fields: Vec::new(),
        }
    }
}

impl SchemaConfig {
    /// Create a schema with custom winner and loser field names
    pub fn new(winner_field: &str, loser_field: &str) -> Self {
        Self {
            winner_field: winner_field.to_string(),
            loser_field: loser_field.to_string(),
            ..Self::default()
        }
    }

    /// Set the tie-marker field
    pub fn with_tie_field(mut self, field: &str) -> Self {
        self.tie_field = Some(field.to_string());
        self
    }

    /// Set the passthrough fields copied onto history rows
    pub fn with_passthrough_fields(mut self, fields: &[&str]) -> Self {
        self.passthrough_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Validate field names
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.winner_field.is_empty() {
            return Err(RatingError::ConfigurationError {
                message: "Winner field name must not be empty".to_string(),
            }
            .into());
        }

        if self.loser_field.is_empty() {
            return Err(RatingError::ConfigurationError {
                message: "Loser field name must not be empty".to_string(),
            }
            .into());
        }

        if self.winner_field == self.loser_field {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "Winner and loser fields must differ, both are '{}'",
                    self.winner_field
                ),
            }
            .into());
        }

        if let Some(tie_field) = &self.tie_field {
            if tie_field.is_empty() {
                return Err(RatingError::ConfigurationError {
                    message: "Tie field name must not be empty when set".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema() {
        let schema = SchemaConfig::default();
        assert_eq!(schema.winner_field, "winner_id");
        assert_eq!(schema.loser_field, "loser_id");
        assert!(schema.tie_field.is_none());
        assert!(schema.passthrough_fields.is_empty());
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let schema = SchemaConfig::new("winner", "loser")
            .with_tie_field("tie")
            .with_passthrough_fields(&["date", "cage"]);

        assert_eq!(schema.winner_field, "winner");
        assert_eq!(schema.loser_field, "loser");
        assert_eq!(schema.tie_field.as_deref(), Some("tie"));
        assert_eq!(schema.passthrough_fields, vec!["date", "cage"]);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_schema_validation() {
        let mut schema = SchemaConfig::default();
        schema.winner_field = String::new();
        assert!(schema.validate().is_err());

        schema = SchemaConfig::new("id", "id");
        assert!(schema.validate().is_err());

        schema = SchemaConfig::default().with_tie_field("");
        assert!(schema.validate().is_err());
    }
}
