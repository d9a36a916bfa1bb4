//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique identifier for contest participants
pub type ParticipantId = String;

/// One raw input row describing a single contest.
///
/// Records are schemaless: upstream collaborators (CSV readers, dataframe
/// exports, JSON lines) hand the engine named fields, and a `SchemaConfig`
/// says which fields carry the winner, the loser, and the tie marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestRecord {
    pub fields: Map<String, Value>,
}

impl ContestRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Extract a participant identifier from the named field.
    ///
    /// Returns `None` when the field is absent, null, or not a scalar id.
    /// Numeric values are accepted and stringified, since tabular sources
    /// often carry ids like `1.1` as numbers rather than strings; booleans,
    /// arrays, and objects are not ids and read as absent.
    pub fn participant_id(&self, field: &str) -> Option<ParticipantId> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether the named field carries a non-null value on this record
    pub fn has_value(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(value) if !value.is_null())
    }
}

/// One emitted output row: a single participant's view of one contest.
///
/// Every processed contest emits two mirror-image rows, one from the
/// winner's perspective and one from the loser's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// 1-based contest number, shared by both rows of a contest
    pub match_number: u64,
    /// Participant this row describes
    pub subject_id: ParticipantId,
    /// The opponent in this contest
    pub agent_id: ParticipantId,
    /// Subject's rating immediately before the contest
    pub original_rating: f64,
    /// Subject's rating immediately after the contest, rounded
    pub updated_rating: f64,
    /// Subject's realized outcome score (1 win, 0 loss, 0.5 tie by default)
    pub outcome_score: f64,
    /// Subject's 1-based rank in the post-contest snapshot
    pub subject_rank: usize,
    /// Agent's 1-based rank in the post-contest snapshot
    pub agent_rank: usize,
    /// Passthrough fields copied verbatim from the source record
    pub extras: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_participant_id_extraction() {
        let record = ContestRecord::new()
            .with_field("winner_id", "1.1")
            .with_field("loser_id", json!(2.2))
            .with_field("notes", Value::Null);

        assert_eq!(record.participant_id("winner_id"), Some("1.1".to_string()));
        assert_eq!(record.participant_id("loser_id"), Some("2.2".to_string()));
        assert_eq!(record.participant_id("notes"), None);
        assert_eq!(record.participant_id("missing"), None);
    }

    #[test]
    fn test_non_scalar_ids_read_as_absent() {
        let record = ContestRecord::new()
            .with_field("winner_id", true)
            .with_field("loser_id", json!(["1.1", "2.2"]))
            .with_field("agent", json!({"id": "1.1"}));

        assert_eq!(record.participant_id("winner_id"), None);
        assert_eq!(record.participant_id("loser_id"), None);
        assert_eq!(record.participant_id("agent"), None);
    }

    #[test]
    fn test_has_value() {
        let record = ContestRecord::new()
            .with_field("tie", "x")
            .with_field("empty", Value::Null);

        assert!(record.has_value("tie"));
        assert!(!record.has_value("empty"));
        assert!(!record.has_value("missing"));
    }
}
