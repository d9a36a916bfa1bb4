//! Owned rating storage with lazy participant registration
//!
//! One store is constructed per processing run and owned exclusively by the
//! processor driving that run; there is no locking and no sharing.

use crate::types::ParticipantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Storage entry for one participant's rating with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub participant_id: ParticipantId,
    pub rating: f64,
    /// Number of times the rating has been overwritten since creation
    pub contests_played: u64,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RatingEntry {
    /// Create a new entry for a freshly seen participant
    pub fn new(participant_id: ParticipantId, rating: f64) -> Self {
        let now = crate::utils::current_timestamp();
        Self {
            participant_id,
            rating,
            contests_played: 0,
            last_updated: now,
            created_at: now,
        }
    }

    /// Overwrite the rating and bump metadata
    pub fn update_rating(&mut self, new_rating: f64) {
        self.rating = new_rating;
        self.contests_played += 1;
        self.last_updated = crate::utils::current_timestamp();
    }
}

/// Mapping from participant id to current rating.
///
/// First access to an unknown id installs the configured default rating and
/// fixes the participant's first-seen position; ranking uses that position
/// to break exact rating ties. Ratings are unbounded in both directions and
/// never clamped here. Entries are never deleted.
#[derive(Debug, Clone)]
pub struct RatingStore {
    entries: HashMap<ParticipantId, RatingEntry>,
    insertion_order: Vec<ParticipantId>,
    default_rating: f64,
}

impl RatingStore {
    /// Create an empty store with the given default rating
    pub fn new(default_rating: f64) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: Vec::new(),
            default_rating,
        }
    }

    /// Stored rating for `id`, installing the default on first access.
    ///
    /// First access is also first write: the participant is registered
    /// immediately so later ranking lookups can find it.
    pub fn get_or_insert(&mut self, id: &str) -> f64 {
        if let Some(entry) = self.entries.get(id) {
            return entry.rating;
        }

        debug!(
            participant_id = id,
            default_rating = self.default_rating,
            "registering new participant"
        );
        self.entries
            .insert(id.to_string(), RatingEntry::new(id.to_string(), self.default_rating));
        self.insertion_order.push(id.to_string());
        self.default_rating
    }

    /// Overwrite `id`'s rating unconditionally, creating the entry if absent
    pub fn set(&mut self, id: &str, rating: f64) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.update_rating(rating);
        } else {
            self.entries
                .insert(id.to_string(), RatingEntry::new(id.to_string(), rating));
            self.insertion_order.push(id.to_string());
        }
    }

    /// Stored rating, if the participant is known
    pub fn rating(&self, id: &str) -> Option<f64> {
        self.entries.get(id).map(|entry| entry.rating)
    }

    /// Full entry with metadata, if the participant is known
    pub fn entry(&self, id: &str) -> Option<&RatingEntry> {
        self.entries.get(id)
    }

    /// Whether the participant has been registered
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Participants in first-seen order
    pub fn participants(&self) -> &[ParticipantId] {
        &self.insertion_order
    }

    /// Number of registered participants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no participant has been registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rating installed on first access
    pub fn default_rating(&self) -> f64 {
        self.default_rating
    }
}
