//! Rank derivation from a rating snapshot

use crate::error::RatingError;
use crate::rating::store::RatingStore;
use crate::types::ParticipantId;
use std::cmp::Ordering;

/// Full standings: all known participants ordered by rating descending.
///
/// Exact rating ties keep first-seen order: a participant registered earlier
/// outranks a later arrival with the same rating. This is a deliberate,
/// documented rule, not an artifact of map iteration.
pub fn standings(store: &RatingStore) -> Vec<(ParticipantId, f64)> {
    let mut table: Vec<(ParticipantId, f64)> = store
        .participants()
        .iter()
        .filter_map(|id| store.rating(id).map(|rating| (id.clone(), rating)))
        .collect();

    // Stable sort over first-seen order, so equal ratings keep it
    table.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    table
}

/// 1-based rank of `participant_id` when all known ratings are sorted
/// descending (rank 1 = highest rating).
///
/// Fails when the participant has never been registered; callers must
/// register participants through the store before asking for ranks.
pub fn rank_of(store: &RatingStore, participant_id: &str) -> crate::error::Result<usize> {
    standings(store)
        .iter()
        .position(|(id, _)| id == participant_id)
        .map(|index| index + 1)
        .ok_or_else(|| {
            RatingError::ParticipantNotFound {
                participant_id: participant_id.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_rating_descending() {
        let mut store = RatingStore::new(1000.0);
        store.set("a", 1010.0);
        store.set("b", 990.0);
        store.set("c", 1200.0);

        assert_eq!(rank_of(&store, "c").unwrap(), 1);
        assert_eq!(rank_of(&store, "a").unwrap(), 2);
        assert_eq!(rank_of(&store, "b").unwrap(), 3);
    }

    #[test]
    fn test_equal_ratings_break_by_first_seen() {
        let mut store = RatingStore::new(1000.0);
        store.get_or_insert("second");
        store.get_or_insert("third");
        store.set("first", 1500.0);

        // "second" and "third" share the default rating; the earlier
        // registration wins the tie
        assert_eq!(rank_of(&store, "first").unwrap(), 1);
        assert_eq!(rank_of(&store, "second").unwrap(), 2);
        assert_eq!(rank_of(&store, "third").unwrap(), 3);
    }

    #[test]
    fn test_unknown_participant_errors() {
        let mut store = RatingStore::new(1000.0);
        store.get_or_insert("known");

        assert!(rank_of(&store, "unknown").is_err());
    }

    #[test]
    fn test_standings_table() {
        let mut store = RatingStore::new(1000.0);
        store.set("a", 990.0);
        store.set("b", 1010.0);

        let table = standings(&store);
        assert_eq!(
            table,
            vec![("b".to_string(), 1010.0), ("a".to_string(), 990.0)]
        );
    }

    #[test]
    fn test_empty_store_standings() {
        let store = RatingStore::new(1000.0);
        assert!(standings(&store).is_empty());
    }
}
