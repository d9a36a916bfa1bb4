//! Sequential contest processing
//!
//! This module drives the rating engine over an ordered stream of contest
//! records: it updates both participants' ratings after every contest and
//! accumulates a flat per-contest history usable for downstream reporting.

use crate::config::{EloConfig, SchemaConfig};
use crate::error::RatingError;
use crate::rating::elo::EloCalculator;
use crate::rating::ranking::rank_of;
use crate::rating::store::RatingStore;
use crate::types::{ContestRecord, HistoryRow};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Drives the rating engine over ordered contest records.
///
/// Owns the rating store for one processing run and applies records strictly
/// in input order; contest order determines the rating trajectory and is part
/// of the engine's contract, not an implementation detail. State and match
/// numbering carry across repeated `process_matches` calls on one processor.
pub struct MatchProcessor {
    schema: SchemaConfig,
    calculator: EloCalculator,
    store: RatingStore,
    match_count: u64,
}

impl MatchProcessor {
    /// Create a processor with a fresh rating store
    pub fn new(schema: SchemaConfig, config: EloConfig) -> crate::error::Result<Self> {
        schema.validate()?;
        let calculator = EloCalculator::new(config)?;
        let store = RatingStore::new(calculator.default_rating());

        Ok(Self {
            schema,
            calculator,
            store,
            match_count: 0,
        })
    }

    /// Read-only view of the rating store
    pub fn store(&self) -> &RatingStore {
        &self.store
    }

    /// Number of contests processed so far
    pub fn matches_processed(&self) -> u64 {
        self.match_count
    }

    /// Process `records` in input order and return the emitted history rows.
    ///
    /// Records without a winner id are skipped before processing and do not
    /// count as contests. A record with a winner but no loser id is fatal to
    /// the run; there is no per-record isolation inside the engine.
    pub fn process_matches(
        &mut self,
        records: &[ContestRecord],
    ) -> crate::error::Result<Vec<HistoryRow>> {
        let run_id = crate::utils::generate_run_id();
        let mut history = Vec::with_capacity(records.len() * 2);
        let mut skipped = 0usize;

        for (record_index, record) in records.iter().enumerate() {
            let winner_id = match record.participant_id(&self.schema.winner_field) {
                Some(id) => id,
                None => {
                    debug!(%run_id, record_index, "skipping record without a winner id");
                    skipped += 1;
                    continue;
                }
            };
            let loser_id = record
                .participant_id(&self.schema.loser_field)
                .ok_or_else(|| RatingError::MissingField {
                    field: self.schema.loser_field.clone(),
                    record_index,
                })?;

            let (winner_score, loser_score) = self.classify_outcome(record);

            // Update phase: both sides are rated from each other's
            // pre-contest ratings, never from a half-updated pair.
            let winner_rating = self.store.get_or_insert(&winner_id);
            let loser_rating = self.store.get_or_insert(&loser_id);
            let winner_updated = self
                .calculator
                .rate(winner_rating, loser_rating, winner_score);
            let loser_updated = self
                .calculator
                .rate(loser_rating, winner_rating, loser_score);
            self.store.set(&winner_id, winner_updated);
            self.store.set(&loser_id, loser_updated);

            // Record phase: ranks come from the post-update snapshot
            let winner_rank = rank_of(&self.store, &winner_id)?;
            let loser_rank = rank_of(&self.store, &loser_id)?;

            self.match_count += 1;
            let extras = self.passthrough(record);

            history.push(HistoryRow {
                match_number: self.match_count,
                subject_id: winner_id.clone(),
                agent_id: loser_id.clone(),
                original_rating: winner_rating,
                updated_rating: winner_updated,
                outcome_score: winner_score,
                subject_rank: winner_rank,
                agent_rank: loser_rank,
                extras: extras.clone(),
            });
            history.push(HistoryRow {
                match_number: self.match_count,
                subject_id: loser_id,
                agent_id: winner_id,
                original_rating: loser_rating,
                updated_rating: loser_updated,
                outcome_score: loser_score,
                subject_rank: loser_rank,
                agent_rank: winner_rank,
                extras,
            });
        }

        info!(
            %run_id,
            records = records.len(),
            processed = records.len() - skipped,
            skipped,
            participants = self.store.len(),
            "finished processing contest records"
        );

        Ok(history)
    }

    fn classify_outcome(&self, record: &ContestRecord) -> (f64, f64) {
        let config = self.calculator.config();
        match &self.schema.tie_field {
            Some(field) if record.has_value(field) => (config.tie_score, config.tie_score),
            _ => (config.win_score, config.loss_score),
        }
    }

    fn passthrough(&self, record: &ContestRecord) -> Map<String, Value> {
        let mut extras = Map::new();
        for field in &self.schema.passthrough_fields {
            // Tabular sources keep the column even when a cell is empty
            let value = record.fields.get(field).cloned().unwrap_or(Value::Null);
            extras.insert(field.clone(), value);
        }
        extras
    }
}

/// One-shot convenience wrapper: build a processor and run it over `records`
pub fn process_matches(
    records: &[ContestRecord],
    schema: SchemaConfig,
    config: EloConfig,
) -> crate::error::Result<Vec<HistoryRow>> {
    let mut processor = MatchProcessor::new(schema, config)?;
    processor.process_matches(records)
}
