//! Utility functions for the rating engine

use crate::types::ParticipantId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a unique id for one processing run, used to tag log output
pub fn generate_run_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round a value to the given number of decimal digits
pub fn round_to_decimals(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Extract participant identifiers from a free-form pairing label.
///
/// Labels like `"1.1 v 2.2"` carry ids as dotted numeric tokens with
/// arbitrary annotations around them; everything that is not a dotted
/// numeric token is dropped.
pub fn extract_participant_ids(label: &str) -> Vec<ParticipantId> {
    label
        .split_whitespace()
        .filter(|token| is_dotted_numeric(token))
        .map(|token| token.to_string())
        .collect()
}

fn is_dotted_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_run_ids() {
        let id1 = generate_run_id();
        let id2 = generate_run_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(1010.288, 1), 1010.3);
        assert_eq!(round_to_decimals(999.712, 1), 999.7);
        assert_eq!(round_to_decimals(1000.0, 1), 1000.0);
        assert_eq!(round_to_decimals(1234.5678, 2), 1234.57);
        assert_eq!(round_to_decimals(-12.35, 1), -12.4);
    }

    #[test]
    fn test_extract_participant_ids() {
        assert_eq!(
            extract_participant_ids("1.1 v 2.2"),
            vec!["1.1".to_string(), "2.2".to_string()]
        );
        assert_eq!(
            extract_participant_ids("cage 1: 3.4 vs 5.6 (rematch)"),
            vec!["3.4".to_string(), "5.6".to_string()]
        );
        assert!(extract_participant_ids("no ids here").is_empty());
        assert!(extract_participant_ids("").is_empty());
    }

    #[test]
    fn test_dotted_numeric_rejects_plain_integers() {
        assert!(extract_participant_ids("1 v 2").is_empty());
        assert_eq!(
            extract_participant_ids("-1.5 beat 2.0"),
            vec!["-1.5".to_string(), "2.0".to_string()]
        );
    }
}
