use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::quiz_policy::{PASS_THRESHOLD, SCORE_SCALE_MAX};

/// One submitted attempt. `score` is on a 0-10 scale.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    #[serde(alias = "id")]
    pub attempt_id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Pass threshold is inclusive: exactly half the scale passes.
pub fn is_passing_score(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

impl AttemptRecord {
    pub fn is_passing(&self) -> bool {
        is_passing_score(self.score)
    }

    pub fn is_within_scale(&self) -> bool {
        (0.0..=SCORE_SCALE_MAX).contains(&self.score)
    }
}

/// The attempt service's answer for one student on one quiz.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptHistory {
    pub latest: AttemptRecord,
    #[serde(default)]
    pub history: Vec<AttemptRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_attempt(score: f64) -> AttemptRecord {
        AttemptRecord {
            attempt_id: "attempt-1".to_string(),
            score,
            submitted_at: Some(Utc::now()),
        }
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        assert!(make_attempt(5.0).is_passing());
        assert!(make_attempt(10.0).is_passing());
        assert!(!make_attempt(4.99).is_passing());
        assert!(!make_attempt(0.0).is_passing());
    }

    #[test]
    fn scale_check_rejects_out_of_range_scores() {
        assert!(make_attempt(7.5).is_within_scale());
        assert!(!make_attempt(11.0).is_within_scale());
        assert!(!make_attempt(-1.0).is_within_scale());
    }

    #[test]
    fn history_accepts_id_alias_and_missing_history() {
        let parsed: AttemptHistory =
            serde_json::from_str(r#"{ "latest": { "id": "A9", "score": 3 } }"#).unwrap();

        assert_eq!(parsed.latest.attempt_id, "A9");
        assert_eq!(parsed.latest.score, 3.0);
        assert!(parsed.latest.submitted_at.is_none());
        assert!(parsed.history.is_empty());
    }
}
