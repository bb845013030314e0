#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, Utc};

    use crate::models::domain::{AttemptHistory, AttemptRecord, QuizMetadata};

    /// Creates a quiz with every optional field filled in
    pub fn quiz(id: &str) -> QuizMetadata {
        QuizMetadata {
            id: id.to_string(),
            title: Some("Kiểm tra quãng cơ bản".to_string()),
            description: Some("Nhận biết quãng hai, ba và năm.".to_string()),
            duration_minutes: Some(20),
        }
    }

    pub fn attempt(attempt_id: &str, score: f64) -> AttemptRecord {
        AttemptRecord {
            attempt_id: attempt_id.to_string(),
            score,
            submitted_at: Some(Utc::now()),
        }
    }

    /// Latest attempt plus `previous` older attempts, newest first
    pub fn attempt_history(latest_id: &str, score: f64, previous: usize) -> AttemptHistory {
        let latest = attempt(latest_id, score);
        let history = (0..previous)
            .map(|i| AttemptRecord {
                attempt_id: format!("{}-prev-{}", latest_id, i),
                score: 2.0,
                submitted_at: Some(Utc::now() - Duration::days(i as i64 + 1)),
            })
            .collect();

        AttemptHistory { latest, history }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz() {
        let quiz = quiz("Q1");
        assert_eq!(quiz.id, "Q1");
        assert_eq!(quiz.effective_duration_minutes(), 20);
    }

    #[test]
    fn test_fixtures_attempt_history() {
        let history = attempt_history("A1", 6.0, 2);
        assert_eq!(history.latest.attempt_id, "A1");
        assert_eq!(history.history.len(), 2);
        assert_eq!(history.history[1].attempt_id, "A1-prev-1");
    }
}
