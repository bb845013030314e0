use async_trait::async_trait;
use reqwest::Client;

use crate::{errors::AppResult, models::domain::AttemptHistory};

use super::http_helpers::get_optional_json;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    /// Latest attempt plus history, or `None` when the student never submitted.
    async fn find_by_student_and_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<AttemptHistory>>;
}

/// Attempts live on the quiz service.
pub struct HttpQuizAttemptRepository {
    client: Client,
    base_url: String,
}

impl HttpQuizAttemptRepository {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuizAttemptRepository for HttpQuizAttemptRepository {
    async fn find_by_student_and_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<AttemptHistory>> {
        let url = format!(
            "{}/quizzes/{}/attempts/students/{}",
            self.base_url, quiz_id, student_id
        );
        get_optional_json(&self.client, &url).await
    }
}
