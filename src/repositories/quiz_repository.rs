use async_trait::async_trait;
use reqwest::Client;

use crate::{errors::AppResult, models::domain::QuizMetadata};

use super::http_helpers::get_optional_json;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizMetadata>>;
}

pub struct HttpQuizRepository {
    client: Client,
    base_url: String,
}

impl HttpQuizRepository {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuizRepository for HttpQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizMetadata>> {
        let url = format!("{}/quizzes/{}", self.base_url, id);
        get_optional_json(&self.client, &url).await
    }
}
