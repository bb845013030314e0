use async_trait::async_trait;
use reqwest::Client;

use crate::{errors::AppResult, models::domain::CourseSummary};

use super::http_helpers::get_optional_json;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseSummary>>;
}

pub struct HttpCourseRepository {
    client: Client,
    base_url: String,
}

impl HttpCourseRepository {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CourseRepository for HttpCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseSummary>> {
        let url = format!("{}/courses/{}", self.base_url, id);
        get_optional_json(&self.client, &url).await
    }
}
