use async_trait::async_trait;
use reqwest::Client;

use crate::{errors::AppResult, models::domain::ModuleSummary};

use super::http_helpers::get_optional_json;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ModuleSummary>>;
}

pub struct HttpModuleRepository {
    client: Client,
    base_url: String,
}

impl HttpModuleRepository {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ModuleRepository for HttpModuleRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ModuleSummary>> {
        let url = format!("{}/modules/{}", self.base_url, id);
        get_optional_json(&self.client, &url).await
    }
}
