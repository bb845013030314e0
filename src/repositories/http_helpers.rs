use std::time::Duration;

use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStatus {
    Found,
    Missing,
    Failed(StatusCode),
}

/// 404 and 204 mean "no such record"; any other non-2xx is a failure.
pub fn classify_status(status: StatusCode) -> UpstreamStatus {
    match status {
        StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => UpstreamStatus::Missing,
        s if s.is_success() => UpstreamStatus::Found,
        s => UpstreamStatus::Failed(s),
    }
}

/// Builds the shared HTTP client used by every upstream repository.
pub fn build_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// GETs `url` and decodes a JSON body. A missing record or a `null` body yields `None`.
pub async fn get_optional_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> AppResult<Option<T>> {
    log::debug!("GET {}", url);

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    match classify_status(response.status()) {
        UpstreamStatus::Found => {
            let body = response.json::<Option<T>>().await?;
            Ok(body)
        }
        UpstreamStatus::Missing => Ok(None),
        UpstreamStatus::Failed(status) => Err(AppError::UpstreamError(format!(
            "GET {} returned {}",
            url, status
        ))),
    }
}
