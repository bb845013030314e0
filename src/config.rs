use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub quiz_service_url: String,
    pub course_service_url: String,
    pub module_service_url: String,
    pub upstream_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8081/api";

impl Config {
    pub fn from_env() -> Self {
        Self {
            quiz_service_url: upstream_url("QUIZ_SERVICE_URL"),
            course_service_url: upstream_url("COURSE_SERVICE_URL"),
            module_service_url: upstream_url("MODULE_SERVICE_URL"),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            quiz_service_url: "http://127.0.0.1:9".to_string(),
            course_service_url: "http://127.0.0.1:9".to_string(),
            module_service_url: "http://127.0.0.1:9".to_string(),
            upstream_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

/// Base URLs are stored without a trailing slash so paths can be appended verbatim.
fn upstream_url(key: &str) -> String {
    env::var(key)
        .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.quiz_service_url.is_empty());
        assert!(!config.quiz_service_url.ends_with('/'));
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(1));
    }
}
