//! API client for the logo search endpoint

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::ServiceConfig;
use crate::search::MatchResult;

/// Transport-level failures; the controller collapses all of them to "no results"
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Source of ranked logo matches
#[async_trait]
pub trait LogoApi: Send + Sync {
    /// Fetch matches for an already trimmed query
    async fn search(&self, query: &str) -> Result<Vec<MatchResult>, ClientError>;
}

/// `LogoApi` over HTTP: `GET {base}/api/logos?q=<query>`
#[derive(Clone)]
pub struct HttpLogoApi {
    client: Client,
    endpoint: Url,
}

impl HttpLogoApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join("/api/logos"))
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Client for `client.base_url` with `client.request_timeout_ms`
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ClientError> {
        Self::new(&config.client.base_url, config.client.request_timeout())
    }

    /// Full request URL for `query`
    pub fn url_for(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait]
impl LogoApi for HttpLogoApi {
    async fn search(&self, query: &str) -> Result<Vec<MatchResult>, ClientError> {
        let response = self.client.get(self.url_for(query)).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let api = HttpLogoApi::new("http://localhost:3000", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.url_for("app").as_str(),
            "http://localhost:3000/api/logos?q=app"
        );
        assert_eq!(
            api.url_for("c++ & co").as_str(),
            "http://localhost:3000/api/logos?q=c%2B%2B+%26+co"
        );
    }

    #[test]
    fn test_base_path_is_replaced() {
        let api = HttpLogoApi::new("http://example.com/editor/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.url_for("go").path(), "/api/logos");
    }

    #[test]
    fn test_from_config() {
        let config =
            ServiceConfig::from_yaml("client:\n  base_url: \"http://10.0.0.7:8080\"\n").unwrap();
        let api = HttpLogoApi::from_config(&config).unwrap();
        assert_eq!(
            api.url_for("rust").as_str(),
            "http://10.0.0.7:8080/api/logos?q=rust"
        );

        let defaults = HttpLogoApi::from_config(&ServiceConfig::default()).unwrap();
        assert_eq!(defaults.url_for("go").host_str(), Some("localhost"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpLogoApi::new("not a url", Duration::from_secs(1)),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
