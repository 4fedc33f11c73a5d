//! BiGG Models API client
//!
//! Rate-limited HTTP client for the BiGG compound search endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use super::traits::{CandidateRecord, CompoundSearch, SearchError};
use super::types::BiggSearchResponse;
use crate::config::SearchConfig;

pub struct BiggClient {
    client: Client,
    base_url: String,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl BiggClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_interval: Duration::from_millis(config.rate_limit_ms),
            last_request: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Enforce rate limiting between requests
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl CompoundSearch for BiggClient {
    async fn search(
        &self,
        query: &str,
        entity_type: &str,
    ) -> Result<Vec<CandidateRecord>, SearchError> {
        self.rate_limit().await;
        let url = format!("{}/search", self.base_url);

        tracing::debug!(%url, query, entity_type, "Searching compounds");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("search_type", entity_type)])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        check_status(response.status())?;

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        decode_candidates(&text)
    }
}

fn check_status(status: StatusCode) -> Result<(), SearchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(SearchError::Status {
            status: status.as_u16(),
        })
    }
}

/// Parse a search response body into candidates
fn decode_candidates(body: &str) -> Result<Vec<CandidateRecord>, SearchError> {
    let parsed: BiggSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    let reported = parsed.results_count;
    let candidates = parsed.into_candidates();
    tracing::debug!(
        results_count = ?reported,
        candidates = candidates.len(),
        "Search response decoded"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = SearchConfig {
            base_url: "http://localhost:9/api/v2/".to_string(),
            ..SearchConfig::default()
        };
        let client = BiggClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/api/v2");
    }

    #[test]
    fn test_non_success_status_is_status_error() {
        assert!(check_status(StatusCode::OK).is_ok());

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE).unwrap_err();
        assert!(matches!(err, SearchError::Status { status: 503 }));
        assert_eq!(err.to_string(), "Service returned HTTP 503");

        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(SearchError::Status { status: 404 })
        ));
    }

    #[test]
    fn test_undecodable_body_is_decode_error() {
        assert!(matches!(
            decode_candidates("<html>maintenance</html>"),
            Err(SearchError::Decode(_))
        ));
        // results must be a list
        assert!(matches!(
            decode_candidates(r#"{"results": "none"}"#),
            Err(SearchError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_candidates() {
        let body = r#"{
            "results": [
                {"bigg_id": "glc__D", "organism": "Escherichia_coli"},
                {"bigg_id": "glc__D", "organism": "/"}
            ],
            "results_count": 2
        }"#;
        let candidates = decode_candidates(body).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].bigg_id, "glc__D");
        assert_eq!(candidates[1].organism, "/");
    }

    #[tokio::test]
    async fn test_rate_limit_spaces_requests() {
        let config = SearchConfig {
            rate_limit_ms: 50,
            ..SearchConfig::default()
        };
        let client = BiggClient::new(&config).unwrap();

        let start = Instant::now();
        client.rate_limit().await;
        client.rate_limit().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
