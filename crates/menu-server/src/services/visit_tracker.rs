use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{VisitConfig, WebhookMethod};

#[derive(Error, Debug, PartialEq)]
pub enum VisitError {
    #[error("visit webhook URL is not configured")]
    MissingWebhook,

    #[error("webhook request failed: {0}")]
    Request(String),

    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Pings the visit-counting webhook
#[derive(Clone)]
pub struct VisitTracker {
    client: Client,
    webhook_url: Option<String>,
    method: WebhookMethod,
}

impl VisitTracker {
    pub fn new(config: &VisitConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            webhook_url: config
                .webhook_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(String::from),
            method: config.method,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// One attempt, no retry.
    pub async fn record_visit(&self) -> Result<(), VisitError> {
        let url = self.webhook_url.as_deref().ok_or(VisitError::MissingWebhook)?;
        debug!("Recording visit via {:?} {}", self.method, url);

        let request = match self.method {
            WebhookMethod::Get => self.client.get(url),
            WebhookMethod::Post => self.client.post(url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| VisitError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VisitError::Status(response.status().as_u16()));
        }

        info!("Visit recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(url: Option<String>, method: WebhookMethod) -> VisitConfig {
        VisitConfig {
            webhook_url: url,
            method,
            ..VisitConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_webhook() {
        let tracker = VisitTracker::new(&config(Some("  ".into()), WebhookMethod::Get));
        assert!(!tracker.is_configured());
        assert_eq!(tracker.record_visit().await, Err(VisitError::MissingWebhook));
    }

    #[tokio::test]
    async fn test_post_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = VisitTracker::new(&config(Some(server.uri()), WebhookMethod::Post));
        assert_eq!(tracker.record_visit().await, Ok(()));
    }

    #[tokio::test]
    async fn test_webhook_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let tracker = VisitTracker::new(&config(Some(server.uri()), WebhookMethod::Get));
        assert_eq!(tracker.record_visit().await, Err(VisitError::Status(500)));
    }
}
