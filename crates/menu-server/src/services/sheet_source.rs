use async_trait::async_trait;
use menu_core::{MenuError, MenuSource};
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

/// Reads published sheet exports over HTTP
#[derive(Clone)]
pub struct HttpSheetSource {
    client: Client,
}

impl HttpSheetSource {
    pub fn new(timeout_seconds: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl MenuSource for HttpSheetSource {
    async fn fetch_csv(&self, url: &str) -> Result<String, MenuError> {
        debug!("Fetching menu export from {}", url);

        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MenuError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;

        debug!("Fetched {} bytes of menu export", text.len());
        Ok(text)
    }
}
