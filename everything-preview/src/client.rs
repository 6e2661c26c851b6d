use crate::config::OpenGraphConfig;
use crate::extract::extract_link_preview;
use async_trait::async_trait;
use everything_model::{LinkPreview, LinkPreviewSource, PreviewError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, redirect};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Fetches pages over HTTP and reads their OpenGraph metadata.
#[derive(Debug, Clone)]
pub struct OpenGraphClient {
    config: OpenGraphConfig,
    client: Client,
}

impl OpenGraphClient {
    /// Builds a client from `config`. Fails only if the HTTP stack cannot be
    /// initialized.
    pub fn new(config: OpenGraphConfig) -> Result<Self, PreviewError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| PreviewError::Request(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OpenGraphConfig {
        &self.config
    }
}

#[async_trait]
impl LinkPreviewSource for OpenGraphClient {
    async fn fetch_link_preview(&self, url: &str) -> Result<LinkPreview, PreviewError> {
        let target = Url::parse(url).map_err(|e| PreviewError::Request(format!("{url}: {e}")))?;
        debug!("Fetching link preview: {}", target);

        let response = self
            .client
            .get(target)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| PreviewError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Link preview request for {} returned {}", url, status);
            return Err(PreviewError::Status(status.as_u16()));
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.contains("html") {
                return Err(PreviewError::Malformed(format!(
                    "expected an HTML page, got {content_type}"
                )));
            }
        }

        // Redirects may have moved us; relative URLs resolve against the final page.
        let base = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| PreviewError::Malformed(e.to_string()))?;

        let preview = extract_link_preview(&body, &base);
        info!(
            "Link preview for {}: title={} images={}",
            base,
            preview.title.is_some(),
            preview.images.len()
        );
        Ok(preview)
    }
}
