use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use std::time::Duration;

use shopdesk_domain::drive::ImageProbe;

use super::client::USER_AGENT;

/// Loads a URL and accepts it when it answers 2xx with an `image/*` body.
pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn loads(&self, url: &str) -> bool {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Image probe failed for {}: {}", url, e);
                return false;
            }
        };

        let is_image = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().starts_with("image/"));

        debug!(
            "Image probe {} -> {} (image: {})",
            url,
            response.status(),
            is_image
        );
        response.status().is_success() && is_image
    }
}
