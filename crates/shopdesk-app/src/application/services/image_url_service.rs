use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use shopdesk_domain::drive::{candidate_urls, convert_to_direct_url, extract_file_id, ImageProbe};
use shopdesk_infrastructure::config::TimeoutConfig;

/// Turns Drive share links into URLs that actually render an image.
pub struct ImageUrlService {
    probe: Arc<dyn ImageProbe>,
    probe_timeout: Duration,
}

impl ImageUrlService {
    pub fn new(probe: Arc<dyn ImageProbe>, timeouts: &TimeoutConfig) -> Self {
        Self {
            probe,
            probe_timeout: timeouts.image_probe,
        }
    }

    pub fn direct_url(&self, drive_url: &str) -> String {
        convert_to_direct_url(drive_url)
    }

    /// Probe the hotlink candidates one after another and return the first
    /// that loads. When none does, the first candidate is returned anyway.
    pub async fn get_working_image_url(&self, drive_url: &str) -> String {
        let Some(file_id) = extract_file_id(drive_url) else {
            return drive_url.to_string();
        };

        let candidates = candidate_urls(&file_id);
        for url in &candidates {
            match timeout(self.probe_timeout, self.probe.loads(url)).await {
                Ok(true) => {
                    debug!(%url, "Image candidate works");
                    return url.clone();
                }
                Ok(false) => debug!(%url, "Image candidate failed"),
                Err(_) => debug!(%url, "Image candidate timed out"),
            }
        }

        let [first, ..] = candidates;
        first
    }
}
