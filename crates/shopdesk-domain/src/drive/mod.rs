//! Google Drive image links: file-id extraction, hotlink candidates and the
//! seams for the external picker and the image probe.

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::shared::DomainError;

/// Known Drive link shapes, tried in order.
static FILE_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/file/d/([a-zA-Z0-9_-]+)",
        r"id=([a-zA-Z0-9_-]+)",
        r"/d/([a-zA-Z0-9_-]+)/",
        r"/open\?id=([a-zA-Z0-9_-]+)",
        r"/uc\?id=([a-zA-Z0-9_-]+)",
        r"drive\.google\.com/file/d/([a-zA-Z0-9_-]+)",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub url: String,
    pub mime_type: String,
}

/// What the user did with the picker dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Picked(Vec<DriveFile>),
    Cancelled,
}

/// The Drive picker widget and its OAuth popup.
#[async_trait]
pub trait PickerBackend: Send + Sync {
    /// Start loading the picker library. Readiness is reported by [`is_ready`](Self::is_ready).
    async fn load_library(&self) -> Result<(), DomainError>;
    fn is_ready(&self) -> bool;
    /// Interactive consent. A closed popup is reported as [`DomainError::Cancelled`].
    async fn request_access_token(&self) -> Result<String, DomainError>;
    async fn open_picker(&self, access_token: &str) -> Result<PickerOutcome, DomainError>;
}

/// Checks whether a URL actually serves an image.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn loads(&self, url: &str) -> bool;
}

pub fn extract_file_id(url: &str) -> Option<String> {
    FILE_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Hotlink formats for a Drive file, most reliable first.
pub fn candidate_urls(file_id: &str) -> [String; 4] {
    [
        format!("https://lh3.googleusercontent.com/d/{file_id}=s800"),
        format!("https://drive.google.com/uc?export=view&id={file_id}"),
        format!("https://drive.google.com/thumbnail?id={file_id}&sz=w800-h600"),
        format!("https://drive.google.com/file/d/{file_id}/view?usp=sharing"),
    ]
}

/// Best-guess direct link without probing. Non-Drive URLs pass through.
pub fn convert_to_direct_url(drive_url: &str) -> String {
    match extract_file_id(drive_url) {
        Some(id) => {
            let [first, ..] = candidate_urls(&id);
            first
        }
        None => drive_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_id_from_known_shapes() {
        let cases = [
            "https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing",
            "https://drive.google.com/open?id=1AbC_d-9",
            "https://drive.google.com/uc?id=1AbC_d-9&export=download",
            "https://docs.google.com/document/d/1AbC_d-9/edit",
            "https://drive.google.com/thumbnail?id=1AbC_d-9&sz=w800",
        ];
        for url in cases {
            assert_eq!(extract_file_id(url).as_deref(), Some("1AbC_d-9"), "{url}");
        }
    }

    #[test]
    fn test_extract_file_id_none_for_other_urls() {
        assert_eq!(extract_file_id("https://example.com/image.png"), None);
        assert_eq!(extract_file_id(""), None);
    }

    #[test]
    fn test_candidate_order() {
        let urls = candidate_urls("XYZ");
        assert_eq!(urls[0], "https://lh3.googleusercontent.com/d/XYZ=s800");
        assert_eq!(urls[1], "https://drive.google.com/uc?export=view&id=XYZ");
        assert_eq!(
            urls[2],
            "https://drive.google.com/thumbnail?id=XYZ&sz=w800-h600"
        );
        assert_eq!(
            urls[3],
            "https://drive.google.com/file/d/XYZ/view?usp=sharing"
        );
    }

    #[test]
    fn test_convert_to_direct_url() {
        assert_eq!(
            convert_to_direct_url("https://drive.google.com/file/d/abc123/view"),
            "https://lh3.googleusercontent.com/d/abc123=s800"
        );
        assert_eq!(
            convert_to_direct_url("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
