mod error;
mod types;

pub use types::{ListResponse, USER_AGENT};

pub(crate) use error::{from_reqwest, from_status};

use anyhow::{Context, Result};
use log::{debug, error, warn};
use reqwest::{header, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use shopdesk_domain::DomainError;

use crate::session::SessionState;

/// JSON client for the shop backend.
///
/// Every request carries `Authorization: Bearer <token>` while a session is
/// active. Non-2xx answers become [`DomainError::Http`] with the status kept.
/// There is no retry.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionState) -> Result<Self> {
        Self::with_timeout(base_url, session, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        session: SessionState,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub(crate) fn build_url(base: &str, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = Self::build_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let request = self
            .client
            .request(method, &url)
            .header(header::ACCEPT, "application/json");

        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and return the raw body of a successful answer.
    async fn execute(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<String, DomainError> {
        let response = request.send().await.map_err(|e| {
            warn!("{} failed: {}", operation, e);
            from_reqwest(e, operation)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| from_reqwest(e, operation))?;

        if !status.is_success() {
            warn!(
                "{} returned {}: {}",
                operation,
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(from_status(status, &body));
        }

        debug!("{} -> {} ({} bytes)", operation, status, body.len());
        Ok(body)
    }

    fn parse<T: DeserializeOwned>(body: &str, operation: &str) -> Result<T, DomainError> {
        serde_json::from_str(body).map_err(|e| {
            error!("Failed to parse {} response: {}", operation, e);
            DomainError::Serialization(format!("{operation}: {e}"))
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let operation = format!("GET {path}");
        let body = self.execute(self.request(Method::GET, path), &operation).await?;
        Self::parse(&body, &operation)
    }

    /// GET a list endpoint, accepting both the bare and the enveloped shape.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, DomainError> {
        let list: ListResponse<T> = self.get_json(path).await?;
        Ok(list.into_items())
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let operation = format!("POST {path}");
        let request = self.request(Method::POST, path).json(body);
        let body = self.execute(request, &operation).await?;
        Self::parse(&body, &operation)
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let operation = format!("PATCH {path}");
        let request = self.request(Method::PATCH, path).json(body);
        let body = self.execute(request, &operation).await?;
        Self::parse(&body, &operation)
    }

    /// DELETE, returning whatever text the backend answered with.
    pub async fn delete(&self, path: &str) -> Result<String, DomainError> {
        let operation = format!("DELETE {path}");
        self.execute(self.request(Method::DELETE, path), &operation)
            .await
    }
}
