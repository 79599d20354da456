use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::{DomainError, EntityId};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "usuario", default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

/// Credentials kept between runs after a successful login.
///
/// Holding a token is the only authentication check; expiry is left to the
/// backend, which answers 401 once the token is no longer valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthSession {
    /// Build a session from a login answer. No token, no session.
    pub fn from_response(response: &AuthResponse) -> Option<Self> {
        let token = response.token.as_deref().filter(|t| !t.is_empty())?;
        let username = response
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .filter(|name| !name.is_empty());

        Some(Self {
            token: token.to_string(),
            username,
        })
    }
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, DomainError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, DomainError>;
}

/// Persistent storage for the current session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<AuthSession>, DomainError>;
    fn save(&self, session: &AuthSession) -> Result<(), DomainError>;
    fn clear(&self) -> Result<(), DomainError>;
}
