use async_trait::async_trait;
use log::info;

use shopdesk_domain::auth::{AuthGateway, AuthResponse, LoginRequest, RegisterRequest};
use shopdesk_domain::DomainError;

use crate::http::ApiClient;

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";

pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, DomainError> {
        info!("Logging in as {}", request.username);
        self.client.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, DomainError> {
        info!("Registering user {}", request.username);
        self.client.post_json(SIGNUP_PATH, request).await
    }
}
