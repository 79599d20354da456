use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use shopdesk_domain::auth::{
    AuthGateway, AuthResponse, AuthSession, LoginRequest, RegisterRequest, SessionStore,
};
use shopdesk_domain::DomainError;
use shopdesk_infrastructure::session::SessionState;

/// Login, registration and the persisted session.
///
/// A session exists exactly while a token is held. Nothing checks expiry;
/// the backend answers 401 once the token is stale.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    session: SessionState,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn SessionStore>,
        session: SessionState,
    ) -> Self {
        Self {
            gateway,
            store,
            session,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, DomainError> {
        request.validate()?;

        let response = self.gateway.login(&request).await?;
        let session = AuthSession::from_response(&response).ok_or_else(|| {
            DomainError::Unauthorized("Login response did not include a token".to_string())
        })?;

        self.store.save(&session)?;
        self.session.begin(session.clone());

        info!(username = ?session.username, "Logged in");
        Ok(session)
    }

    /// Create an account. The new user still has to log in.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, DomainError> {
        request.validate()?;
        let response = self.gateway.register(&request).await?;
        info!(username = %request.username, "Registered");
        Ok(response)
    }

    pub fn logout(&self) -> Result<(), DomainError> {
        self.session.clear();
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    /// Pick up the session saved by a previous run, if any.
    pub fn restore(&self) -> Result<Option<AuthSession>, DomainError> {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(DomainError::Serialization(message)) => {
                warn!(%message, "Discarding unreadable session");
                self.store.clear()?;
                None
            }
            Err(err) => return Err(err),
        };

        if let Some(session) = &session {
            self.session.begin(session.clone());
        }
        Ok(session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn username(&self) -> Option<String> {
        self.session.username()
    }
}
