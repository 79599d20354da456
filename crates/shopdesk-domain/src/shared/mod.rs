use serde::{Deserialize, Serialize};

pub mod wire;

/// Backend identifiers are plain integers for every resource.
pub type EntityId = i64;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    InvalidCredentials = 1001,
    Unauthorized = 1002,
    AuthenticationCancelled = 1003,

    // Resource Not Found (2xxx)
    ResourceNotFound = 2001,

    // Validation (3xxx)
    ValidationError = 3001,

    // Data (4xxx)
    SerializationError = 4001,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    NetworkError = 5002,
    TimeoutError = 5003,
    ExternalServiceError = 5004,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::Unauthorized
            | ErrorCode::NetworkError
            | ErrorCode::TimeoutError => ErrorSeverity::Warning,

            ErrorCode::ResourceNotFound
            | ErrorCode::ValidationError
            | ErrorCode::AuthenticationCancelled => ErrorSeverity::Info,

            ErrorCode::SerializationError | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            ErrorCode::ExternalServiceError => ErrorSeverity::Warning,
        }
    }

    /// Check if the failed operation may succeed when the user tries again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError
                | ErrorCode::TimeoutError
                | ErrorCode::ExternalServiceError
                | ErrorCode::AuthenticationCancelled
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success response from the backend, status kept as sent.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::NotFound(_) => ErrorCode::ResourceNotFound,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::Http { status, .. } => match status {
                401 | 403 => ErrorCode::Unauthorized,
                404 => ErrorCode::ResourceNotFound,
                400 | 409 | 422 => ErrorCode::ValidationError,
                _ => ErrorCode::ExternalServiceError,
            },
            DomainError::Network(_) => ErrorCode::NetworkError,
            DomainError::Timeout(_) => ErrorCode::TimeoutError,
            DomainError::Cancelled(_) => ErrorCode::AuthenticationCancelled,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidCredentials(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::NotFound(msg)
            | DomainError::Validation(msg)
            | DomainError::Network(msg)
            | DomainError::Timeout(msg)
            | DomainError::Cancelled(msg)
            | DomainError::Serialization(msg)
            | DomainError::Infrastructure(msg) => msg,
            DomainError::Http { message, .. } => message,
        }
    }

    /// HTTP status of a backend rejection, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        fields.sort();
        DomainError::Validation(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_keeps_status_and_maps_code() {
        let err = DomainError::Http {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), ErrorCode::ResourceNotFound);
        assert_eq!(err.message(), "missing");

        let err = DomainError::Http {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::ExternalServiceError);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_format_with_code() {
        let err = DomainError::Validation("name too short".to_string());
        assert_eq!(
            err.format_with_code(),
            "[3001] Validation error: name too short"
        );
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert!(!err.is_recoverable());
    }
}
