use reqwest::StatusCode;
use shopdesk_domain::DomainError;

const MAX_BODY_IN_MESSAGE: usize = 200;

/// Transport failures. Status errors never reach here since the client
/// checks the status itself.
pub(crate) fn from_reqwest(err: reqwest::Error, operation: &str) -> DomainError {
    if err.is_timeout() {
        DomainError::Timeout(format!("{operation}: {err}"))
    } else if err.is_decode() || err.is_body() {
        DomainError::Serialization(format!("{operation}: {err}"))
    } else if err.is_builder() {
        DomainError::Infrastructure(format!("{operation}: {err}"))
    } else {
        DomainError::Network(format!("{operation}: {err}"))
    }
}

/// Non-2xx answer, with the body (truncated) as the message.
pub(crate) fn from_status(status: StatusCode, body: &str) -> DomainError {
    let body = body.trim();
    let message = if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unexpected status")
            .to_string()
    } else {
        body.chars().take(MAX_BODY_IN_MESSAGE).collect()
    };

    DomainError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_preserved() {
        let err = from_status(StatusCode::NOT_FOUND, "Producto no encontrado");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Producto no encontrado");
    }

    #[test]
    fn test_empty_body_uses_reason() {
        let err = from_status(StatusCode::UNAUTHORIZED, "  ");
        assert_eq!(err.message(), "Unauthorized");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(1000);
        let err = from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert_eq!(err.message().len(), MAX_BODY_IN_MESSAGE);
    }
}
