use reqwest::StatusCode;
use shared::error::ErrorBody;
use thiserror::Error;

/// Failure taxonomy for remote board operations.
///
/// Every fault the gateway can raise collapses into one of these kinds.
/// The reconciler converts whichever one it catches into a single
/// user-visible notice; none of them trigger automatic retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("network failure: {0}")]
    Transport(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rejected: {0}")]
    Validation(String),
}

impl GatewayError {
    /// Classify a non-success HTTP response.
    ///
    /// The structured `{ message }` body wins over the bare status line
    /// when it parses. 5xx fold into [`GatewayError::Transport`]: for a
    /// pull-based client an unavailable store and an unreachable one call
    /// for the same user response.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            status if status.is_client_error() => Self::Validation(message),
            _ => Self::Transport(message),
        }
    }

    /// Only an expired or missing credential warrants a session-level
    /// response (redirect to sign-in, owned by the auth collaborator).
    /// Every other kind is advisory to the user.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_structured_error_body_message() {
        let body = br#"{"message":"title too short"}"#;
        let err = GatewayError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err, GatewayError::Validation("title too short".to_string()));
    }

    #[test]
    fn falls_back_to_status_line_on_unparseable_body() {
        let err = GatewayError::from_response(StatusCode::NOT_FOUND, b"<html>");
        assert_eq!(err, GatewayError::NotFound("Not Found".to_string()));
    }

    #[test]
    fn only_unauthorized_requires_reauth() {
        let unauthorized =
            GatewayError::from_response(StatusCode::UNAUTHORIZED, br#"{"message":"expired"}"#);
        assert!(unauthorized.requires_reauth());
        assert!(!GatewayError::Transport("connection refused".to_string()).requires_reauth());
        assert!(!GatewayError::NotFound("board".to_string()).requires_reauth());
    }

    #[test]
    fn server_errors_classify_as_transport() {
        let err = GatewayError::from_response(StatusCode::BAD_GATEWAY, b"");
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
