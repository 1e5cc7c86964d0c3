use thiserror::Error;

use ledgerctl_core::ClientError;

/// Error from a remote API call.
///
/// 401 is split out from every other remote status because the caller's
/// reaction differs: bad credentials are the user's problem, anything
/// else is the server's.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 401.
    #[error("{0}")]
    Unauthorized(String),

    /// The server answered with any other non-success status.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The request never completed (DNS, connection refused, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode into the expected shape.
    #[error("bad response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ApiError> for ClientError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Unauthorized(m) => ClientError::InvalidCredentials(m),
            ApiError::Remote { status, message } => ClientError::AccessProblem { status, message },
            ApiError::Transport(e) => ClientError::Transport(e.to_string()),
            ApiError::Decode(e) => ClientError::Decode(e.to_string()),
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The server answers `{"code": "...", "message": "..."}`; older
/// endpoints use `{"error": "..."}`. Fall back to the raw text.
pub fn extract_message(status: u16, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v["message"].as_str() {
            return msg.to_string();
        }
        if let Some(msg) = v["error"].as_str() {
            return msg.to_string();
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_field() {
        assert_eq!(
            extract_message(404, r#"{"code":"NOT_FOUND","message":"no such account"}"#),
            "no such account"
        );
    }

    #[test]
    fn extracts_legacy_error_field() {
        assert_eq!(extract_message(400, r#"{"error":"bad input"}"#), "bad input");
    }

    #[test]
    fn falls_back_to_raw_text_then_status() {
        assert_eq!(extract_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_message(502, "  "), "HTTP 502");
    }

    #[test]
    fn converts_to_client_error() {
        let e: ClientError = ApiError::Unauthorized("nope".into()).into();
        assert_eq!(e.error_code(), "INVALID_CREDENTIALS");

        let e: ClientError = ApiError::Remote { status: 503, message: "down".into() }.into();
        assert_eq!(e.error_code(), "ACCESS_PROBLEM");
        assert_eq!(e.status(), Some(503));
    }
}
