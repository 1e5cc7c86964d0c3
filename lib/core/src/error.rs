use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Scripts wrapping the CLI match
// on these — never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const ACCESS_PROBLEM: &str = "ACCESS_PROBLEM";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

// ── ClientError ─────────────────────────────────────────────────────

/// Unified client-side error type.
///
/// Library crates keep their own error enums; everything converts into
/// this at the CLI boundary so failures display uniformly:
///
/// ```text
/// Error (INVALID_CREDENTIALS): wrong user id or password
/// ```
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected locally, before any network call.
    #[error("{0}")]
    Validation(String),

    /// The remote auth endpoint answered 401.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Any other remote failure; carries status for diagnostics.
    #[error("{message}")]
    AccessProblem { status: u16, message: String },

    /// The request never reached the server (DNS, refused, timeout).
    #[error("{0}")]
    Transport(String),

    /// The server answered, but the body was not what we expect.
    #[error("{0}")]
    Decode(String),
}

impl ClientError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => error_code::VALIDATION_FAILED,
            ClientError::InvalidCredentials(_) => error_code::INVALID_CREDENTIALS,
            ClientError::AccessProblem { .. } => error_code::ACCESS_PROBLEM,
            ClientError::Transport(_) => error_code::TRANSPORT_ERROR,
            ClientError::Decode(_) => error_code::DECODE_ERROR,
        }
    }

    /// The remote HTTP status, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::InvalidCredentials(_) => Some(401),
            ClientError::AccessProblem { status, .. } => Some(*status),
            _ => None,
        }
    }
}
