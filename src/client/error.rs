use thiserror::Error;

/// Errors surfaced by the client SDK.
///
/// Probe methods and [`logout`](crate::client::AuthService::logout) swallow
/// errors by contract and never return this type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storage backend failed to read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Invalid or expired signup session")]
    SignupNotFound,

    #[error("Verification code does not match")]
    OtpMismatch,

    #[error("Verification code has expired")]
    OtpExpired,

    #[error("Already applied to this job")]
    AlreadyApplied,

    #[error("Session has expired")]
    SessionExpired,
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
