use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("Invalid credentials for email {0:?}")]
    InvalidCredentials(String),
    #[error("Account for email {0:?} has not completed email verification")]
    AccountNotVerified(String),
    #[error("Account for email {0:?} is deactivated")]
    AccountDeactivated(String),
    #[error("No pending signup found for ID {0:?}")]
    SignupNotFound(String),
    #[error("OTP mismatch for pending signup ID {0:?}")]
    OtpMismatch(String),
    #[error("OTP expired for pending signup ID {0:?}")]
    OtpExpired(String),
    #[error("Password reset token is invalid, expired, or already used")]
    InvalidResetToken,
    #[error("Current password does not match for user ID {0}")]
    WrongCurrentPassword(i32),
    #[error("Request is missing a bearer token")]
    MissingToken,
    #[error("Bearer token failed validation")]
    InvalidToken,
    #[error("User ID {0} is not an admin")]
    AdminRequired(i32),
    #[error("User ID {0} is not an employer")]
    EmployerRequired(i32),
    #[error("User ID {0} is not a job seeker")]
    SeekerRequired(i32),
}

impl AuthError {
    fn body(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::EmailTaken(_) => {
                Self::body(StatusCode::BAD_REQUEST, "Email is already registered")
            }
            Self::InvalidCredentials(_) => {
                Self::body(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::AccountNotVerified(_) => Self::body(
                StatusCode::FORBIDDEN,
                "Please verify your email before logging in",
            ),
            Self::AccountDeactivated(_) => {
                Self::body(StatusCode::FORBIDDEN, "Account is deactivated")
            }
            Self::SignupNotFound(_) => Self::body(
                StatusCode::BAD_REQUEST,
                "Invalid or expired signup session",
            ),
            Self::OtpMismatch(_) => Self::body(StatusCode::BAD_REQUEST, "Invalid OTP"),
            Self::OtpExpired(_) => Self::body(StatusCode::BAD_REQUEST, "OTP expired"),
            Self::InvalidResetToken => Self::body(
                StatusCode::BAD_REQUEST,
                "Invalid or expired password reset token",
            ),
            Self::WrongCurrentPassword(_) => {
                Self::body(StatusCode::BAD_REQUEST, "Current password is incorrect")
            }
            Self::MissingToken => {
                Self::body(StatusCode::UNAUTHORIZED, "Missing authorization token")
            }
            Self::InvalidToken => {
                Self::body(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::AdminRequired(_) => Self::body(StatusCode::FORBIDDEN, "Admin access required"),
            Self::EmployerRequired(_) => {
                Self::body(StatusCode::FORBIDDEN, "Employer access required")
            }
            Self::SeekerRequired(_) => {
                Self::body(StatusCode::FORBIDDEN, "Only job seekers can apply to jobs")
            }
        }
    }
}
