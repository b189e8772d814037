//! Error types for the MegaJob server application.
//!
//! This module provides specialized error types for each domain (authentication,
//! users, jobs, companies, applications) plus configuration errors. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions.

pub mod application;
pub mod auth;
pub mod company;
pub mod config;
pub mod job;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, auth::AuthError, company::CompanyError,
        config::ConfigError, job::JobError, user::UserError,
    },
};

/// Main error type for the MegaJob server application.
///
/// Aggregates all domain-specific error types and external library errors into a
/// single unified error type. `thiserror`'s `#[from]` attribute enables automatic
/// conversion from underlying error types via the `?` operator, and the
/// `IntoResponse` implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, OTP, tokens, account state).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User account error (profile lookup, admin management).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Job posting error (lookup, ownership, referenced records).
    #[error(transparent)]
    JobError(#[from] JobError),
    /// Company error (lookup, deletion restrictions).
    #[error(transparent)]
    CompanyError(#[from] CompanyError),
    /// Job application error (duplicates, scoping, job state).
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    /// Parse error (failed to parse a value from its stored string form).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// JWT encoding error; token *validation* failures are mapped to
    /// [`AuthError::InvalidToken`] before reaching this variant.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mappings (400/401/403/404); everything
/// else is treated as an internal server error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::JobError(err) => err.into_response(),
            Self::CompanyError(err) => err.into_response(),
            Self::ApplicationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
