//! Bearer token claims and the request extractors built on them.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// Claims carried by a MegaJob bearer token (HS256).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a string
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Builds claims for a freshly authenticated user.
    pub fn new(user_id: i32, email: &str, role: UserRole, expires_in_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expires_in_days);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// The user ID these claims were issued for.
    pub fn user_id(&self) -> Result<i32, Error> {
        self.sub
            .parse()
            .map_err(|_| Error::ParseError(format!("claims sub {:?} is not a user ID", self.sub)))
    }

    /// Signs these claims into a compact JWT.
    pub fn encode(&self, secret: &str) -> Result<String, Error> {
        let token = encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Decodes and validates a compact JWT.
    ///
    /// Any decoding failure (bad signature, expired, malformed) is reported as
    /// [`AuthError::InvalidToken`] so the caller answers 401 without leaking the
    /// validation detail.
    pub fn decode(token: &str, secret: &str) -> Result<Self, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let token = bearer_token(parts)?;

        Ok(Claims::decode(token, &state.auth.jwt_secret)?)
    }
}

/// The authenticated user behind a bearer token.
///
/// The account row is re-read from the database on every request, so a token
/// whose account has since been deleted stops working (401) and a deactivated
/// account is rejected (403) without waiting for the token to expire.
pub struct AuthedUser(pub entity::user::Model);

impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;
        let state = AppState::from_ref(state);

        let user = UserRepository::new(&state.db)
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user.email).into());
        }

        Ok(AuthedUser(user))
    }
}

/// An authenticated admin or HR user.
///
/// The role is re-read from the database rather than trusted from the token, so
/// demoting an account takes effect on the next request.
pub struct AdminUser(pub entity::user::Model);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthedUser(user) = AuthedUser::from_request_parts(parts, state).await?;

        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;
        if !role.is_admin() {
            return Err(AuthError::AdminRequired(user.id).into());
        }

        Ok(AdminUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)
}
