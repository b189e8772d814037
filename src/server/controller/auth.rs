use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            AuthResponseDto, ChangePasswordDto, ForgotPasswordDto, LoginDto, RegisterDto,
            RegisterResponseDto, ResendOtpDto, ResetPasswordDto, UserDto, VerifyOtpDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthedUser, Claims},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Start a signup, parking it behind an emailed verification code
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Verification code issued for the new signup", body = RegisterResponseDto),
        (status = 400, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(signup): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .register(signup)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Verify the signup code and create the account
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Account created and logged in", body = AuthResponseDto),
        (status = 400, description = "Unknown signup, wrong code or expired code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(verify): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .verify_otp(verify)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Send a fresh verification code for a pending signup
#[utoipa::path(
    post,
    path = "/api/auth/resend-otp",
    tag = AUTH_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "Verification code resent", body = MessageDto),
        (status = 400, description = "Unknown signup session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(resend): Json<ResendOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .resend_otp(resend)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account not verified or deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .login(credentials)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Log in to the admin portal, restricted to admin and HR accounts
#[utoipa::path(
    post,
    path = "/api/auth/admin-login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in to the admin portal", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .admin_login(credentials)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Request a password reset link
///
/// The response is the same whether or not the email belongs to an account.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset link sent if the account exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(forgot): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .forgot_password(forgot)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Redeem a password reset token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Invalid, used or expired reset token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(reset): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .reset_password(reset)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Change the password of the logged-in account
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Current password is incorrect", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(change): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.auth)
        .change_password(&user, change)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Check a session token and return the account behind it
#[utoipa::path(
    get,
    path = "/api/auth/validate-session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = UserDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_session(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.auth)
        .validate(&claims)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Log out
///
/// Sessions are stateless JWTs, so there is nothing to revoke server side;
/// clients drop their stored token. Always succeeds, authenticated or not.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
}
