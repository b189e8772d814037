use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthedUser},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the logged-in account's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the logged-in account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let profile = UserService::new(&state.db).profile(&user)?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the logged-in account's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = UserService::new(&state.db)
        .update_profile(user.id, update)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
