use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, Paginated},
        user::{UpdateUserStatusDto, UserDto, UserFilter},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AdminUser},
        service::user::UserService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List user accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(UserFilter),
    responses(
        (status = 200, description = "Page of user accounts", body = Paginated<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, Error> {
    let listing = UserService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Activate, deactivate or verify a user account
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Updated user account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<i32>,
    Json(update): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .update_status(user_id, update)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}
