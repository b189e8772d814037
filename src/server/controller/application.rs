use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Paginated},
        application::{
            ApplicationDto, ApplicationFilter, CreateApplicationDto, UpdateApplicationStatusDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthedUser},
        service::application::ApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Apply to a job
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application filed", body = ApplicationDto),
        (status = 400, description = "Job missing, inactive or already applied to", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account is not a job seeker", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(application): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db)
        .apply(&user, application)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List applications visible to the logged-in account
///
/// Job seekers see their own applications, employers see applicants to their
/// company's postings, admins see everything.
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(ApplicationFilter),
    responses(
        (status = 200, description = "Page of applications", body = Paginated<ApplicationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Query(filter): Query<ApplicationFilter>,
) -> Result<impl IntoResponse, Error> {
    let listing = ApplicationService::new(&state.db)
        .list(&user, filter)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Move an application through review
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Updated application", body = ApplicationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Application is for another employer's posting", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(application_id): Path<i32>,
    Json(update): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db)
        .update_status(&user, application_id, update)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}
