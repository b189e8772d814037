use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        job::{CreateJobDto, JobCategoryDto, JobDto, JobFilter, JobListDto, UpdateJobDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthedUser},
        service::job::JobService,
    },
};

pub static JOB_TAG: &str = "job";

/// List active job postings
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(JobFilter),
    responses(
        (status = 200, description = "Page of active job postings", body = JobListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<impl IntoResponse, Error> {
    let listing = JobService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// List job categories
#[utoipa::path(
    get,
    path = "/api/jobs/categories",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "All job categories in alphabetical order", body = Vec<JobCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = JobService::new(&state.db).categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// Get a single job posting
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "The job posting", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db).get(job_id).await?;

    Ok((StatusCode::OK, Json(job)))
}

/// Post a new job
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job posted", body = JobDto),
        (status = 400, description = "Company or category does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account is not an employer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(job): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db).create(&user, job).await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Update a job posting
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Updated job posting", body = JobDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Job belongs to another employer", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(job_id): Path<i32>,
    Json(update): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db)
        .update(&user, job_id, update)
        .await?;

    Ok((StatusCode::OK, Json(job)))
}

/// Delete a job posting
#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job deleted", body = MessageDto),
        (status = 400, description = "Job still has applications", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Job belongs to another employer", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    JobService::new(&state.db).delete(&user, job_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Job deleted".to_string(),
        }),
    ))
}
