use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("User ID {seeker_id} already applied to job ID {job_id}")]
    AlreadyApplied { job_id: i32, seeker_id: i32 },
    #[error("Job ID {0} referenced by application does not exist")]
    JobNotFound(i32),
    #[error("Job ID {0} is not accepting applications")]
    JobNotActive(i32),
    #[error("Application ID {0} not found")]
    NotFound(i32),
    #[error("User ID {user_id} may not act on application ID {application_id}")]
    Forbidden { user_id: i32, application_id: i32 },
}

impl ApplicationError {
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

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyApplied { .. } => Self::body(
                StatusCode::BAD_REQUEST,
                "You have already applied to this job",
            ),
            Self::JobNotFound(_) => Self::body(StatusCode::NOT_FOUND, "Job not found"),
            Self::JobNotActive(_) => Self::body(
                StatusCode::BAD_REQUEST,
                "This job is not accepting applications",
            ),
            Self::NotFound(_) => Self::body(StatusCode::NOT_FOUND, "Application not found"),
            Self::Forbidden { .. } => Self::body(
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this application",
            ),
        }
    }
}
