use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Job ID {0} not found")]
    NotFound(i32),
    #[error("Company ID {0} referenced by job does not exist")]
    CompanyNotFound(i32),
    #[error("Job category ID {0} does not exist")]
    CategoryNotFound(i32),
    #[error("User ID {user_id} does not own the company for job ID {job_id}")]
    NotOwner { user_id: i32, job_id: i32 },
    #[error("Job ID {0} still has applications and cannot be deleted")]
    ApplicationsExist(i32),
}

impl JobError {
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

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => Self::body(StatusCode::NOT_FOUND, "Job not found"),
            Self::CompanyNotFound(_) => Self::body(StatusCode::BAD_REQUEST, "Company not found"),
            Self::CategoryNotFound(_) => {
                Self::body(StatusCode::BAD_REQUEST, "Job category not found")
            }
            Self::NotOwner { .. } => Self::body(
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this job",
            ),
            Self::ApplicationsExist(_) => Self::body(
                StatusCode::BAD_REQUEST,
                "Job still has applications and cannot be deleted",
            ),
        }
    }
}
