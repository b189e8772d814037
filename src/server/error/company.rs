use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("Company ID {0} not found")]
    NotFound(i32),
    #[error("Company ID {0} still has job postings and cannot be deleted")]
    JobsExist(i32),
    #[error("Employer user ID {0} referenced by company does not exist")]
    EmployerNotFound(i32),
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Company not found"),
            Self::JobsExist(_) => (
                StatusCode::BAD_REQUEST,
                "Company still has job postings and cannot be deleted",
            ),
            Self::EmployerNotFound(_) => {
                (StatusCode::BAD_REQUEST, "Employer account not found")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
