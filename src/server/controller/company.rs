use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, Paginated},
        company::{CompanyDto, CompanyFilter, CreateCompanyDto, UpdateCompanyDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AdminUser},
        service::company::CompanyService,
    },
};

pub static COMPANY_TAG: &str = "company";

/// List companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    params(CompanyFilter),
    responses(
        (status = 200, description = "Page of companies", body = Paginated<CompanyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(filter): Query<CompanyFilter>,
) -> Result<impl IntoResponse, Error> {
    let listing = CompanyService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Register a company
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company registered", body = CompanyDto),
        (status = 400, description = "Employer account does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(company): Json<CreateCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    let company = CompanyService::new(&state.db).create(company).await?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// Update a company
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Updated company", body = CompanyDto),
        (status = 400, description = "Employer account does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(company_id): Path<i32>,
    Json(update): Json<UpdateCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    let company = CompanyService::new(&state.db)
        .update(company_id, update)
        .await?;

    Ok((StatusCode::OK, Json(company)))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company deleted", body = MessageDto),
        (status = 400, description = "Company still has job postings", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account lacks admin access", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CompanyService::new(&state.db).delete(company_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Company deleted".to_string(),
        }),
    ))
}
