use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    /// User account managing this company's postings, if any
    pub employer_id: Option<i32>,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /api/companies`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCompanyDto {
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub employer_id: Option<i32>,
}

/// Request body for `PUT /api/companies/{id}`, absent fields are left unchanged
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyDto {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub employer_id: Option<i32>,
    pub is_verified: Option<bool>,
}

/// Query parameters for `GET /api/companies`
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct CompanyFilter {
    /// Restrict to verified or unverified companies
    pub verified: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
