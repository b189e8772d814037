use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::PaginationDto;

/// Publication state of a job posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Inactive,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JobDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub company_id: i32,
    pub category_id: Option<i32>,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobCategoryDto {
    pub id: i32,
    pub name: String,
}

/// Request body for `POST /api/jobs`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub company_id: i32,
    pub category_id: Option<i32>,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    /// Defaults to `active` when absent
    pub status: Option<JobStatus>,
}

/// Request body for `PUT /api/jobs/{id}`, absent fields are left unchanged
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub status: Option<JobStatus>,
}

/// Query parameters for `GET /api/jobs`
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct JobFilter {
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
    /// Exact location match
    pub location: Option<String>,
    /// Category name
    pub category: Option<String>,
    pub job_type: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Page size, defaults to 10, capped at 50
    pub limit: Option<u64>,
}

/// Response body for `GET /api/jobs`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobListDto {
    pub jobs: Vec<JobDto>,
    pub pagination: PaginationDto,
}
