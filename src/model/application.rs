use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Review state of a job application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub seeker_id: i32,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for `POST /api/applications`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    pub job_id: i32,
    pub cover_letter: Option<String>,
}

/// Request body for `PUT /api/applications/{id}/status`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: ApplicationStatus,
}

/// Query parameters for `GET /api/applications`
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
