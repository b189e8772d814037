use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that only confirm completion
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human-readable confirmation message
    pub message: String,
}

/// Pagination metadata returned alongside every paginated listing
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    /// 1-based page number
    pub page: u64,
    /// Items per page
    pub limit: u64,
    /// Total items matching the query
    pub total: u64,
    /// Total pages for the query at this limit
    pub pages: u64,
}

/// A page of results along with its pagination metadata
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationDto,
}

/// Response body for `GET /api/status`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub name: String,
    pub version: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
}

/// Response body for `GET /api/health`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// `ok` when the database answers a ping, `degraded` otherwise
    pub status: String,
}
