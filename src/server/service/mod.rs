//! Service layer for business logic and orchestration between the controllers
//! and the data layer.

pub mod application;
pub mod auth;
pub mod company;
pub mod job;
pub mod user;

const DEFAULT_PAGE_LIMIT: u64 = 10;
const MAX_PAGE_LIMIT: u64 = 50;

/// Resolves the effective page number and page size for a listing request.
pub(crate) fn page_params(page: Option<u64>, limit: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);

    (page, limit)
}
