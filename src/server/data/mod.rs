//! Data repositories for the job portal's aggregates.
//!
//! Each repository wraps the sea-orm queries for one table and returns plain
//! entity models. Business rules (ownership, scoping, uniqueness semantics)
//! live in the service layer above.

pub mod application;
pub mod company;
pub mod job;
pub mod job_category;
pub mod password_reset_token;
pub mod pending_signup;
pub mod user;

use sea_orm::ActiveValue;

/// Maps a PATCH-style optional field onto an [`ActiveValue`], leaving absent
/// fields out of the generated UPDATE.
pub(crate) fn patch<T: Into<sea_orm::Value>>(value: Option<T>) -> ActiveValue<T> {
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}
