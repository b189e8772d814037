//! Records kept by the offline document store.
//!
//! IDs are strings assigned at insert time (random base-36 characters plus a
//! millisecond timestamp), matching the browser-storage heritage of this
//! store rather than the server's numeric keys.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{application::ApplicationStatus, job::JobStatus, user::UserRole};

#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineUser {
    pub id: String,
    pub email: String,
    /// Stored as given. The store is a non-adversarial demo surface and does
    /// not hash credentials.
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineCompany {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub employer_id: Option<String>,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineCategory {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineJob {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company_id: String,
    pub category_id: Option<String>,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineApplication {
    pub id: String,
    pub job_id: String,
    pub seeker_id: String,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
}

/// A signup waiting for its verification code, the offline counterpart of
/// the server's pending signup row.
#[derive(Clone, Serialize, Deserialize)]
pub struct OfflineSignup {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub otp: String,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Insert payload for [`OfflineDb::insert_user`](super::OfflineDb::insert_user).
#[derive(Clone)]
pub struct NewOfflineUser {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Insert payload for [`OfflineDb::create_job`](super::OfflineDb::create_job).
/// New jobs start out `active`.
#[derive(Clone)]
pub struct NewOfflineJob {
    pub title: String,
    pub description: String,
    pub company_id: String,
    pub category_id: Option<String>,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
}

/// Insert payload for [`OfflineDb::insert_company`](super::OfflineDb::insert_company).
#[derive(Clone)]
pub struct NewOfflineCompany {
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub employer_id: Option<String>,
}

/// Insert payload for [`OfflineDb::insert_signup`](super::OfflineDb::insert_signup).
/// The caller supplies the verification code and its expiry window.
#[derive(Clone)]
pub struct NewOfflineSignup {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub otp: String,
    pub expires_at: NaiveDateTime,
}
