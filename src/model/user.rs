use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Account role determining which portal surfaces a user may access.
///
/// Stored in the database as its snake_case string form, see [`UserRole::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Employer,
    Admin,
    Hr,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
            Self::Hr => "hr",
        }
    }

    /// Whether this role may access the admin portal.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::Hr)
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_seeker" => Ok(Self::JobSeeker),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            "hr" => Ok(Self::Hr),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account without its credential material
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /api/auth/register`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Response body for `POST /api/auth/register`
///
/// Carries the opaque signup ID used to verify the OTP. The OTP itself is
/// delivered out of band and never appears in a response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponseDto {
    pub signup_id: String,
    pub message: String,
}

/// Request body for `POST /api/auth/verify-otp`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpDto {
    pub signup_id: String,
    pub otp: String,
}

/// Request body for `POST /api/auth/resend-otp`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ResendOtpDto {
    pub signup_id: String,
}

/// Request body for `POST /api/auth/login` and `POST /api/auth/admin-login`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response body for successful authentication
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// Bearer token to present on subsequent requests
    pub token: String,
    pub user: UserDto,
}

/// Request body for `POST /api/auth/forgot-password`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// Request body for `POST /api/auth/reset-password`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    pub new_password: String,
}

/// Request body for `POST /api/auth/change-password`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

/// Request body for `PUT /api/users/profile`, absent fields are left unchanged
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Request body for `PUT /api/admin/users/{id}/status`, absent fields are left unchanged
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserStatusDto {
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}

/// Query parameters for `GET /api/admin/users`
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct UserFilter {
    /// Restrict to a single role
    pub role: Option<UserRole>,
    /// Case-insensitive substring match over email and names
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
