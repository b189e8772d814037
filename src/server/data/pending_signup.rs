use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
};

/// Column values for a signup awaiting OTP verification.
///
/// Assembled by the auth service from the registration payload plus the
/// generated signup id, OTP and password hash.
pub struct NewPendingSignup {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub otp: String,
    pub expires_at: NaiveDateTime,
}

pub struct PendingSignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingSignupRepository<'a> {
    /// Creates a new instance of [`PendingSignupRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        signup: NewPendingSignup,
    ) -> Result<entity::pending_signup::Model, DbErr> {
        let pending = entity::pending_signup::ActiveModel {
            id: ActiveValue::Set(signup.id),
            email: ActiveValue::Set(signup.email),
            password_hash: ActiveValue::Set(signup.password_hash),
            role: ActiveValue::Set(signup.role),
            first_name: ActiveValue::Set(signup.first_name),
            last_name: ActiveValue::Set(signup.last_name),
            phone: ActiveValue::Set(signup.phone),
            otp: ActiveValue::Set(signup.otp),
            expires_at: ActiveValue::Set(signup.expires_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        pending.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        signup_id: &str,
    ) -> Result<Option<entity::pending_signup::Model>, DbErr> {
        entity::prelude::PendingSignup::find_by_id(signup_id)
            .one(self.db)
            .await
    }

    /// Replaces the OTP and restarts the expiry window.
    pub async fn update_otp(
        &self,
        signup_id: &str,
        otp: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::pending_signup::Model, DbErr> {
        let pending = entity::pending_signup::ActiveModel {
            id: ActiveValue::Set(signup_id.to_string()),
            otp: ActiveValue::Set(otp.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        };

        pending.update(self.db).await
    }

    /// Deletes a pending signup
    ///
    /// Returns OK regardless of the signup existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, signup_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::PendingSignup::delete_by_id(signup_id)
            .exec(self.db)
            .await
    }
}
