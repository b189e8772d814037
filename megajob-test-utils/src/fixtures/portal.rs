//! Portal record fixture utilities.
//!
//! This module provides methods for inserting portal records directly into the
//! test database. Inserts go through the entities rather than the repositories
//! so fixture state never depends on the code under test.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

/// Minimal bcrypt cost to keep fixture inserts fast. Verification reads the
/// cost from the hash itself, so production hashes can stay at the default.
const FIXTURE_BCRYPT_COST: u32 = 4;

impl TestContext {
    pub fn portal(&self) -> PortalFixtures<'_> {
        PortalFixtures { setup: self }
    }
}

pub struct PortalFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PortalFixtures<'a> {
    /// Insert a user who can log in with [`TEST_PASSWORD`].
    ///
    /// # Arguments
    /// - `email` - Unique email for the account
    /// - `role` - Role string (`job_seeker`, `employer`, `admin`, or `hr`)
    /// - `is_verified` - Whether the email has been verified
    /// - `is_active` - Whether the account is active
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user record
    /// - `Err(TestError)` - Password hashing or the insert failed
    pub async fn insert_user(
        &self,
        email: &str,
        role: &str,
        is_verified: bool,
        is_active: bool,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let password_hash = bcrypt::hash(TEST_PASSWORD, FIXTURE_BCRYPT_COST)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.to_string()),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("User".to_string()),
            phone: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(is_verified),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a company, optionally owned by an employer account.
    pub async fn insert_company(
        &self,
        name: &str,
        employer_id: Option<i32>,
        is_verified: bool,
    ) -> Result<entity::company::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                industry: ActiveValue::Set(None),
                location: ActiveValue::Set(Some("Kathmandu".to_string())),
                employer_id: ActiveValue::Set(employer_id),
                is_verified: ActiveValue::Set(is_verified),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a job category.
    pub async fn insert_category(
        &self,
        name: &str,
    ) -> Result<entity::job_category::Model, TestError> {
        Ok(
            entity::prelude::JobCategory::insert(entity::job_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a job posting for an existing company.
    pub async fn insert_job(
        &self,
        title: &str,
        company_id: i32,
        category_id: Option<i32>,
        location: &str,
        status: &str,
    ) -> Result<entity::job::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Job::insert(entity::job::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{title} role description")),
            company_id: ActiveValue::Set(company_id),
            category_id: ActiveValue::Set(category_id),
            location: ActiveValue::Set(location.to_string()),
            job_type: ActiveValue::Set(Some("full_time".to_string())),
            salary: ActiveValue::Set(None),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an application from a seeker to a job.
    pub async fn insert_application(
        &self,
        job_id: i32,
        seeker_id: i32,
        status: &str,
    ) -> Result<entity::application::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                job_id: ActiveValue::Set(job_id),
                seeker_id: ActiveValue::Set(seeker_id),
                cover_letter: ActiveValue::Set(None),
                status: ActiveValue::Set(status.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a signup awaiting OTP verification.
    ///
    /// The stored password hash is for [`TEST_PASSWORD`], matching what a real
    /// registration with that password would have persisted.
    pub async fn insert_pending_signup(
        &self,
        signup_id: &str,
        email: &str,
        otp: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::pending_signup::Model, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, FIXTURE_BCRYPT_COST)?;

        Ok(
            entity::prelude::PendingSignup::insert(entity::pending_signup::ActiveModel {
                id: ActiveValue::Set(signup_id.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                role: ActiveValue::Set("job_seeker".to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                phone: ActiveValue::Set(None),
                otp: ActiveValue::Set(otp.to_string()),
                expires_at: ActiveValue::Set(expires_at),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a password reset token for an existing user.
    pub async fn insert_reset_token(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
        used: bool,
    ) -> Result<entity::password_reset_token::Model, TestError> {
        Ok(entity::prelude::PasswordResetToken::insert(
            entity::password_reset_token::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                token: ActiveValue::Set(token.to_string()),
                expires_at: ActiveValue::Set(expires_at),
                used: ActiveValue::Set(used),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
