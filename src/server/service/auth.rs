//! Signup, login and credential lifecycle.
//!
//! Registration is a two-step flow: `register` parks the submitted details in a
//! pending signup row together with a one-time password, and `verify_otp`
//! promotes that row into a verified user account. One-time passwords and reset
//! tokens are delivered out of band and never appear in API responses.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        user::{
            AuthResponseDto, ChangePasswordDto, ForgotPasswordDto, LoginDto, RegisterDto,
            RegisterResponseDto, ResendOtpDto, ResetPasswordDto, UserDto, VerifyOtpDto,
        },
    },
    server::{
        data::{
            password_reset_token::PasswordResetTokenRepository,
            pending_signup::{NewPendingSignup, PendingSignupRepository},
            user::UserRepository,
        },
        error::{auth::AuthError, Error},
        model::{app::AuthSettings, auth::Claims},
        service::user::to_user_dto,
        util::{
            password::{hash_password, verify_password},
            token::{generate_otp, generate_reset_token, generate_signup_id},
        },
    },
};

/// How long a signup verification code stays valid.
const OTP_EXPIRES_IN_MINUTES: i64 = 10;
/// How long a password reset token stays valid.
const RESET_TOKEN_EXPIRES_IN_HOURS: i64 = 1;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthSettings) -> Self {
        Self { db, auth }
    }

    /// Starts a signup by parking the registration behind an OTP challenge.
    ///
    /// # Behavior
    /// 1. Rejects the email if a user account already holds it
    /// 2. Hashes the password and stores a pending signup with a fresh OTP
    /// 3. Hands the OTP to the delivery channel (logged here) and returns only
    ///    the opaque signup ID
    ///
    /// A second registration for the same email while the first is still
    /// unverified simply parks another pending signup; whichever verifies first
    /// claims the email.
    pub async fn register(&self, register: RegisterDto) -> Result<RegisterResponseDto, Error> {
        if UserRepository::new(self.db)
            .find_by_email(&register.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken(register.email).into());
        }

        let otp = generate_otp();
        let pending = PendingSignupRepository::new(self.db)
            .create(NewPendingSignup {
                id: generate_signup_id(),
                email: register.email,
                password_hash: hash_password(&register.password)?,
                role: register.role.as_str().to_string(),
                first_name: register.first_name,
                last_name: register.last_name,
                phone: register.phone,
                otp,
                expires_at: (Utc::now() + Duration::minutes(OTP_EXPIRES_IN_MINUTES)).naive_utc(),
            })
            .await?;

        // stands in for the email delivery channel
        tracing::info!(
            "Verification code for signup {}: {}",
            pending.id,
            pending.otp
        );

        Ok(RegisterResponseDto {
            message: format!("Verification code sent to {}", pending.email),
            signup_id: pending.id,
        })
    }

    /// Promotes a pending signup into a verified user account.
    ///
    /// # Behavior
    /// 1. Rejects unknown signup IDs
    /// 2. Discards the pending signup when its OTP window has lapsed
    /// 3. Rejects a wrong OTP but keeps the signup for another attempt
    /// 4. Re-checks the email, which another signup may have claimed since
    /// 5. Creates the account already verified, removes the pending signup and
    ///    returns a session token
    pub async fn verify_otp(&self, verify: VerifyOtpDto) -> Result<AuthResponseDto, Error> {
        let pending_signup_repository = PendingSignupRepository::new(self.db);

        let pending = pending_signup_repository
            .find_by_id(&verify.signup_id)
            .await?
            .ok_or(AuthError::SignupNotFound(verify.signup_id))?;

        if pending.expires_at < Utc::now().naive_utc() {
            pending_signup_repository.delete(&pending.id).await?;

            return Err(AuthError::OtpExpired(pending.id).into());
        }

        if pending.otp != verify.otp {
            return Err(AuthError::OtpMismatch(pending.id).into());
        }

        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_email(&pending.email)
            .await?
            .is_some()
        {
            pending_signup_repository.delete(&pending.id).await?;

            return Err(AuthError::EmailTaken(pending.email).into());
        }

        let user = user_repository
            .create(
                &pending.email,
                &pending.password_hash,
                &pending.role,
                &pending.first_name,
                &pending.last_name,
                pending.phone.clone(),
                true,
            )
            .await?;

        pending_signup_repository.delete(&pending.id).await?;

        self.issue_token(&user)
    }

    /// Rotates the OTP of a pending signup and restarts its expiry window.
    pub async fn resend_otp(&self, resend: ResendOtpDto) -> Result<MessageDto, Error> {
        let pending_signup_repository = PendingSignupRepository::new(self.db);

        let pending = pending_signup_repository
            .find_by_id(&resend.signup_id)
            .await?
            .ok_or(AuthError::SignupNotFound(resend.signup_id))?;

        let otp = generate_otp();
        let expires_at = (Utc::now() + Duration::minutes(OTP_EXPIRES_IN_MINUTES)).naive_utc();

        pending_signup_repository
            .update_otp(&pending.id, &otp, expires_at)
            .await?;

        // stands in for the email delivery channel
        tracing::info!("Verification code for signup {}: {}", pending.id, otp);

        Ok(MessageDto {
            message: "Verification code resent".to_string(),
        })
    }

    /// Authenticates an email/password pair and returns a session token.
    ///
    /// Credential mismatches and unknown emails surface as the same error so a
    /// caller cannot probe which addresses hold accounts. Verification and
    /// deactivation are only reported once the password checks out.
    pub async fn login(&self, login: LoginDto) -> Result<AuthResponseDto, Error> {
        let user = UserRepository::new(self.db)
            .find_by_email(&login.email)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(login.email.clone()))?;

        if !verify_password(&login.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(login.email).into());
        }

        if !user.is_verified {
            return Err(AuthError::AccountNotVerified(login.email).into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(login.email).into());
        }

        self.issue_token(&user)
    }

    /// Authenticates against the admin portal, accepting only admin and HR
    /// accounts.
    pub async fn admin_login(&self, login: LoginDto) -> Result<AuthResponseDto, Error> {
        let response = self.login(login).await?;

        if !response.user.role.is_admin() {
            return Err(AuthError::AdminRequired(response.user.id).into());
        }

        Ok(response)
    }

    /// Issues a password reset token for an account, if one exists.
    ///
    /// The response is identical whether or not the email belongs to an active
    /// account, so the endpoint cannot be used to enumerate accounts. The token
    /// itself goes to the delivery channel (logged here), never the response.
    pub async fn forgot_password(&self, forgot: ForgotPasswordDto) -> Result<MessageDto, Error> {
        let user = UserRepository::new(self.db)
            .find_by_email(&forgot.email)
            .await?
            .filter(|user| user.is_active);

        if let Some(user) = user {
            let token = generate_reset_token();
            let expires_at =
                (Utc::now() + Duration::hours(RESET_TOKEN_EXPIRES_IN_HOURS)).naive_utc();

            PasswordResetTokenRepository::new(self.db)
                .create(user.id, &token, expires_at)
                .await?;

            // stands in for the email delivery channel
            tracing::info!("Password reset token for user {}: {}", user.id, token);
        }

        Ok(MessageDto {
            message: "If an account exists for that email, a reset link has been sent".to_string(),
        })
    }

    /// Redeems a reset token and replaces the account password.
    ///
    /// A token works exactly once: it is rejected when unknown, already used or
    /// past its expiry, and burned on success.
    pub async fn reset_password(&self, reset: ResetPasswordDto) -> Result<MessageDto, Error> {
        let password_reset_token_repository = PasswordResetTokenRepository::new(self.db);

        let token = password_reset_token_repository
            .find_by_token(&reset.token)
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        if token.used || token.expires_at < Utc::now().naive_utc() {
            return Err(AuthError::InvalidResetToken.into());
        }

        UserRepository::new(self.db)
            .update_password(token.user_id, &hash_password(&reset.new_password)?)
            .await?;

        password_reset_token_repository.mark_used(token.id).await?;

        Ok(MessageDto {
            message: "Password updated".to_string(),
        })
    }

    /// Replaces the password of the authenticated user after re-checking the
    /// current one.
    pub async fn change_password(
        &self,
        user: &entity::user::Model,
        change: ChangePasswordDto,
    ) -> Result<MessageDto, Error> {
        if !verify_password(&change.current_password, &user.password_hash)? {
            return Err(AuthError::WrongCurrentPassword(user.id).into());
        }

        UserRepository::new(self.db)
            .update_password(user.id, &hash_password(&change.new_password)?)
            .await?;

        Ok(MessageDto {
            message: "Password updated".to_string(),
        })
    }

    /// Re-checks the account behind a decoded token.
    ///
    /// The signature check already happened while decoding the claims; what
    /// remains is whether the account still exists and is still active.
    pub async fn validate(&self, claims: &Claims) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user.email).into());
        }

        to_user_dto(&user)
    }

    fn issue_token(&self, user: &entity::user::Model) -> Result<AuthResponseDto, Error> {
        let user = to_user_dto(user)?;
        let token = Claims::new(
            user.id,
            &user.email,
            user.role,
            self.auth.jwt_expires_in_days,
        )
        .encode(&self.auth.jwt_secret)?;

        Ok(AuthResponseDto { token, user })
    }
}
