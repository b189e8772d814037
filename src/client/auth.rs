//! Login, signup and session handling with demo and offline fallbacks.
//!
//! Demo credential pairs resolve locally before any network I/O, so the SDK
//! stays usable with no backend at all. Everything else goes to the backend
//! when it answers its health probe, and to the offline store otherwise.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    client::{
        api::ApiClient,
        error::ClientError,
        storage::{StorageBackend, USER_KEY},
        store::{NewOfflineSignup, NewOfflineUser, OfflineDb, OfflineUser},
    },
    model::{
        api::MessageDto,
        user::{
            AuthResponseDto, LoginDto, RegisterDto, RegisterResponseDto, ResendOtpDto, UserDto,
            UserRole, VerifyOtpDto,
        },
    },
};

/// Minutes an offline verification code stays valid.
const OTP_EXPIRES_IN_MINUTES: i64 = 10;

/// Prefix of tokens issued locally for demo and offline sessions. The server
/// never honors these.
pub const DEMO_TOKEN_PREFIX: &str = "demo-token-";

/// A hardcoded credential pair usable without any backend.
pub struct DemoAccount {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: UserRole,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

/// The demo accounts, one per portal role.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: "1",
        email: "seeker@megajob.demo",
        password: "seeker123",
        role: UserRole::JobSeeker,
        first_name: "Demo",
        last_name: "Seeker",
    },
    DemoAccount {
        id: "2",
        email: "employer@megajob.demo",
        password: "employer123",
        role: UserRole::Employer,
        first_name: "Demo",
        last_name: "Employer",
    },
    DemoAccount {
        id: "3",
        email: "admin@megajob.demo",
        password: "admin123",
        role: UserRole::Admin,
        first_name: "Demo",
        last_name: "Admin",
    },
];

/// The demo account matching a credential pair, if any.
pub fn find_demo_account(email: &str, password: &str) -> Option<&'static DemoAccount> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
}

/// The account identity the client persists. IDs are strings so backend
/// accounts (numeric) and offline accounts (base-36) share one shape.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

impl From<&DemoAccount> for SessionUser {
    fn from(account: &DemoAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.to_string(),
            role: account.role,
            first_name: account.first_name.to_string(),
            last_name: account.last_name.to_string(),
        }
    }
}

impl From<&OfflineUser> for SessionUser {
    fn from(user: &OfflineUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<&UserDto> for SessionUser {
    fn from(user: &UserDto) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// An established session: who is logged in and the token proving it.
#[derive(Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: SessionUser,
}

/// Authentication facade over the API client and the offline store.
pub struct AuthService {
    api: ApiClient,
    db: OfflineDb,
    storage: Arc<dyn StorageBackend>,
}

impl AuthService {
    /// Creates the facade over a storage backend, seeding the offline store
    /// on first use.
    pub fn new(
        base_url: impl Into<String>,
        storage: Arc<dyn StorageBackend>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            api: ApiClient::new(base_url, storage.clone()),
            db: OfflineDb::new(storage.clone())?,
            storage,
        })
    }

    /// The underlying API client, for direct endpoint access.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The offline document store backing the fallback paths.
    pub fn db(&self) -> &OfflineDb {
        &self.db
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.api.token().is_some()
    }

    /// The persisted user of the current session, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = self.storage.read(USER_KEY)?;

        serde_json::from_str(&raw).ok()
    }

    /// Logs in. Demo pairs resolve locally; otherwise the backend is used
    /// when reachable, then accounts in the offline store. Unknown
    /// credentials fail.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ClientError> {
        if let Some(account) = find_demo_account(email, password) {
            return self.open_local_session(SessionUser::from(account));
        }

        if self.api.is_backend_available().await {
            let response = self.api.login(&credentials(email, password)).await?;

            return self.open_backend_session(response);
        }

        let user = self.find_offline_user(email, password)?;

        self.open_local_session(SessionUser::from(&user))
    }

    /// As [`login`](Self::login), but only admin and HR accounts may pass.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ClientError> {
        if let Some(account) = find_demo_account(email, password) {
            if !account.role.is_admin() {
                return Err(ClientError::AdminRequired);
            }

            return self.open_local_session(SessionUser::from(account));
        }

        if self.api.is_backend_available().await {
            let response = self.api.admin_login(&credentials(email, password)).await?;

            return self.open_backend_session(response);
        }

        let user = self.find_offline_user(email, password)?;
        if !user.role.is_admin() {
            return Err(ClientError::AdminRequired);
        }

        self.open_local_session(SessionUser::from(&user))
    }

    /// Starts a signup. Against a live backend this delegates to the API;
    /// offline, the pending signup is parked in the store with a real
    /// verification code and a 10-minute window.
    pub async fn signup(&self, signup: RegisterDto) -> Result<RegisterResponseDto, ClientError> {
        if self.api.is_backend_available().await {
            return self.api.register(&signup).await;
        }

        if self.db.find_user_by_email(&signup.email)?.is_some() {
            return Err(ClientError::EmailTaken);
        }

        let otp = generate_otp();
        let pending = self.db.insert_signup(NewOfflineSignup {
            email: signup.email,
            password: signup.password,
            role: signup.role,
            first_name: signup.first_name,
            last_name: signup.last_name,
            phone: signup.phone,
            otp: otp.clone(),
            expires_at: Utc::now().naive_utc() + Duration::minutes(OTP_EXPIRES_IN_MINUTES),
        })?;

        // stands in for the email delivery channel
        tracing::info!("Verification code for signup {}: {}", pending.id, otp);

        Ok(RegisterResponseDto {
            message: format!("Verification code sent to {}", pending.email),
            signup_id: pending.id,
        })
    }

    /// Redeems a verification code, materializing the account and opening a
    /// session. Offline codes must match exactly and within their window; an
    /// expired signup is deleted, so retries report an unknown signup.
    pub async fn verify_otp(&self, signup_id: &str, otp: &str) -> Result<AuthSession, ClientError> {
        if self.api.is_backend_available().await {
            let response = self
                .api
                .verify_otp(&VerifyOtpDto {
                    signup_id: signup_id.to_string(),
                    otp: otp.to_string(),
                })
                .await?;

            return self.open_backend_session(response);
        }

        let pending = self
            .db
            .find_signup(signup_id)?
            .ok_or(ClientError::SignupNotFound)?;

        if pending.expires_at < Utc::now().naive_utc() {
            self.db.delete_signup(signup_id)?;

            return Err(ClientError::OtpExpired);
        }

        if pending.otp != otp {
            return Err(ClientError::OtpMismatch);
        }

        let user = self.db.insert_user(NewOfflineUser {
            email: pending.email,
            password: pending.password,
            role: pending.role,
            first_name: pending.first_name,
            last_name: pending.last_name,
            phone: pending.phone,
        })?;
        self.db.delete_signup(signup_id)?;

        self.open_local_session(SessionUser::from(&user))
    }

    /// Sends a fresh verification code for a pending signup.
    pub async fn resend_otp(&self, signup_id: &str) -> Result<MessageDto, ClientError> {
        if self.api.is_backend_available().await {
            return self
                .api
                .resend_otp(&ResendOtpDto {
                    signup_id: signup_id.to_string(),
                })
                .await;
        }

        let mut pending = self
            .db
            .find_signup(signup_id)?
            .ok_or(ClientError::SignupNotFound)?;

        pending.otp = generate_otp();
        pending.expires_at = Utc::now().naive_utc() + Duration::minutes(OTP_EXPIRES_IN_MINUTES);
        self.db.update_signup(&pending)?;

        tracing::info!("Verification code for signup {}: {}", pending.id, pending.otp);

        Ok(MessageDto {
            message: "Verification code resent".to_string(),
        })
    }

    /// Ends the session: best-effort server notify, then the stored token
    /// and user are dropped. Never errors.
    pub async fn logout(&self) {
        self.api.logout().await;
    }

    /// Answers who is logged in. Demo and offline tokens are validated
    /// purely against local storage; real tokens are checked with the
    /// backend, and a rejected token clears the session.
    pub async fn validate_session(&self) -> Result<SessionUser, ClientError> {
        let token = self.api.token().ok_or(ClientError::SessionExpired)?;

        if token.starts_with(DEMO_TOKEN_PREFIX) {
            return self.current_user().ok_or(ClientError::SessionExpired);
        }

        match self.api.validate_session().await {
            Ok(user) => {
                let user = SessionUser::from(&user);
                self.storage
                    .write(USER_KEY, &serde_json::to_string(&user)?)?;

                Ok(user)
            }
            Err(ClientError::Api {
                status: 401 | 403, ..
            }) => {
                self.api.clear_session();

                Err(ClientError::SessionExpired)
            }
            Err(err) => Err(err),
        }
    }

    fn find_offline_user(&self, email: &str, password: &str) -> Result<OfflineUser, ClientError> {
        self.db
            .find_user_by_email(email)?
            .filter(|user| user.password == password && user.is_active)
            .ok_or(ClientError::InvalidCredentials)
    }

    fn open_local_session(&self, user: SessionUser) -> Result<AuthSession, ClientError> {
        let session = AuthSession {
            token: format!("{DEMO_TOKEN_PREFIX}{}", user.id),
            user,
        };

        self.persist_session(&session)?;

        Ok(session)
    }

    fn open_backend_session(&self, response: AuthResponseDto) -> Result<AuthSession, ClientError> {
        // the API client already persisted the token
        let session = AuthSession {
            token: response.token,
            user: SessionUser::from(&response.user),
        };

        self.storage
            .write(USER_KEY, &serde_json::to_string(&session.user)?)?;

        Ok(session)
    }

    fn persist_session(&self, session: &AuthSession) -> Result<(), ClientError> {
        self.api.store_token(&session.token)?;
        self.storage
            .write(USER_KEY, &serde_json::to_string(&session.user)?)
    }
}

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Generates a 6 digit verification code for the offline signup path.
fn generate_otp() -> String {
    let mut rng = rand::rng();

    (0..6).map(|_| rng.random_range(0..10).to_string()).collect()
}
