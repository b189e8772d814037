//! Typed HTTP access to the MegaJob API.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    client::{
        error::ClientError,
        storage::{StorageBackend, ACCESS_TOKEN_KEY, USER_KEY},
    },
    model::{
        api::{ErrorDto, HealthDto, MessageDto, Paginated, StatusDto},
        application::{
            ApplicationDto, ApplicationFilter, CreateApplicationDto, UpdateApplicationStatusDto,
        },
        company::{CompanyDto, CompanyFilter, CreateCompanyDto, UpdateCompanyDto},
        job::{CreateJobDto, JobCategoryDto, JobDto, JobFilter, JobListDto, UpdateJobDto},
        user::{
            AuthResponseDto, ChangePasswordDto, ForgotPasswordDto, LoginDto, RegisterDto,
            RegisterResponseDto, ResendOtpDto, ResetPasswordDto, UpdateProfileDto,
            UpdateUserStatusDto, UserDto, UserFilter, VerifyOtpDto,
        },
    },
};

/// Upper bound on probe requests so availability checks cannot hang callers.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP client for the MegaJob API.
///
/// Holds the bearer token in memory and mirrors it into the storage backend,
/// so a rebuilt client picks up the previous session.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Mutex<Option<String>>,
    credentials: Arc<dyn StorageBackend>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`, loading any stored token.
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn StorageBackend>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let token = credentials.read(ACCESS_TOKEN_KEY);

        Self {
            base_url,
            http: reqwest::Client::new(),
            token: Mutex::new(token),
            credentials,
        }
    }

    /// The bearer token attached to requests, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    pub(crate) fn store_token(&self, token: &str) -> Result<(), ClientError> {
        self.credentials.write(ACCESS_TOKEN_KEY, token)?;

        if let Ok(mut current) = self.token.lock() {
            *current = Some(token.to_string());
        }

        Ok(())
    }

    /// Drops the stored token and user.
    pub fn clear_session(&self) {
        self.credentials.remove(ACCESS_TOKEN_KEY);
        self.credentials.remove(USER_KEY);

        if let Ok(mut current) = self.token.lock() {
            *current = None;
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Sends a request and decodes its JSON body, mapping non-2xx responses
    /// to [`ClientError::Api`] carrying the server's error message.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorDto>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    // ---- auth ----

    pub async fn register(&self, signup: &RegisterDto) -> Result<RegisterResponseDto, ClientError> {
        self.send_json(self.request(Method::POST, "/api/auth/register").json(signup))
            .await
    }

    /// Verifies a signup code. The returned token is persisted.
    pub async fn verify_otp(&self, verify: &VerifyOtpDto) -> Result<AuthResponseDto, ClientError> {
        let response: AuthResponseDto = self
            .send_json(
                self.request(Method::POST, "/api/auth/verify-otp")
                    .json(verify),
            )
            .await?;

        self.store_token(&response.token)?;

        Ok(response)
    }

    pub async fn resend_otp(&self, resend: &ResendOtpDto) -> Result<MessageDto, ClientError> {
        self.send_json(
            self.request(Method::POST, "/api/auth/resend-otp")
                .json(resend),
        )
        .await
    }

    /// Logs in. The returned token is persisted.
    pub async fn login(&self, credentials: &LoginDto) -> Result<AuthResponseDto, ClientError> {
        let response: AuthResponseDto = self
            .send_json(
                self.request(Method::POST, "/api/auth/login")
                    .json(credentials),
            )
            .await?;

        self.store_token(&response.token)?;

        Ok(response)
    }

    /// Admin portal login. The returned token is persisted.
    pub async fn admin_login(&self, credentials: &LoginDto) -> Result<AuthResponseDto, ClientError> {
        let response: AuthResponseDto = self
            .send_json(
                self.request(Method::POST, "/api/auth/admin-login")
                    .json(credentials),
            )
            .await?;

        self.store_token(&response.token)?;

        Ok(response)
    }

    pub async fn forgot_password(
        &self,
        forgot: &ForgotPasswordDto,
    ) -> Result<MessageDto, ClientError> {
        self.send_json(
            self.request(Method::POST, "/api/auth/forgot-password")
                .json(forgot),
        )
        .await
    }

    pub async fn reset_password(
        &self,
        reset: &ResetPasswordDto,
    ) -> Result<MessageDto, ClientError> {
        self.send_json(
            self.request(Method::POST, "/api/auth/reset-password")
                .json(reset),
        )
        .await
    }

    pub async fn change_password(
        &self,
        change: &ChangePasswordDto,
    ) -> Result<MessageDto, ClientError> {
        self.send_json(
            self.request(Method::POST, "/api/auth/change-password")
                .json(change),
        )
        .await
    }

    pub async fn validate_session(&self) -> Result<UserDto, ClientError> {
        self.send_json(self.request(Method::GET, "/api/auth/validate-session"))
            .await
    }

    /// Notifies the server and drops local credentials. Never errors, a dead
    /// server must not block a logout.
    pub async fn logout(&self) {
        let _ = self.request(Method::POST, "/api/auth/logout").send().await;

        self.clear_session();
    }

    // ---- profile ----

    pub async fn get_profile(&self) -> Result<UserDto, ClientError> {
        self.send_json(self.request(Method::GET, "/api/users/profile"))
            .await
    }

    pub async fn update_profile(&self, update: &UpdateProfileDto) -> Result<UserDto, ClientError> {
        self.send_json(self.request(Method::PUT, "/api/users/profile").json(update))
            .await
    }

    // ---- jobs ----

    pub async fn get_jobs(&self, filter: &JobFilter) -> Result<JobListDto, ClientError> {
        self.send_json(self.request(Method::GET, "/api/jobs").query(filter))
            .await
    }

    pub async fn get_job(&self, job_id: i32) -> Result<JobDto, ClientError> {
        self.send_json(self.request(Method::GET, &format!("/api/jobs/{job_id}")))
            .await
    }

    pub async fn create_job(&self, job: &CreateJobDto) -> Result<JobDto, ClientError> {
        self.send_json(self.request(Method::POST, "/api/jobs").json(job))
            .await
    }

    pub async fn update_job(
        &self,
        job_id: i32,
        update: &UpdateJobDto,
    ) -> Result<JobDto, ClientError> {
        self.send_json(
            self.request(Method::PUT, &format!("/api/jobs/{job_id}"))
                .json(update),
        )
        .await
    }

    pub async fn delete_job(&self, job_id: i32) -> Result<MessageDto, ClientError> {
        self.send_json(self.request(Method::DELETE, &format!("/api/jobs/{job_id}")))
            .await
    }

    pub async fn get_job_categories(&self) -> Result<Vec<JobCategoryDto>, ClientError> {
        self.send_json(self.request(Method::GET, "/api/jobs/categories"))
            .await
    }

    // ---- companies ----

    pub async fn get_companies(
        &self,
        filter: &CompanyFilter,
    ) -> Result<Paginated<CompanyDto>, ClientError> {
        self.send_json(self.request(Method::GET, "/api/companies").query(filter))
            .await
    }

    pub async fn create_company(
        &self,
        company: &CreateCompanyDto,
    ) -> Result<CompanyDto, ClientError> {
        self.send_json(self.request(Method::POST, "/api/companies").json(company))
            .await
    }

    pub async fn update_company(
        &self,
        company_id: i32,
        update: &UpdateCompanyDto,
    ) -> Result<CompanyDto, ClientError> {
        self.send_json(
            self.request(Method::PUT, &format!("/api/companies/{company_id}"))
                .json(update),
        )
        .await
    }

    pub async fn delete_company(&self, company_id: i32) -> Result<MessageDto, ClientError> {
        self.send_json(self.request(Method::DELETE, &format!("/api/companies/{company_id}")))
            .await
    }

    // ---- applications ----

    pub async fn create_application(
        &self,
        application: &CreateApplicationDto,
    ) -> Result<ApplicationDto, ClientError> {
        self.send_json(
            self.request(Method::POST, "/api/applications")
                .json(application),
        )
        .await
    }

    pub async fn get_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Paginated<ApplicationDto>, ClientError> {
        self.send_json(self.request(Method::GET, "/api/applications").query(filter))
            .await
    }

    pub async fn update_application_status(
        &self,
        application_id: i32,
        update: &UpdateApplicationStatusDto,
    ) -> Result<ApplicationDto, ClientError> {
        self.send_json(
            self.request(
                Method::PUT,
                &format!("/api/applications/{application_id}/status"),
            )
            .json(update),
        )
        .await
    }

    // ---- admin ----

    pub async fn get_users(&self, filter: &UserFilter) -> Result<Paginated<UserDto>, ClientError> {
        self.send_json(self.request(Method::GET, "/api/admin/users").query(filter))
            .await
    }

    pub async fn update_user_status(
        &self,
        user_id: i32,
        update: &UpdateUserStatusDto,
    ) -> Result<UserDto, ClientError> {
        self.send_json(
            self.request(Method::PUT, &format!("/api/admin/users/{user_id}/status"))
                .json(update),
        )
        .await
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<MessageDto, ClientError> {
        self.send_json(self.request(Method::DELETE, &format!("/api/admin/users/{user_id}")))
            .await
    }

    // ---- probes ----

    /// Server build and uptime, `None` when the backend cannot answer.
    pub async fn get_status(&self) -> Option<StatusDto> {
        self.send_json(
            self.request(Method::GET, "/api/status")
                .timeout(PROBE_TIMEOUT),
        )
        .await
        .ok()
    }

    /// Database reachability as the server reports it, `unreachable` when the
    /// probe itself fails.
    pub async fn check_health(&self) -> HealthDto {
        match self
            .send_json(
                self.request(Method::GET, "/api/health")
                    .timeout(PROBE_TIMEOUT),
            )
            .await
        {
            Ok(health) => health,
            Err(_) => HealthDto {
                status: "unreachable".to_string(),
            },
        }
    }

    /// Whether the backend answers its health probe within the timeout.
    pub async fn is_backend_available(&self) -> bool {
        let request = self
            .request(Method::GET, "/api/health")
            .timeout(PROBE_TIMEOUT);

        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
