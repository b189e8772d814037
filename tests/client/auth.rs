use std::sync::Arc;

use chrono::Duration;
use megajob::{
    client::{
        auth::DEMO_TOKEN_PREFIX,
        storage::{MemoryBackend, StorageBackend},
        AuthService, ClientError,
    },
    model::user::{RegisterDto, UserRole},
};
use serde_json::json;

/// Base URL nothing listens on, forcing every call onto the offline paths.
const DEAD_URL: &str = "http://127.0.0.1:1";

fn offline_service() -> Result<AuthService, ClientError> {
    AuthService::new(DEAD_URL, Arc::new(MemoryBackend::default()))
}

fn signup(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "Password123!".to_string(),
        role: UserRole::JobSeeker,
        first_name: "Nisha".to_string(),
        last_name: "Karki".to_string(),
        phone: None,
    }
}

/// Expect demo credentials to open a session without any backend
#[tokio::test]
async fn demo_login_works_offline() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let session = auth.login("seeker@megajob.demo", "seeker123").await?;

    assert_eq!(session.token, format!("{DEMO_TOKEN_PREFIX}1"));
    assert_eq!(session.user.role, UserRole::JobSeeker);
    assert!(auth.is_authenticated());
    assert_eq!(
        auth.current_user().map(|user| user.email),
        Some("seeker@megajob.demo".to_string())
    );

    Ok(())
}

/// Expect the admin portal to turn away the demo seeker account
#[tokio::test]
async fn admin_login_rejects_demo_seeker() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let result = auth.admin_login("seeker@megajob.demo", "seeker123").await;

    assert!(matches!(result, Err(ClientError::AdminRequired)));
    assert!(!auth.is_authenticated());

    Ok(())
}

/// Expect the demo admin account to pass the admin portal gate
#[tokio::test]
async fn admin_login_accepts_demo_admin() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let session = auth.admin_login("admin@megajob.demo", "admin123").await?;

    assert_eq!(session.token, format!("{DEMO_TOKEN_PREFIX}3"));
    assert_eq!(session.user.role, UserRole::Admin);

    Ok(())
}

/// Expect unknown credentials to fail instead of opening a session
#[tokio::test]
async fn offline_login_rejects_unknown_credentials() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let result = auth.login("nobody@example.com", "whatever").await;

    assert!(matches!(result, Err(ClientError::InvalidCredentials)));
    assert!(!auth.is_authenticated());

    Ok(())
}

/// Expect the offline signup flow to mint a working account
#[tokio::test]
async fn offline_signup_and_verification_creates_account() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let response = auth.signup(signup("nisha@example.com")).await?;

    // the code is only logged; dig it out of the pending signup
    let pending = auth.db().find_signup(&response.signup_id)?.unwrap();
    let session = auth.verify_otp(&response.signup_id, &pending.otp).await?;

    assert_eq!(session.user.email, "nisha@example.com");
    assert!(auth.db().find_signup(&response.signup_id)?.is_none());

    // the new account can log back in offline
    auth.logout().await;
    let relogin = auth.login("nisha@example.com", "Password123!").await?;
    assert_eq!(relogin.user.email, "nisha@example.com");

    Ok(())
}

/// Expect a wrong verification code to keep the signup pending
#[tokio::test]
async fn offline_verification_rejects_wrong_code() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let response = auth.signup(signup("nisha@example.com")).await?;
    let result = auth.verify_otp(&response.signup_id, "000000").await;

    assert!(matches!(result, Err(ClientError::OtpMismatch)));
    assert!(auth.db().find_signup(&response.signup_id)?.is_some());

    Ok(())
}

/// Expect a lapsed verification window to discard the pending signup
#[tokio::test]
async fn offline_verification_rejects_expired_code() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let response = auth.signup(signup("nisha@example.com")).await?;

    let mut pending = auth.db().find_signup(&response.signup_id)?.unwrap();
    pending.expires_at -= Duration::minutes(30);
    auth.db().update_signup(&pending)?;

    let result = auth.verify_otp(&response.signup_id, &pending.otp).await;

    assert!(matches!(result, Err(ClientError::OtpExpired)));

    // the signup is gone, a retry now reports it missing
    let retry = auth.verify_otp(&response.signup_id, &pending.otp).await;
    assert!(matches!(retry, Err(ClientError::SignupNotFound)));

    Ok(())
}

/// Expect signups for an email the store already knows to be refused
#[tokio::test]
async fn offline_signup_rejects_taken_email() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let result = auth.signup(signup("seeker@megajob.demo")).await;

    assert!(matches!(result, Err(ClientError::EmailTaken)));

    Ok(())
}

/// Expect a demo session to validate against local storage alone
#[tokio::test]
async fn validate_session_answers_for_demo_token() -> Result<(), ClientError> {
    let auth = offline_service()?;
    auth.login("employer@megajob.demo", "employer123").await?;

    let user = auth.validate_session().await?;

    assert_eq!(user.id, "2");
    assert_eq!(user.role, UserRole::Employer);

    Ok(())
}

/// Expect validation to fail when no token is held
#[tokio::test]
async fn validate_session_without_token_fails() -> Result<(), ClientError> {
    let auth = offline_service()?;

    let result = auth.validate_session().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));

    Ok(())
}

/// Expect logout to drop both the token and the stored user
#[tokio::test]
async fn logout_drops_token_and_user() -> Result<(), ClientError> {
    let auth = offline_service()?;
    auth.login("seeker@megajob.demo", "seeker123").await?;

    auth.logout().await;

    assert!(!auth.is_authenticated());
    assert!(auth.current_user().is_none());

    Ok(())
}

/// Expect non-demo credentials to go to the backend when it answers
#[tokio::test]
async fn backend_login_used_when_available() -> Result<(), ClientError> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "status": "ok" }).to_string())
        .create_async()
        .await;
    let login_mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "jwt-abc",
                "user": {
                    "id": 7,
                    "email": "sita@example.com",
                    "role": "job_seeker",
                    "first_name": "Sita",
                    "last_name": "Sharma",
                    "phone": null,
                    "is_verified": true,
                    "is_active": true,
                    "created_at": "2026-01-15T09:30:00"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let auth = AuthService::new(server.url(), Arc::new(MemoryBackend::default()))?;
    let session = auth.login("sita@example.com", "Password123!").await?;

    assert_eq!(session.token, "jwt-abc");
    // backend account IDs are carried as strings client side
    assert_eq!(session.user.id, "7");
    assert_eq!(
        auth.current_user().map(|user| user.id),
        Some("7".to_string())
    );
    login_mock.assert_async().await;

    Ok(())
}

/// Expect a rejected backend token to clear the session
#[tokio::test]
async fn rejected_backend_token_clears_session() -> Result<(), ClientError> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/auth/validate-session")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "Invalid or expired token" }).to_string())
        .create_async()
        .await;

    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::default());
    storage.write(megajob::client::storage::ACCESS_TOKEN_KEY, "stale-jwt")?;

    let auth = AuthService::new(server.url(), storage)?;
    assert!(auth.is_authenticated());

    let result = auth.validate_session().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert!(!auth.is_authenticated());

    Ok(())
}
