use std::sync::Arc;

use megajob::{
    client::{
        storage::{MemoryBackend, StorageBackend, ACCESS_TOKEN_KEY, USER_KEY},
        ApiClient, ClientError,
    },
    model::{
        job::JobFilter,
        user::{LoginDto, RegisterDto, UserRole},
    },
};
use mockito::Matcher;
use serde_json::json;

/// Base URL nothing listens on, for exercising the degraded paths.
const DEAD_URL: &str = "http://127.0.0.1:1";

fn user_json(id: i32, email: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "first_name": "Sita",
        "last_name": "Sharma",
        "phone": null,
        "is_verified": true,
        "is_active": true,
        "created_at": "2026-01-15T09:30:00"
    })
}

fn memory_storage() -> Arc<dyn StorageBackend> {
    Arc::new(MemoryBackend::default())
}

/// Expect a successful login to persist the bearer token
#[tokio::test]
async fn login_stores_token() -> Result<(), ClientError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "jwt-abc",
                "user": user_json(7, "sita@example.com", "job_seeker")
            })
            .to_string(),
        )
        .create_async()
        .await;

    let storage = memory_storage();
    let client = ApiClient::new(server.url(), storage.clone());

    let response = client
        .login(&LoginDto {
            email: "sita@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await?;

    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.user.role, UserRole::JobSeeker);
    assert_eq!(client.token().as_deref(), Some("jwt-abc"));
    assert_eq!(storage.read(ACCESS_TOKEN_KEY).as_deref(), Some("jwt-abc"));
    mock.assert_async().await;

    Ok(())
}

/// Expect the server's error body to surface in the client error
#[tokio::test]
async fn error_carries_status_and_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/register")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "Email is already registered" }).to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), memory_storage());
    let result = client
        .register(&RegisterDto {
            email: "sita@example.com".to_string(),
            password: "Password123!".to_string(),
            role: UserRole::JobSeeker,
            first_name: "Sita".to_string(),
            last_name: "Sharma".to_string(),
            phone: None,
        })
        .await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email is already registered");
        }
        other => panic!("expected an API error, got {:?}", other.map(|_| ())),
    }
}

/// Expect a non-JSON error body to fall back to the HTTP reason phrase
#[tokio::test]
async fn error_without_json_body_uses_reason_phrase() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/users/profile")
        .with_status(503)
        .with_body("upstream down")
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), memory_storage());
    let result = client.get_profile().await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected an API error, got {:?}", other.map(|_| ())),
    }
}

/// Expect a stored token to ride along as a bearer header
#[tokio::test]
async fn requests_carry_stored_bearer_token() -> Result<(), ClientError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users/profile")
        .match_header("authorization", "Bearer stored-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_json(7, "sita@example.com", "job_seeker").to_string())
        .create_async()
        .await;

    let storage = memory_storage();
    storage.write(ACCESS_TOKEN_KEY, "stored-token")?;

    let client = ApiClient::new(server.url(), storage);
    client.get_profile().await?;

    mock.assert_async().await;

    Ok(())
}

/// Expect listing filters to become query parameters
#[tokio::test]
async fn job_filters_become_query_parameters() -> Result<(), ClientError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/jobs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "engineer".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jobs": [],
                "pagination": { "page": 2, "limit": 10, "total": 0, "pages": 0 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), memory_storage());
    let listing = client
        .get_jobs(&JobFilter {
            search: Some("engineer".to_string()),
            page: Some(2),
            ..Default::default()
        })
        .await?;

    assert!(listing.jobs.is_empty());
    mock.assert_async().await;

    Ok(())
}

/// Expect the probes to degrade instead of erroring when nothing answers
#[tokio::test]
async fn probes_degrade_when_unreachable() {
    let client = ApiClient::new(DEAD_URL, memory_storage());

    assert!(client.get_status().await.is_none());
    assert_eq!(client.check_health().await.status, "unreachable");
    assert!(!client.is_backend_available().await);
}

/// Expect logout to clear the stored session even with no backend
#[tokio::test]
async fn logout_clears_session_without_backend() -> Result<(), ClientError> {
    let storage = memory_storage();
    storage.write(ACCESS_TOKEN_KEY, "stored-token")?;
    storage.write(USER_KEY, "{}")?;

    let client = ApiClient::new(DEAD_URL, storage.clone());
    client.logout().await;

    assert!(client.token().is_none());
    assert!(storage.read(ACCESS_TOKEN_KEY).is_none());
    assert!(storage.read(USER_KEY).is_none());

    Ok(())
}
