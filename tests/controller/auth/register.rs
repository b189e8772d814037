use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use megajob::{
    model::user::{RegisterDto, ResendOtpDto, UserRole, VerifyOtpDto},
    server::controller::auth::{register, resend_otp, verify_otp},
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

fn signup(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "Password123!".to_string(),
        role: UserRole::JobSeeker,
        first_name: "Sita".to_string(),
        last_name: "Sharma".to_string(),
        phone: None,
    }
}

/// Expect 200 with a signup ID for a new registration
#[tokio::test]
async fn returns_ok_for_new_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let result = register(State(state), Json(signup("sita@example.com"))).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the email already belongs to an account
#[tokio::test]
async fn returns_bad_request_for_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = register(State(state), Json(signup("sita@example.com"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 and a session when the verification code matches
#[tokio::test]
async fn verify_returns_ok_for_matching_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let expires_at = (Utc::now() + Duration::minutes(10)).naive_utc();
    test.portal()
        .insert_pending_signup("signup-1", "sita@example.com", "482913", expires_at)
        .await?;
    let state = test.into_app_state();

    let result = verify_otp(
        State(state),
        Json(VerifyOtpDto {
            signup_id: "signup-1".to_string(),
            otp: "482913".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 for a wrong verification code
#[tokio::test]
async fn verify_returns_bad_request_for_wrong_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let expires_at = (Utc::now() + Duration::minutes(10)).naive_utc();
    test.portal()
        .insert_pending_signup("signup-1", "sita@example.com", "482913", expires_at)
        .await?;
    let state = test.into_app_state();

    let result = verify_otp(
        State(state),
        Json(VerifyOtpDto {
            signup_id: "signup-1".to_string(),
            otp: "000000".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when resending a code for an unknown signup session
#[tokio::test]
async fn resend_returns_bad_request_for_unknown_signup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let result = resend_otp(
        State(state),
        Json(ResendOtpDto {
            signup_id: "missing".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
