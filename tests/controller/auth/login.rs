use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use megajob::{
    model::user::LoginDto,
    server::controller::auth::{admin_login, login},
};
use megajob_test_utils::{TestBuilder, TestError, TEST_PASSWORD};

use crate::util::TestContextExt;

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect 200 with a session token for valid credentials
#[tokio::test]
async fn returns_ok_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = login(
        State(state),
        Json(credentials("sita@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 for a wrong password
#[tokio::test]
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = login(
        State(state),
        Json(credentials("sita@example.com", "not-the-password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 when the account has been deactivated
#[tokio::test]
async fn returns_forbidden_for_deactivated_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, false)
        .await?;
    let state = test.into_app_state();

    let result = login(
        State(state),
        Json(credentials("sita@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 from the admin portal for an HR account
#[tokio::test]
async fn admin_returns_ok_for_hr_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("hr@example.com", "hr", true, true)
        .await?;
    let state = test.into_app_state();

    let result = admin_login(
        State(state),
        Json(credentials("hr@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 from the admin portal for a job seeker
#[tokio::test]
async fn admin_returns_forbidden_for_seeker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = admin_login(
        State(state),
        Json(credentials("sita@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
