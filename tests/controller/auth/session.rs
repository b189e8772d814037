use axum::{extract::State, http::StatusCode, response::IntoResponse};
use megajob::{
    model::user::UserRole,
    server::{
        controller::auth::{logout, validate_session},
        model::auth::Claims,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 with the account profile for claims of a live account
#[tokio::test]
async fn validate_returns_ok_for_live_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let claims = Claims::new(user.id, &user.email, UserRole::JobSeeker, 7);
    let result = validate_session(State(state), claims).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 when the account behind the claims no longer exists
#[tokio::test]
async fn validate_returns_unauthorized_for_deleted_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let claims = Claims::new(999, "ghost@example.com", UserRole::JobSeeker, 7);
    let result = validate_session(State(state), claims).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 from logout regardless of session state
#[tokio::test]
async fn logout_returns_ok() {
    let resp = logout().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
}
