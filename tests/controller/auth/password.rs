use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use megajob::{
    model::user::{ChangePasswordDto, ForgotPasswordDto, ResetPasswordDto},
    server::{
        controller::auth::{change_password, forgot_password, reset_password},
        model::auth::AuthedUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError, TEST_PASSWORD};

use crate::util::TestContextExt;

/// Expect 200 even when the email belongs to no account
#[tokio::test]
async fn forgot_returns_ok_for_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let result = forgot_password(
        State(state),
        Json(ForgotPasswordDto {
            email: "nobody@example.com".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when redeeming an unknown reset token
#[tokio::test]
async fn reset_returns_bad_request_for_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let result = reset_password(
        State(state),
        Json(ResetPasswordDto {
            token: "missing".to_string(),
            new_password: "NewPassword456!".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 when the current password checks out
#[tokio::test]
async fn change_returns_ok_for_matching_current() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = change_password(
        State(state),
        AuthedUser(user),
        Json(ChangePasswordDto {
            current_password: TEST_PASSWORD.to_string(),
            new_password: "NewPassword456!".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the current password does not match
#[tokio::test]
async fn change_returns_bad_request_for_wrong_current() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = change_password(
        State(state),
        AuthedUser(user),
        Json(ChangePasswordDto {
            current_password: "not-the-password".to_string(),
            new_password: "NewPassword456!".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
