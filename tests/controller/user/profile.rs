use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use megajob::{
    model::user::UpdateProfileDto,
    server::{
        controller::user::{get_profile, update_profile},
        data::user::UserRepository,
        model::auth::AuthedUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 with the caller's own profile
#[tokio::test]
async fn get_returns_ok_with_own_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = get_profile(State(state), AuthedUser(user)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 and the submitted fields to land in the database
#[tokio::test]
async fn update_returns_ok_and_persists_changes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let user_id = user.id;
    let state = test.into_app_state();

    let result = update_profile(
        State(state),
        AuthedUser(user),
        Json(UpdateProfileDto {
            first_name: Some("Gita".to_string()),
            last_name: None,
            phone: Some("+977-9800000000".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = UserRepository::new(&test.db)
        .find_by_id(user_id)
        .await?
        .unwrap();
    assert_eq!(updated.first_name, "Gita");
    assert_eq!(updated.phone.as_deref(), Some("+977-9800000000"));
    // untouched fields keep their values
    assert_eq!(updated.last_name, "User");

    Ok(())
}
