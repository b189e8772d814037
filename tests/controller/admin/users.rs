use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use megajob::{
    model::user::{UpdateUserStatusDto, UserFilter},
    server::{
        controller::admin::{delete_user, list_users, update_user_status},
        data::user::UserRepository,
        model::auth::AdminUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 with the account listing
#[tokio::test]
async fn list_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    test.portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = list_users(State(state), AdminUser(admin), Query(UserFilter::default())).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 and the deactivation to land in the database
#[tokio::test]
async fn update_status_returns_ok_and_deactivates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let target = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = update_user_status(
        State(state),
        AdminUser(admin),
        Path(target.id),
        Json(UpdateUserStatusDto {
            is_active: Some(false),
            is_verified: None,
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = UserRepository::new(&test.db)
        .find_by_id(target.id)
        .await?
        .unwrap();
    assert!(!updated.is_active);
    assert!(updated.is_verified);

    Ok(())
}

/// Expect 200 and the account to be gone
#[tokio::test]
async fn delete_returns_ok_and_removes_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let target = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let state = test.into_app_state();

    let result = delete_user(State(state), AdminUser(admin), Path(target.id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let gone = UserRepository::new(&test.db).find_by_id(target.id).await?;
    assert!(gone.is_none());

    Ok(())
}

/// Expect 404 when deleting a user that does not exist
#[tokio::test]
async fn delete_returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let state = test.into_app_state();

    let result = delete_user(State(state), AdminUser(admin), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
