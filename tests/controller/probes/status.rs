use axum::{extract::State, http::StatusCode, response::IntoResponse};
use megajob::server::controller::probes::{get_health, get_status};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 from the status probe with no authentication
#[tokio::test]
async fn status_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let resp = get_status(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 from the health probe while the database answers
#[tokio::test]
async fn health_returns_ok_with_live_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let resp = get_health(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
