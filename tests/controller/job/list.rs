use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use megajob::{
    model::job::JobFilter,
    server::controller::job::{get_job, list_categories, list_jobs},
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 from the public listing without any authentication
#[tokio::test]
async fn list_returns_ok_without_auth() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    test.portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = list_jobs(State(state), Query(JobFilter::default())).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 with a single active posting
#[tokio::test]
async fn get_returns_ok_for_known_job() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = get_job(State(state), Path(job.id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for a job ID that does not exist
#[tokio::test]
async fn get_returns_not_found_for_unknown_job() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let state = test.into_app_state();

    let result = get_job(State(state), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the category catalog
#[tokio::test]
async fn categories_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal().insert_category("Information Technology").await?;
    let state = test.into_app_state();

    let result = list_categories(State(state)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
