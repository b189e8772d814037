use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use megajob::{
    model::job::{CreateJobDto, UpdateJobDto},
    server::{
        controller::job::{create_job, delete_job, update_job},
        data::job::JobRepository,
        model::auth::AuthedUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

fn posting(company_id: i32) -> CreateJobDto {
    CreateJobDto {
        title: "Software Engineer".to_string(),
        description: "Builds and maintains the portal".to_string(),
        company_id,
        category_id: None,
        location: "Kathmandu".to_string(),
        job_type: Some("full_time".to_string()),
        salary: None,
        status: None,
    }
}

/// Expect 201 when an employer posts for their own company
#[tokio::test]
async fn create_returns_created_for_employer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let employer = test
        .portal()
        .insert_user("ramesh@example.com", "employer", true, true)
        .await?;
    let company = test
        .portal()
        .insert_company("Himalayan Tech", Some(employer.id), true)
        .await?;
    let state = test.into_app_state();

    let result = create_job(State(state), AuthedUser(employer), Json(posting(company.id))).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 403 when a job seeker tries to post
#[tokio::test]
async fn create_returns_forbidden_for_seeker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let state = test.into_app_state();

    let result = create_job(State(state), AuthedUser(seeker), Json(posting(company.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 when an employer updates another company's posting
#[tokio::test]
async fn update_returns_forbidden_for_other_employer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let owner = test
        .portal()
        .insert_user("ramesh@example.com", "employer", true, true)
        .await?;
    let other = test
        .portal()
        .insert_user("hari@example.com", "employer", true, true)
        .await?;
    let company = test
        .portal()
        .insert_company("Himalayan Tech", Some(owner.id), true)
        .await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = update_job(
        State(state),
        AuthedUser(other),
        Path(job.id),
        Json(UpdateJobDto {
            title: Some("Senior Software Engineer".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 and the posting to be gone when its owner deletes it
#[tokio::test]
async fn delete_returns_ok_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let employer = test
        .portal()
        .insert_user("ramesh@example.com", "employer", true, true)
        .await?;
    let company = test
        .portal()
        .insert_company("Himalayan Tech", Some(employer.id), true)
        .await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = delete_job(State(state), AuthedUser(employer), Path(job.id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let gone = JobRepository::new(&test.db).find_by_id(job.id).await?;
    assert!(gone.is_none());

    Ok(())
}

/// Expect 400 when the posting still has applications
#[tokio::test]
async fn delete_returns_bad_request_with_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let employer = test
        .portal()
        .insert_user("ramesh@example.com", "employer", true, true)
        .await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test
        .portal()
        .insert_company("Himalayan Tech", Some(employer.id), true)
        .await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    test.portal()
        .insert_application(job.id, seeker.id, "pending")
        .await?;
    let state = test.into_app_state();

    let result = delete_job(State(state), AuthedUser(employer), Path(job.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
