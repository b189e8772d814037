use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use megajob::{
    model::application::{
        ApplicationFilter, ApplicationStatus, CreateApplicationDto, UpdateApplicationStatusDto,
    },
    server::{
        controller::application::{
            create_application, list_applications, update_application_status,
        },
        model::auth::AuthedUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 201 when a job seeker applies to an active posting
#[tokio::test]
async fn create_returns_created_for_seeker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = create_application(
        State(state),
        AuthedUser(seeker),
        Json(CreateApplicationDto {
            job_id: job.id,
            cover_letter: Some("I would like to apply.".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 when the seeker has already applied to the posting
#[tokio::test]
async fn create_returns_bad_request_for_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    test.portal()
        .insert_application(job.id, seeker.id, "pending")
        .await?;
    let state = test.into_app_state();

    let result = create_application(
        State(state),
        AuthedUser(seeker),
        Json(CreateApplicationDto {
            job_id: job.id,
            cover_letter: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 when an employer tries to apply
#[tokio::test]
async fn create_returns_forbidden_for_employer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let employer = test
        .portal()
        .insert_user("ramesh@example.com", "employer", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = create_application(
        State(state),
        AuthedUser(employer),
        Json(CreateApplicationDto {
            job_id: job.id,
            cover_letter: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 with the caller's own applications
#[tokio::test]
async fn list_returns_ok_for_seeker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    test.portal()
        .insert_application(job.id, seeker.id, "pending")
        .await?;
    let state = test.into_app_state();

    let result = list_applications(
        State(state),
        AuthedUser(seeker),
        Query(ApplicationFilter::default()),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 when the owning employer reviews an application
#[tokio::test]
async fn update_status_returns_ok_for_owning_employer() -> Result<(), TestError> {
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
    let application = test
        .portal()
        .insert_application(job.id, seeker.id, "pending")
        .await?;
    let state = test.into_app_state();

    let result = update_application_status(
        State(state),
        AuthedUser(employer),
        Path(application.id),
        Json(UpdateApplicationStatusDto {
            status: ApplicationStatus::Reviewed,
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 when a seeker tries to review an application
#[tokio::test]
async fn update_status_returns_forbidden_for_seeker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let seeker = test
        .portal()
        .insert_user("sita@example.com", "job_seeker", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    let job = test
        .portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let application = test
        .portal()
        .insert_application(job.id, seeker.id, "pending")
        .await?;
    let state = test.into_app_state();

    let result = update_application_status(
        State(state),
        AuthedUser(seeker),
        Path(application.id),
        Json(UpdateApplicationStatusDto {
            status: ApplicationStatus::Accepted,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
