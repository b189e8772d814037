use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use megajob::{
    model::company::{CompanyFilter, CreateCompanyDto, UpdateCompanyDto},
    server::{
        controller::company::{create_company, delete_company, list_companies, update_company},
        model::auth::AdminUser,
    },
};
use megajob_test_utils::{TestBuilder, TestError};

use crate::util::TestContextExt;

/// Expect 200 from the public listing without any authentication
#[tokio::test]
async fn list_returns_ok_without_auth() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.portal().insert_company("Himalayan Tech", None, true).await?;
    let state = test.into_app_state();

    let result = list_companies(State(state), Query(CompanyFilter::default())).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 when an admin registers a company
#[tokio::test]
async fn create_returns_created_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let state = test.into_app_state();

    let result = create_company(
        State(state),
        AdminUser(admin),
        Json(CreateCompanyDto {
            name: "Everest Finance".to_string(),
            industry: Some("Finance".to_string()),
            location: Some("Pokhara".to_string()),
            employer_id: None,
        }),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 when updating a company that does not exist
#[tokio::test]
async fn update_returns_not_found_for_unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let state = test.into_app_state();

    let result = update_company(
        State(state),
        AdminUser(admin),
        Path(999),
        Json(UpdateCompanyDto {
            is_verified: Some(true),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the company still has job postings
#[tokio::test]
async fn delete_returns_bad_request_with_postings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let admin = test
        .portal()
        .insert_user("admin@example.com", "admin", true, true)
        .await?;
    let company = test.portal().insert_company("Himalayan Tech", None, true).await?;
    test.portal()
        .insert_job("Software Engineer", company.id, None, "Kathmandu", "active")
        .await?;
    let state = test.into_app_state();

    let result = delete_company(State(state), AdminUser(admin), Path(company.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
