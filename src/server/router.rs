//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document served at `/api/docs/openapi.json`, with Swagger UI at
/// `/api/docs` for interactive exploration. Handlers sharing a path are registered in a
/// single `routes!` call so their method routers merge.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Start a signup, sends a verification code
/// - `POST /api/auth/verify-otp` - Verify the code and create the account
/// - `POST /api/auth/resend-otp` - Send a fresh verification code
/// - `POST /api/auth/login` - Log in with email and password
/// - `POST /api/auth/admin-login` - Log in to the admin portal
/// - `POST /api/auth/forgot-password` - Request a password reset link
/// - `POST /api/auth/reset-password` - Redeem a reset token
/// - `POST /api/auth/change-password` - Change the logged-in account's password
/// - `GET /api/auth/validate-session` - Check a session token
/// - `POST /api/auth/logout` - Log out
/// - `GET|PUT /api/users/profile` - Read and update the logged-in profile
/// - `GET|POST /api/jobs` - Browse and post jobs
/// - `GET /api/jobs/categories` - List job categories
/// - `GET|PUT|DELETE /api/jobs/{id}` - Read, update and delete a job
/// - `GET|POST /api/companies` - Browse and register companies
/// - `PUT|DELETE /api/companies/{id}` - Update and delete a company
/// - `POST|GET /api/applications` - Apply to jobs and list applications
/// - `PUT /api/applications/{id}/status` - Move an application through review
/// - `GET /api/admin/users` - List user accounts
/// - `PUT /api/admin/users/{id}/status` - Activate, deactivate or verify an account
/// - `DELETE /api/admin/users/{id}` - Delete an account
/// - `GET /api/status` - Server build and uptime
/// - `GET /api/health` - Database reachability
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MegaJob", description = "MegaJob API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Signup, login and password recovery routes"),
        (name = controller::user::USER_TAG, description = "Account profile routes"),
        (name = controller::job::JOB_TAG, description = "Job posting routes"),
        (name = controller::company::COMPANY_TAG, description = "Company directory routes"),
        (name = controller::application::APPLICATION_TAG, description = "Job application routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin user management routes"),
        (name = controller::probes::PROBES_TAG, description = "Status and health probes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::verify_otp))
        .routes(routes!(controller::auth::resend_otp))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::admin_login))
        .routes(routes!(controller::auth::forgot_password))
        .routes(routes!(controller::auth::reset_password))
        .routes(routes!(controller::auth::change_password))
        .routes(routes!(controller::auth::validate_session))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::get_profile,
            controller::user::update_profile
        ))
        .routes(routes!(
            controller::job::list_jobs,
            controller::job::create_job
        ))
        .routes(routes!(controller::job::list_categories))
        .routes(routes!(
            controller::job::get_job,
            controller::job::update_job,
            controller::job::delete_job
        ))
        .routes(routes!(
            controller::company::list_companies,
            controller::company::create_company
        ))
        .routes(routes!(
            controller::company::update_company,
            controller::company::delete_company
        ))
        .routes(routes!(
            controller::application::create_application,
            controller::application::list_applications
        ))
        .routes(routes!(controller::application::update_application_status))
        .routes(routes!(controller::admin::list_users))
        .routes(routes!(controller::admin::update_user_status))
        .routes(routes!(controller::admin::delete_user))
        .routes(routes!(controller::probes::get_status))
        .routes(routes!(controller::probes::get_health))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
