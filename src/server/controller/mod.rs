//! HTTP controller endpoints for the MegaJob web API.
//!
//! This module contains Axum handlers for authentication, the public job board,
//! applications, companies and admin user management. Controllers handle HTTP
//! requests, hand the work to services, and map results into HTTP responses.
//! Every endpoint is annotated with utoipa for OpenAPI documentation.

pub mod admin;
pub mod application;
pub mod auth;
pub mod company;
pub mod job;
pub mod probes;
pub mod user;
