//! Tests for the admin user management endpoints.

mod users;
