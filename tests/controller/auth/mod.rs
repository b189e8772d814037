//! Tests for the authentication endpoints.

mod login;
mod password;
mod register;
mod session;
