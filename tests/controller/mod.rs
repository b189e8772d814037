//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with constructed extractors, exactly as the
//! router invokes them. Assertions cover the mapped status codes and the
//! database side effects; the semantics behind each endpoint are covered in
//! depth by the service layer's own tests.

mod admin;
mod application;
mod auth;
mod company;
mod job;
mod probes;
mod user;
