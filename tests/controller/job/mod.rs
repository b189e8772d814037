//! Tests for the job posting endpoints.

mod list;
mod manage;
