//! Tests for the job application endpoints.

mod manage;
