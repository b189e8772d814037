//! Tests for the company endpoints.

mod manage;
