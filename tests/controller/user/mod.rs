//! Tests for the profile endpoints.

mod profile;
