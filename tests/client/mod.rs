//! Tests for the typed API client and its session handling.
//!
//! The backend is stood in for by a mockito server; offline paths get a
//! deliberately unreachable base URL instead.

mod api;
mod auth;
