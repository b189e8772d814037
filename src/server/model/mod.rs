//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state
//! and the authentication types (JWT claims and the authenticated-user extractors). These
//! models bridge the gap between database entities and HTTP handlers.

pub mod app;
pub mod auth;
