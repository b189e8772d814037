//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for seeding test data during test
//! execution (Phase 2 of the test architecture):
//!
//! - `portal` - users, companies, job categories, jobs, applications, and the
//!   transient auth records (pending signups, password reset tokens)

pub mod portal;
