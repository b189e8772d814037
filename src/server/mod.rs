//! Server application core modules.
//!
//! This module contains all server-side functionality for the MegaJob application, including
//! HTTP routing, authentication, database operations, and the job portal domain services. It
//! provides the complete backend infrastructure for managing user accounts, companies, job
//! postings, and applications.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
