//! MegaJob job portal platform core.
//!
//! The crate is split into [`server`] (the axum HTTP backend for accounts,
//! companies, job postings and applications), [`client`] (the typed API
//! client with demo credentials and an offline fallback store) and [`model`]
//! (the DTOs shared by both sides).

pub mod client;
pub mod model;
pub mod server;
