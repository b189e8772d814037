//! Typed client SDK for the MegaJob API.
//!
//! [`ApiClient`] wraps the HTTP surface with bearer token attachment and
//! normalized errors. [`AuthService`] layers the demo credential pairs and an
//! offline fallback on top, backed by the document store in [`store`]. Both
//! persist through a pluggable [`storage::StorageBackend`].

pub mod api;
pub mod auth;
pub mod error;
pub mod storage;
pub mod store;

pub use api::ApiClient;
pub use auth::AuthService;
pub use error::ClientError;
