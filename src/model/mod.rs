//! Data transfer objects shared between the server and the client SDK.

pub mod api;
pub mod application;
pub mod company;
pub mod job;
pub mod user;
