pub mod prelude;

pub mod application;
pub mod company;
pub mod job;
pub mod job_category;
pub mod password_reset_token;
pub mod pending_signup;
pub mod user;
