pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use constant::{TEST_JWT_SECRET, TEST_PASSWORD};
pub use context::TestContext;
pub use error::TestError;
