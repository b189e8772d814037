//! Test utilities for building server state against the test database

use megajob::server::model::app::{AppState, AuthSettings};
use megajob_test_utils::{TestContext, TEST_JWT_SECRET};

/// Extension trait for TestContext to build the AppState handlers expect
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState::from((
            self.db.clone(),
            AuthSettings {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                jwt_expires_in_days: 7,
            },
        ))
    }
}
