use std::time::Instant;

use sea_orm::DatabaseConnection;

/// Settings the authentication layer needs at request time.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthSettings,
    /// Process start, read by the status probe to report uptime.
    pub started_at: Instant,
}

/// Allows test harnesses to build an `AppState` without depending on this crate's
/// internals beyond the field types.
impl From<(DatabaseConnection, AuthSettings)> for AppState {
    fn from((db, auth): (DatabaseConnection, AuthSettings)) -> Self {
        Self {
            db,
            auth,
            started_at: Instant::now(),
        }
    }
}
