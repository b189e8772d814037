use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Install the global tracing subscriber
///
/// Logs at `info` for this crate unless overridden through `RUST_LOG`.
pub fn init_tracing() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("megajob=info".parse().expect("Invalid log directive"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}
