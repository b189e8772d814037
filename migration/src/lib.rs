pub use sea_orm_migration::prelude::*;

mod m20260801_000001_users;
mod m20260801_000002_companies;
mod m20260801_000003_job_categories;
mod m20260801_000004_jobs;
mod m20260801_000005_applications;
mod m20260801_000006_pending_signups;
mod m20260801_000007_password_reset_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_users::Migration),
            Box::new(m20260801_000002_companies::Migration),
            Box::new(m20260801_000003_job_categories::Migration),
            Box::new(m20260801_000004_jobs::Migration),
            Box::new(m20260801_000005_applications::Migration),
            Box::new(m20260801_000006_pending_signups::Migration),
            Box::new(m20260801_000007_password_reset_tokens::Migration),
        ]
    }
}
