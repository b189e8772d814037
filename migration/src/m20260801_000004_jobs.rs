use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000002_companies::Companies, m20260801_000003_job_categories::JobCategories,
};

static IDX_JOBS_COMPANY_ID: &str = "idx-jobs-company_id";
static IDX_JOBS_STATUS: &str = "idx-jobs-status";
static IDX_JOBS_LOCATION: &str = "idx-jobs-location";
static IDX_JOBS_CREATED_AT: &str = "idx-jobs-created_at";
static FK_JOBS_COMPANY_ID: &str = "fk-jobs-company_id";
static FK_JOBS_CATEGORY_ID: &str = "fk-jobs-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(string(Jobs::Title))
                    .col(text(Jobs::Description))
                    .col(integer(Jobs::CompanyId))
                    .col(integer_null(Jobs::CategoryId))
                    .col(string(Jobs::Location))
                    .col(string_null(Jobs::JobType))
                    .col(string_null(Jobs::Salary))
                    .col(string(Jobs::Status))
                    .col(timestamp(Jobs::CreatedAt))
                    .col(timestamp(Jobs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOBS_COMPANY_ID)
                    .table(Jobs::Table)
                    .col(Jobs::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOBS_STATUS)
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOBS_LOCATION)
                    .table(Jobs::Table)
                    .col(Jobs::Location)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOBS_CREATED_AT)
                    .table(Jobs::Table)
                    .col(Jobs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOBS_COMPANY_ID)
                    .from_tbl(Jobs::Table)
                    .from_col(Jobs::CompanyId)
                    .to_tbl(Companies::Table)
                    .to_col(Companies::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOBS_CATEGORY_ID)
                    .from_tbl(Jobs::Table)
                    .from_col(Jobs::CategoryId)
                    .to_tbl(JobCategories::Table)
                    .to_col(JobCategories::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOBS_CATEGORY_ID)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOBS_COMPANY_ID)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOBS_CREATED_AT)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOBS_LOCATION)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOBS_STATUS)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOBS_COMPANY_ID)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Jobs {
    Table,
    Id,
    Title,
    Description,
    CompanyId,
    CategoryId,
    Location,
    JobType,
    Salary,
    Status,
    CreatedAt,
    UpdatedAt,
}
