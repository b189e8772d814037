use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_users::Users, m20260801_000004_jobs::Jobs};

static IDX_APPLICATIONS_JOB_SEEKER: &str = "idx-applications-job_id-seeker_id";
static IDX_APPLICATIONS_SEEKER_ID: &str = "idx-applications-seeker_id";
static IDX_APPLICATIONS_STATUS: &str = "idx-applications-status";
static FK_APPLICATIONS_JOB_ID: &str = "fk-applications-job_id";
static FK_APPLICATIONS_SEEKER_ID: &str = "fk-applications-seeker_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(pk_auto(Applications::Id))
                    .col(integer(Applications::JobId))
                    .col(integer(Applications::SeekerId))
                    .col(text_null(Applications::CoverLetter))
                    .col(string(Applications::Status))
                    .col(timestamp(Applications::CreatedAt))
                    .col(timestamp(Applications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One application per seeker per job, enforced at the storage layer.
        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATIONS_JOB_SEEKER)
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .col(Applications::SeekerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATIONS_SEEKER_ID)
                    .table(Applications::Table)
                    .col(Applications::SeekerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATIONS_STATUS)
                    .table(Applications::Table)
                    .col(Applications::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATIONS_JOB_ID)
                    .from_tbl(Applications::Table)
                    .from_col(Applications::JobId)
                    .to_tbl(Jobs::Table)
                    .to_col(Jobs::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATIONS_SEEKER_ID)
                    .from_tbl(Applications::Table)
                    .from_col(Applications::SeekerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATIONS_SEEKER_ID)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATIONS_JOB_ID)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATIONS_STATUS)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATIONS_SEEKER_ID)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATIONS_JOB_SEEKER)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Applications {
    Table,
    Id,
    JobId,
    SeekerId,
    CoverLetter,
    Status,
    CreatedAt,
    UpdatedAt,
}
