use sea_orm_migration::{prelude::*, schema::*};

static IDX_PENDING_SIGNUPS_EMAIL: &str = "idx-pending_signups-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingSignups::Table)
                    .if_not_exists()
                    .col(string(PendingSignups::Id).primary_key())
                    .col(string(PendingSignups::Email))
                    .col(string(PendingSignups::PasswordHash))
                    .col(string(PendingSignups::Role))
                    .col(string(PendingSignups::FirstName))
                    .col(string(PendingSignups::LastName))
                    .col(string_null(PendingSignups::Phone))
                    .col(string(PendingSignups::Otp))
                    .col(timestamp(PendingSignups::ExpiresAt))
                    .col(timestamp(PendingSignups::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PENDING_SIGNUPS_EMAIL)
                    .table(PendingSignups::Table)
                    .col(PendingSignups::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PENDING_SIGNUPS_EMAIL)
                    .table(PendingSignups::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PendingSignups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PendingSignups {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    FirstName,
    LastName,
    Phone,
    Otp,
    ExpiresAt,
    CreatedAt,
}
