use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_users::Users;

static IDX_PASSWORD_RESET_TOKENS_USER_ID: &str = "idx-password_reset_tokens-user_id";
static FK_PASSWORD_RESET_TOKENS_USER_ID: &str = "fk-password_reset_tokens-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PasswordResetTokens::Table)
                    .if_not_exists()
                    .col(pk_auto(PasswordResetTokens::Id))
                    .col(integer(PasswordResetTokens::UserId))
                    .col(string_uniq(PasswordResetTokens::Token))
                    .col(timestamp(PasswordResetTokens::ExpiresAt))
                    .col(boolean(PasswordResetTokens::Used))
                    .col(timestamp(PasswordResetTokens::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PASSWORD_RESET_TOKENS_USER_ID)
                    .table(PasswordResetTokens::Table)
                    .col(PasswordResetTokens::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PASSWORD_RESET_TOKENS_USER_ID)
                    .from_tbl(PasswordResetTokens::Table)
                    .from_col(PasswordResetTokens::UserId)
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
                    .name(FK_PASSWORD_RESET_TOKENS_USER_ID)
                    .table(PasswordResetTokens::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PASSWORD_RESET_TOKENS_USER_ID)
                    .table(PasswordResetTokens::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PasswordResetTokens::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PasswordResetTokens {
    Table,
    Id,
    UserId,
    Token,
    ExpiresAt,
    Used,
    CreatedAt,
}
