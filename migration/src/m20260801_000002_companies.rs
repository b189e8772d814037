use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_users::Users;

static IDX_COMPANIES_NAME: &str = "idx-companies-name";
static IDX_COMPANIES_EMPLOYER_ID: &str = "idx-companies-employer_id";
static FK_COMPANIES_EMPLOYER_ID: &str = "fk-companies-employer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::Id))
                    .col(string(Companies::Name))
                    .col(string_null(Companies::Industry))
                    .col(string_null(Companies::Location))
                    .col(integer_null(Companies::EmployerId))
                    .col(boolean(Companies::IsVerified))
                    .col(timestamp(Companies::CreatedAt))
                    .col(timestamp(Companies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANIES_NAME)
                    .table(Companies::Table)
                    .col(Companies::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANIES_EMPLOYER_ID)
                    .table(Companies::Table)
                    .col(Companies::EmployerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPANIES_EMPLOYER_ID)
                    .from_tbl(Companies::Table)
                    .from_col(Companies::EmployerId)
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
                    .name(FK_COMPANIES_EMPLOYER_ID)
                    .table(Companies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANIES_EMPLOYER_ID)
                    .table(Companies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANIES_NAME)
                    .table(Companies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    Id,
    Name,
    Industry,
    Location,
    EmployerId,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}
