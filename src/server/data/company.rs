use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::company::{CreateCompanyDto, UpdateCompanyDto};

use super::patch;

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a company; new companies start unverified.
    pub async fn create(&self, company: CreateCompanyDto) -> Result<entity::company::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(company.name),
            industry: ActiveValue::Set(company.industry),
            location: ActiveValue::Set(company.location),
            employer_id: ActiveValue::Set(company.employer_id),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        company.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        company_id: i32,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await
    }

    /// The company managed by an employer account, each employer manages at
    /// most one company.
    pub async fn find_by_employer(
        &self,
        employer_id: i32,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::EmployerId.eq(employer_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update, leaving absent fields unchanged.
    pub async fn update(
        &self,
        company_id: i32,
        update: UpdateCompanyDto,
    ) -> Result<entity::company::Model, DbErr> {
        let company = entity::company::ActiveModel {
            id: ActiveValue::Set(company_id),
            name: patch(update.name),
            industry: patch(update.industry.map(Some)),
            location: patch(update.location.map(Some)),
            employer_id: patch(update.employer_id.map(Some)),
            is_verified: patch(update.is_verified),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        company.update(self.db).await
    }

    /// Deletes a company
    ///
    /// Returns OK regardless of the company existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, company_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Company::delete_by_id(company_id)
            .exec(self.db)
            .await
    }

    /// Lists companies newest first with an optional verification filter.
    ///
    /// `page` is 1-based.
    pub async fn list(
        &self,
        verified: Option<bool>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::company::Model>, ItemsAndPagesNumber), DbErr> {
        let mut query =
            entity::prelude::Company::find().order_by_desc(entity::company::Column::CreatedAt);

        if let Some(verified) = verified {
            query = query.filter(entity::company::Column::IsVerified.eq(verified));
        }

        let paginator = query.paginate(self.db, limit);
        let totals = paginator.num_items_and_pages().await?;
        let companies = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((companies, totals))
    }
}
