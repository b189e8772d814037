use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::job::{CreateJobDto, UpdateJobDto};

use super::patch;

/// Resolved listing filters for [`JobRepository::list`].
///
/// The service layer resolves the public query parameters (category name,
/// default status) into these concrete column filters.
#[derive(Default)]
pub struct JobSearch<'a> {
    pub status: Option<&'a str>,
    pub location: Option<&'a str>,
    pub job_type: Option<&'a str>,
    pub category_id: Option<i32>,
    /// Case-insensitive substring over title and description
    pub search: Option<&'a str>,
}

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        job: CreateJobDto,
        status: &str,
    ) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let job = entity::job::ActiveModel {
            title: ActiveValue::Set(job.title),
            description: ActiveValue::Set(job.description),
            company_id: ActiveValue::Set(job.company_id),
            category_id: ActiveValue::Set(job.category_id),
            location: ActiveValue::Set(job.location),
            job_type: ActiveValue::Set(job.job_type),
            salary: ActiveValue::Set(job.salary),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    pub async fn find_by_id(&self, job_id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    /// Applies a partial update, leaving absent fields unchanged.
    pub async fn update(
        &self,
        job_id: i32,
        update: UpdateJobDto,
        status: Option<&str>,
    ) -> Result<entity::job::Model, DbErr> {
        let job = entity::job::ActiveModel {
            id: ActiveValue::Set(job_id),
            title: patch(update.title),
            description: patch(update.description),
            category_id: patch(update.category_id.map(Some)),
            location: patch(update.location),
            job_type: patch(update.job_type.map(Some)),
            salary: patch(update.salary.map(Some)),
            status: patch(status.map(str::to_string)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        job.update(self.db).await
    }

    /// Deletes a job
    ///
    /// Returns OK regardless of the job existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, job_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Job::delete_by_id(job_id)
            .exec(self.db)
            .await
    }

    /// Lists jobs newest first under the given filters.
    ///
    /// `page` is 1-based.
    pub async fn list(
        &self,
        search: JobSearch<'_>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::job::Model>, ItemsAndPagesNumber), DbErr> {
        use sea_orm::sea_query::{Expr, ExprTrait, Func};

        let mut query =
            entity::prelude::Job::find().order_by_desc(entity::job::Column::CreatedAt);

        if let Some(status) = search.status {
            query = query.filter(entity::job::Column::Status.eq(status));
        }

        if let Some(location) = search.location {
            query = query.filter(entity::job::Column::Location.eq(location));
        }

        if let Some(job_type) = search.job_type {
            query = query.filter(entity::job::Column::JobType.eq(job_type));
        }

        if let Some(category_id) = search.category_id {
            query = query.filter(entity::job::Column::CategoryId.eq(category_id));
        }

        if let Some(term) = search.search {
            let pattern = format!("%{}%", term.to_lowercase());

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::job::Column::Title)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::job::Column::Description)))
                            .like(pattern.as_str()),
                    ),
            );
        }

        let paginator = query.paginate(self.db, limit);
        let totals = paginator.num_items_and_pages().await?;
        let jobs = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((jobs, totals))
    }

    /// Number of jobs still referencing a company.
    pub async fn count_by_company(&self, company_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::CompanyId.eq(company_id))
            .count(self.db)
            .await
    }
}
