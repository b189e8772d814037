use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an application in the `pending` state.
    ///
    /// The insert rides on the unique `(job_id, seeker_id)` index; a repeat
    /// application surfaces as [`DbErr::RecordNotInserted`] instead of a
    /// constraint violation, so the caller can map it to a domain error.
    pub async fn create(
        &self,
        job_id: i32,
        seeker_id: i32,
        cover_letter: Option<String>,
    ) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::application::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            seeker_id: ActiveValue::Set(seeker_id),
            cover_letter: ActiveValue::Set(cover_letter),
            status: ActiveValue::Set("pending".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Application::insert(application)
            .on_conflict(
                OnConflict::columns([
                    entity::application::Column::JobId,
                    entity::application::Column::SeekerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        application_id: i32,
        status: &str,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            id: ActiveValue::Set(application_id),
            status: ActiveValue::Set(status.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.update(self.db).await
    }

    /// Lists a seeker's own applications, newest first.
    pub async fn list_by_seeker(
        &self,
        seeker_id: i32,
        status: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::application::Model>, ItemsAndPagesNumber), DbErr> {
        let query = entity::prelude::Application::find()
            .filter(entity::application::Column::SeekerId.eq(seeker_id));

        self.paginate(query, status, page, limit).await
    }

    /// Lists applications to any job posted by the given company.
    pub async fn list_by_company(
        &self,
        company_id: i32,
        status: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::application::Model>, ItemsAndPagesNumber), DbErr> {
        let query = entity::prelude::Application::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::application::Relation::Job.def(),
            )
            .filter(entity::job::Column::CompanyId.eq(company_id));

        self.paginate(query, status, page, limit).await
    }

    pub async fn list_all(
        &self,
        status: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::application::Model>, ItemsAndPagesNumber), DbErr> {
        let query = entity::prelude::Application::find();

        self.paginate(query, status, page, limit).await
    }

    pub async fn count_by_job(&self, job_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::JobId.eq(job_id))
            .count(self.db)
            .await
    }

    async fn paginate(
        &self,
        mut query: sea_orm::Select<entity::prelude::Application>,
        status: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::application::Model>, ItemsAndPagesNumber), DbErr> {
        if let Some(status) = status {
            query = query.filter(entity::application::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::application::Column::CreatedAt)
            .paginate(self.db, limit);
        let totals = paginator.num_items_and_pages().await?;
        let applications = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((applications, totals))
    }
}
