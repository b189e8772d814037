use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct JobCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobCategoryRepository<'a> {
    /// Creates a new instance of [`JobCategoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category; fails on a duplicate name.
    pub async fn create(&self, name: &str) -> Result<entity::job_category::Model, DbErr> {
        let category = entity::job_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<entity::job_category::Model>, DbErr> {
        entity::prelude::JobCategory::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::job_category::Model>, DbErr> {
        entity::prelude::JobCategory::find()
            .filter(entity::job_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists all categories alphabetically.
    pub async fn list(&self) -> Result<Vec<entity::job_category::Model>, DbErr> {
        entity::prelude::JobCategory::find()
            .order_by_asc(entity::job_category::Column::Name)
            .all(self.db)
            .await
    }
}
