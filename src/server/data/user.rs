use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::UpdateProfileDto;

use super::patch;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account; fails on a duplicate email.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<String>,
        is_verified: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            phone: ActiveValue::Set(phone),
            is_verified: ActiveValue::Set(is_verified),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies a partial profile update, leaving absent fields unchanged.
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            first_name: patch(update.first_name),
            last_name: patch(update.last_name),
            phone: patch(update.phone.map(Some)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.update(self.db).await
    }

    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.update(self.db).await
    }

    /// Toggles account flags, leaving absent flags unchanged.
    pub async fn update_status(
        &self,
        user_id: i32,
        is_active: Option<bool>,
        is_verified: Option<bool>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            is_active: patch(is_active),
            is_verified: patch(is_verified),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.update(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Lists users newest first with optional role and search filters.
    ///
    /// `search` matches case-insensitively against email, first and last name.
    /// `page` is 1-based.
    pub async fn list(
        &self,
        role: Option<&str>,
        search: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::user::Model>, ItemsAndPagesNumber), DbErr> {
        use sea_orm::sea_query::{Expr, ExprTrait, Func};

        let mut query =
            entity::prelude::User::find().order_by_desc(entity::user::Column::CreatedAt);

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        if let Some(term) = search {
            let pattern = format!("%{}%", term.to_lowercase());

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::Email)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::FirstName)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::LastName)))
                            .like(pattern.as_str()),
                    ),
            );
        }

        let paginator = query.paginate(self.db, limit);
        let totals = paginator.num_items_and_pages().await?;
        let users = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((users, totals))
    }
}
