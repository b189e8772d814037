use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct PasswordResetTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetTokenRepository<'a> {
    /// Creates a new instance of [`PasswordResetTokenRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        let reset_token = entity::password_reset_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        reset_token.insert(self.db).await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::password_reset_token::Model>, DbErr> {
        entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Burns a token so it cannot redeem a second reset.
    pub async fn mark_used(
        &self,
        token_id: i32,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        let reset_token = entity::password_reset_token::ActiveModel {
            id: ActiveValue::Set(token_id),
            used: ActiveValue::Set(true),
            ..Default::default()
        };

        reset_token.update(self.db).await
    }
}
