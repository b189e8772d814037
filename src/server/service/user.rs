//! Account profile and admin user management.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        api::{Paginated, PaginationDto},
        user::{UpdateProfileDto, UpdateUserStatusDto, UserDto, UserFilter},
    },
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        service::page_params,
    },
};

/// Strips credential material off a user row.
///
/// Fails with a parse error when the stored role string is not a known
/// [`UserRole`](crate::model::user::UserRole), which would mean the row was
/// written outside this application.
pub(crate) fn to_user_dto(user: &entity::user::Model) -> Result<UserDto, Error> {
    Ok(UserDto {
        id: user.id,
        email: user.email.clone(),
        role: user.role.parse().map_err(Error::ParseError)?,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        phone: user.phone.clone(),
        is_verified: user.is_verified,
        is_active: user.is_active,
        created_at: user.created_at,
    })
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The authenticated user's own profile.
    pub fn profile(&self, user: &entity::user::Model) -> Result<UserDto, Error> {
        to_user_dto(user)
    }

    /// Applies a partial profile update for the authenticated user.
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<UserDto, Error> {
        let user = match UserRepository::new(self.db)
            .update_profile(user_id, update)
            .await
        {
            Ok(user) => user,
            Err(DbErr::RecordNotUpdated) => return Err(UserError::NotFound(user_id).into()),
            Err(err) => return Err(err.into()),
        };

        to_user_dto(&user)
    }

    /// Admin listing of accounts with optional role and search filters.
    pub async fn list(&self, filter: UserFilter) -> Result<Paginated<UserDto>, Error> {
        let (page, limit) = page_params(filter.page, filter.limit);

        let (users, totals) = UserRepository::new(self.db)
            .list(
                filter.role.map(|role| role.as_str()),
                filter.search.as_deref(),
                page,
                limit,
            )
            .await?;

        Ok(Paginated {
            data: users.iter().map(to_user_dto).collect::<Result<_, _>>()?,
            pagination: PaginationDto {
                page,
                limit,
                total: totals.number_of_items,
                pages: totals.number_of_pages,
            },
        })
    }

    /// Admin toggle of the `is_active` / `is_verified` flags.
    pub async fn update_status(
        &self,
        user_id: i32,
        update: UpdateUserStatusDto,
    ) -> Result<UserDto, Error> {
        let user = match UserRepository::new(self.db)
            .update_status(user_id, update.is_active, update.is_verified)
            .await
        {
            Ok(user) => user,
            Err(DbErr::RecordNotUpdated) => return Err(UserError::NotFound(user_id).into()),
            Err(err) => return Err(err.into()),
        };

        to_user_dto(&user)
    }

    /// Admin hard delete of an account.
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        Ok(())
    }
}
