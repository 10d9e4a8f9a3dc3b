use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{not_found::NotFoundError, Error},
    },
};

/// Read-only access to user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user in insertion order.
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::NotFoundError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let Some(user) = UserRepository::new(self.db).get(user_id).await? else {
            return Err(NotFoundError::User(user_id.into()).into());
        };

        Ok(user.into())
    }
}
