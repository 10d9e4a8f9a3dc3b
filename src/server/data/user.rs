use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::repository::EntityRepository, model::db::UserModel};

/// Read access to users, which are created outside of this API
pub struct UserRepository<'a, C: ConnectionTrait> {
    store: EntityRepository<'a, entity::user::Entity, C>,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            store: EntityRepository::new(db),
        }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        self.store.get(user_id).await
    }

    pub async fn list(&self) -> Result<Vec<UserModel>, DbErr> {
        self.store.list().await
    }
}
