use sea_orm::{ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult};

use crate::server::{
    data::repository::EntityRepository,
    model::{db::FavoriteModel, favorite::FavoriteTarget},
};

use entity::favorites::Column;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    store: EntityRepository<'a, entity::favorites::Entity, C>,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            store: EntityRepository::new(db),
        }
    }

    /// Links `target` to the user
    ///
    /// Does not check for an existing link, with the migrated schema a duplicate is
    /// rejected by a unique index.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(target.people_id()),
            planet_id: ActiveValue::Set(target.planet_id()),
            ..Default::default()
        };

        self.store.insert(favorite).await
    }

    /// Finds the user's link to `target`, if any
    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        let target_condition = match target {
            FavoriteTarget::Character(people_id) => Column::PeopleId.eq(people_id),
            FavoriteTarget::Planet(planet_id) => Column::PlanetId.eq(planet_id),
        };

        let favorites = self
            .store
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(target_condition),
            )
            .await?;

        Ok(favorites.into_iter().next())
    }

    /// Gets all of the user's links in insertion order
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        self.store
            .filter(Condition::all().add(Column::UserId.eq(user_id)))
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        self.store.delete(favorite_id).await
    }
}
