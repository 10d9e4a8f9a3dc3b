use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row with raw column values.
    ///
    /// No validation is performed, which allows inserting rows referencing both or
    /// neither target as well as targets that do not exist.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        people_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(people_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    pub async fn insert_character_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, Some(people_id), None).await
    }

    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, Some(planet_id)).await
    }
}
