use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a human character with the given name.
    pub async fn insert_mock_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        let character = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set("female".to_string()),
            species: ActiveValue::Set("Human".to_string()),
            ..Default::default()
        };

        Ok(character.insert(&self.setup.db).await?)
    }

    /// Insert a temperate planet with the given name.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set("temperate".to_string()),
            terrain: ActiveValue::Set("grasslands, mountains".to_string()),
            ..Default::default()
        };

        Ok(planet.insert(&self.setup.db).await?)
    }
}
