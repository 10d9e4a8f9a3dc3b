use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, IntoActiveModel};

use crate::server::{data::repository::EntityRepository, model::db::PlanetModel};

/// Field values for a planet update, `None` keeps the stored value
#[derive(Debug, Default, Clone)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    store: EntityRepository<'a, entity::planet::Entity, C>,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            store: EntityRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        name: String,
        climate: String,
        terrain: String,
    ) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(climate),
            terrain: ActiveValue::Set(terrain),
            ..Default::default()
        };

        self.store.insert(planet).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        self.store.get(planet_id).await
    }

    pub async fn list(&self) -> Result<Vec<PlanetModel>, DbErr> {
        self.store.list().await
    }

    /// Applies `changes` to an existing planet
    ///
    /// Returns `Ok(None)` if the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let Some(planet) = self.store.get(planet_id).await? else {
            return Ok(None);
        };

        let mut planet_am = planet.clone().into_active_model();
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        Ok(Some(self.store.update(planet_am).await?))
    }

    /// Deletes a planet, favorites referencing it are left in place
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        self.store.delete(planet_id).await
    }
}
