use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        data::planet::{PlanetChanges, PlanetRepository},
        error::{not_found::NotFoundError, Error},
        util::field::{non_empty, required},
    },
};

/// Service for the planet catalog.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).list().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get(planet_id).await? else {
            return Err(NotFoundError::Planet(planet_id.into()).into());
        };

        Ok(planet.into())
    }

    /// Creates a planet, all fields are mandatory.
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let name = required(planet.name)?;
        let climate = required(planet.climate)?;
        let terrain = required(planet.terrain)?;

        let created = PlanetRepository::new(self.db)
            .create(name, climate, terrain)
            .await?;

        tracing::info!("Created planet ID {} ({})", created.id, created.name);

        Ok(created.into())
    }

    /// Applies a partial update to a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet after the update
    /// - `Err(Error::NotFoundError)` - No planet with this ID
    /// - `Err(Error::ValidationError)` - A supplied field is empty
    pub async fn update_planet(
        &self,
        planet_id: i32,
        planet: UpdatePlanetDto,
    ) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        if planet_repo.get(planet_id).await?.is_none() {
            return Err(NotFoundError::Planet(planet_id.into()).into());
        }

        let changes = PlanetChanges {
            name: non_empty(planet.name)?,
            climate: non_empty(planet.climate)?,
            terrain: non_empty(planet.terrain)?,
        };

        let Some(updated) = planet_repo.update(planet_id, changes).await? else {
            return Err(NotFoundError::Planet(planet_id.into()).into());
        };

        tracing::info!("Updated planet ID {}", planet_id);

        Ok(updated.into())
    }

    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        let result = PlanetRepository::new(self.db).delete(planet_id).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::Planet(planet_id.into()).into());
        }

        tracing::info!("Deleted planet ID {}", planet_id);

        Ok(())
    }
}
