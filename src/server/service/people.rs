use sea_orm::DatabaseConnection;

use crate::{
    model::people::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::people::{CharacterChanges, PeopleRepository},
        error::{not_found::NotFoundError, Error},
        util::field::{non_empty, required},
    },
};

/// Service for the character catalog.
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    /// Creates a new instance of PeopleService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_people(&self) -> Result<Vec<CharacterDto>, Error> {
        let people = PeopleRepository::new(self.db).list().await?;

        Ok(people.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::NotFoundError)` - No character with this ID
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let Some(character) = PeopleRepository::new(self.db).get(character_id).await? else {
            return Err(NotFoundError::Character(character_id.into()).into());
        };

        Ok(character.into())
    }

    /// Creates a character, all fields are mandatory.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Created character with its assigned ID
    /// - `Err(Error::ValidationError)` - A field is absent or empty, nothing was written
    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let name = required(character.name)?;
        let gender = required(character.gender)?;
        let species = required(character.species)?;

        let created = PeopleRepository::new(self.db)
            .create(name, gender, species)
            .await?;

        tracing::info!("Created character ID {} ({})", created.id, created.name);

        Ok(created.into())
    }

    /// Applies a partial update to a character.
    ///
    /// Absent fields keep their stored value, supplied fields must not be empty.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character after the update
    /// - `Err(Error::NotFoundError)` - No character with this ID
    /// - `Err(Error::ValidationError)` - A supplied field is empty
    pub async fn update_character(
        &self,
        character_id: i32,
        character: UpdateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let people_repo = PeopleRepository::new(self.db);

        if people_repo.get(character_id).await?.is_none() {
            return Err(NotFoundError::Character(character_id.into()).into());
        }

        let changes = CharacterChanges {
            name: non_empty(character.name)?,
            gender: non_empty(character.gender)?,
            species: non_empty(character.species)?,
        };

        let Some(updated) = people_repo.update(character_id, changes).await? else {
            return Err(NotFoundError::Character(character_id.into()).into());
        };

        tracing::info!("Updated character ID {}", character_id);

        Ok(updated.into())
    }

    /// Deletes a character, favorites pointing at it are left in place.
    pub async fn delete_character(&self, character_id: i32) -> Result<(), Error> {
        let result = PeopleRepository::new(self.db).delete(character_id).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::Character(character_id.into()).into());
        }

        tracing::info!("Deleted character ID {}", character_id);

        Ok(())
    }
}
