use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, IntoActiveModel};

use crate::server::{data::repository::EntityRepository, model::db::CharacterModel};

/// Field values for a character update, `None` keeps the stored value
#[derive(Debug, Default, Clone)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    store: EntityRepository<'a, entity::people::Entity, C>,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            store: EntityRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        name: String,
        gender: String,
        species: String,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::people::ActiveModel {
            name: ActiveValue::Set(name),
            gender: ActiveValue::Set(gender),
            species: ActiveValue::Set(species),
            ..Default::default()
        };

        self.store.insert(character).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        self.store.get(character_id).await
    }

    pub async fn list(&self) -> Result<Vec<CharacterModel>, DbErr> {
        self.store.list().await
    }

    /// Applies `changes` to an existing character
    ///
    /// Returns `Ok(None)` if the character does not exist.
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let Some(character) = self.store.get(character_id).await? else {
            return Ok(None);
        };

        let mut character_am = character.clone().into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(gender) = changes.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(species) = changes.species {
            character_am.species = ActiveValue::Set(species);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        Ok(Some(self.store.update(character_am).await?))
    }

    /// Deletes a character, favorites referencing it are left in place
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        self.store.delete(character_id).await
    }
}
