use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub species: String,
}

/// Request body for creating a character
///
/// Fields are optional at the wire level so that a missing field is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

/// Request body for a partial character update, absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

impl From<entity::people::Model> for CharacterDto {
    fn from(model: entity::people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            species: model.species,
        }
    }
}
