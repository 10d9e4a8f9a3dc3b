use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{people::CharacterDto, planet::PlanetDto};

/// A favorite expanded with its target's details
///
/// Serializes as `{"type": "person", "details": {...}}` or
/// `{"type": "planet", "details": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "details", rename_all = "lowercase")]
pub enum FavoriteDto {
    Person(CharacterDto),
    Planet(PlanetDto),
}

/// Request body for adding or removing a favorite
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRequestDto {
    /// ID of the user owning the favorite
    pub user_id: Option<i32>,
}
