use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

/// Request body for creating a planet
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// Request body for a partial planet update, absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
        }
    }
}
