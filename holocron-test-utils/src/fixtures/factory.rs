//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use chrono::Utc;

use crate::model::{CharacterModel, FavoriteModel, PlanetModel, UserModel};

/// Create a mock user database model.
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        firstname: "Test".to_string(),
        lastname: "User".to_string(),
        email: format!("{}@holocron.test", username),
        password: "not-a-real-hash".to_string(),
        is_active: true,
        subscription_date: Utc::now().naive_utc(),
    }
}

/// Create a mock character database model.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        gender: "female".to_string(),
        species: "Human".to_string(),
    }
}

/// Create a mock planet database model.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        climate: "temperate".to_string(),
        terrain: "grasslands, mountains".to_string(),
    }
}

/// Create a mock favorite database model with raw column values.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    people_id: Option<i32>,
    planet_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        people_id,
        planet_id,
    }
}
