//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep signatures consistent
//! across tests.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::people::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the favorite link database model.
pub type FavoriteModel = entity::favorites::Model;
