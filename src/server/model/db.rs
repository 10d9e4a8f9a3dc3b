//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so callers don't have to reach into the `entity` crate
//! for every signature.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username`, `firstname`, `lastname` - Display fields
/// - `email` - Unique contact address
/// - `password` - Opaque credential, never serialized
/// - `is_active` - Whether the account is active
/// - `subscription_date` - When the user subscribed
pub type UserModel = entity::user::Model;

/// Type alias for the character database model (`people` table).
pub type CharacterModel = entity::people::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the favorite link database model.
///
/// Exactly one of `people_id` / `planet_id` is set on a well-formed row; use
/// [`Favorite`](crate::server::model::favorite::Favorite) to work with it.
pub type FavoriteModel = entity::favorites::Model;
