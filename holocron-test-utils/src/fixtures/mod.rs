//! Test fixture modules for database record creation.
//!
//! - `user` - User records
//! - `catalog` - Characters and planets
//! - `favorite` - Favorite links, including malformed rows
//! - `factory` - In-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
