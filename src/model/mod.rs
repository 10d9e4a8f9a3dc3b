//! Wire-level data transfer objects shared by controllers and services.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
