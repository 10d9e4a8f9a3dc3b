//! Data access layer repositories.
//!
//! [`repository::EntityRepository`] is the store: a repository generic over the entity
//! kind offering get, list, filter, insert, update and delete. The per-kind repositories
//! build active models and express kind-specific lookups on top of it.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod repository;
pub mod user;
