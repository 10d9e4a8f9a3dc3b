//! Holocron: a REST API over Star Wars characters, planets and per-user favorites.

pub mod model;
pub mod server;
