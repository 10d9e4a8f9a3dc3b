//! Server application models and type definitions.
//!
//! This module contains the application state shared by every handler, database model
//! type aliases, and the domain representation of a favorite. The domain types bridge
//! the gap between the storage layout of the `favorites` table and the services that
//! enforce its invariants.

pub mod app;
pub mod db;
pub mod favorite;
