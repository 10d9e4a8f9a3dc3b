//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron API: configuration,
//! HTTP routing and controllers, the service layer holding the business rules, and the
//! data layer persisting users, characters, planets and favorites through SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
