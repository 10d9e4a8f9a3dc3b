//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for users, the character and planet catalogs and
//! per-user favorites. Controllers extract path parameters and JSON bodies, call into the
//! service layer and map results to HTTP responses. Every handler is annotated for utoipa
//! so the router can publish an OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod util;
