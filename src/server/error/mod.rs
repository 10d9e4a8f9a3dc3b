//! Error types for the Holocron server application.
//!
//! Client-facing failures are split into three categories, each in its own module:
//! validation (bad or incomplete request data), not found (a referenced record is
//! missing) and conflict (a favorite that already exists). Everything else is a server
//! fault. All errors implement `IntoResponse` and render as a `{ "msg": ... }` body.

pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{
        config::ConfigError, conflict::ConflictError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Main error type for the Holocron server application.
///
/// Aggregates the domain-specific error types and external library errors. `#[from]`
/// conversions allow `?` to be used across repositories, services and controllers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request data is missing or malformed.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced user, character, planet or favorite does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The request would duplicate an existing favorite.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Stored data violates an invariant the application relies on.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation errors and duplicate favorites
/// - 404 Not Found - Missing users, characters, planets or favorites
/// - 500 Internal Server Error - Everything else (logged, message not leaked)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// A JSON body Axum could not extract for the handler
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

/// Path parameters Axum could not extract for the handler
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidPath(rejection.body_text()).into()
    }
}

/// Builds a `{ "msg": ... }` response with the provided status.
pub(crate) fn message_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(MessageDto::new(msg))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        message_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error interno del servidor",
        )
    }
}
