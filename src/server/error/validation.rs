use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

#[derive(Error, Debug)]
pub enum ValidationError {
    /// A mandatory field is absent or empty.
    #[error("Required field is missing or empty")]
    MissingFields,
    /// A favorite request did not carry the owning user's ID.
    #[error("User ID is required")]
    MissingUserId,
    /// The request body could not be parsed for this operation.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A path segment expected to hold a numeric ID is not a number.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let msg = match self {
            Self::MissingFields => "Faltan datos",
            Self::MissingUserId => "Usuario Id requerido",
            Self::InvalidBody(_) => "Cuerpo de la solicitud inválido",
            Self::InvalidPath(_) => "Parámetro de ruta inválido",
        };

        message_response(StatusCode::BAD_REQUEST, msg)
    }
}

