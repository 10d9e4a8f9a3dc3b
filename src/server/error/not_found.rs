use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::message_response, model::favorite::FavoriteTarget};

/// IDs are kept as requested, which may lie outside the range of stored IDs.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("User ID {0} not found")]
    User(i64),
    #[error("Character ID {0} not found")]
    Character(i64),
    #[error("Planet ID {0} not found")]
    Planet(i64),
    /// The user exists but has no favorite for this target.
    #[error("User ID {user_id} has no favorite for {target}")]
    Favorite {
        user_id: i32,
        target: FavoriteTarget,
    },
}

impl NotFoundError {
    /// Not-found error for the target of a favorite.
    pub fn target(target: FavoriteTarget) -> Self {
        match target {
            FavoriteTarget::Character(id) => Self::Character(id.into()),
            FavoriteTarget::Planet(id) => Self::Planet(id.into()),
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let msg = match self {
            Self::User(_) => "Usuario no encontrado",
            Self::Character(_) => "Personaje no encontrado",
            Self::Planet(_) => "Planeta no encontrado",
            Self::Favorite {
                target: FavoriteTarget::Character(_),
                ..
            } => "El personaje no está en favoritos",
            Self::Favorite {
                target: FavoriteTarget::Planet(_),
                ..
            } => "El planeta no está en favoritos",
        };

        message_response(StatusCode::NOT_FOUND, msg)
    }
}
