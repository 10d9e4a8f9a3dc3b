use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::message_response, model::favorite::FavoriteTarget};

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Favorite for {0} already exists")]
    DuplicateFavorite(FavoriteTarget),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let msg = match self {
            Self::DuplicateFavorite(FavoriteTarget::Character(_)) => {
                "El personaje ya está en favoritos"
            }
            Self::DuplicateFavorite(FavoriteTarget::Planet(_)) => "El planeta ya está en favoritos",
        };

        message_response(StatusCode::BAD_REQUEST, msg)
    }
}
