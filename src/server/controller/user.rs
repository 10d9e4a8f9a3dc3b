use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::util::PathId,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users in creation order", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    user_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id.resolve(NotFoundError::User)?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// List a user's favorite characters and planets
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites, empty if there are none", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    user_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id.resolve(NotFoundError::User)?;

    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
