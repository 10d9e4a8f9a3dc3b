use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoriteRequestDto},
    server::{
        controller::util::{favorite_user_id, FavoriteRequestBody, PathId},
        error::{not_found::NotFoundError, Error},
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Character added to favorites", body = MessageDto),
        (status = 400, description = "Missing user ID or character already a favorite", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    people_id: PathId,
    payload: FavoriteRequestBody,
) -> Result<impl IntoResponse, Error> {
    let user_id = favorite_user_id(payload)?;
    let people_id = people_id.resolve(NotFoundError::Character)?;

    FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteTarget::Character(people_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Se añadió el personaje a favoritos")),
    ))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 400, description = "Missing user ID", body = MessageDto),
        (status = 404, description = "User not found or character not a favorite", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    people_id: PathId,
    payload: FavoriteRequestBody,
) -> Result<impl IntoResponse, Error> {
    let user_id = favorite_user_id(payload)?;
    let people_id = people_id.resolve(NotFoundError::Character)?;

    FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteTarget::Character(people_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Personaje eliminado de favoritos")),
    ))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "Missing user ID or planet already a favorite", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    planet_id: PathId,
    payload: FavoriteRequestBody,
) -> Result<impl IntoResponse, Error> {
    let user_id = favorite_user_id(payload)?;
    let planet_id = planet_id.resolve(NotFoundError::Planet)?;

    FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Se añadió el planeta a favoritos")),
    ))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 400, description = "Missing user ID", body = MessageDto),
        (status = 404, description = "User not found or planet not a favorite", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    planet_id: PathId,
    payload: FavoriteRequestBody,
) -> Result<impl IntoResponse, Error> {
    let user_id = favorite_user_id(payload)?;
    let planet_id = planet_id.resolve(NotFoundError::Planet)?;

    FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planeta eliminado de favoritos")),
    ))
}
