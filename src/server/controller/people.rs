use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        people::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::util::{json_body, PathId},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::people::PeopleService,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// List all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All characters in creation order", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PeopleService::new(&state.db).list_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(("people_id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    people_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let people_id = people_id.resolve(NotFoundError::Character)?;

    let character = PeopleService::new(&state.db)
        .get_character(people_id)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing or empty field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let character = PeopleService::new(&state.db)
        .create_character(json_body(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Update some or all fields of a character
///
/// Absent or null fields keep their stored value. A supplied empty string is rejected.
#[utoipa::path(
    put,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character after the update", body = CharacterDto),
        (status = 400, description = "Supplied field is an empty string", body = MessageDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    people_id: PathId,
    payload: Result<Json<UpdateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let people_id = people_id.resolve(NotFoundError::Character)?;

    let character = PeopleService::new(&state.db)
        .update_character(people_id, json_body(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character
///
/// Favorites pointing at the character are kept and no longer listed.
#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(("people_id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    people_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let people_id = people_id.resolve(NotFoundError::Character)?;

    PeopleService::new(&state.db)
        .delete_character(people_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Personaje eliminado con éxito")),
    ))
}
