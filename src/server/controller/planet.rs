use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        controller::util::{json_body, PathId},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets in creation order", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let planet_id = planet_id.resolve(NotFoundError::Planet)?;

    let planet = PlanetService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing or empty field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db)
        .create_planet(json_body(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Update some or all fields of a planet
///
/// Absent or null fields keep their stored value. A supplied empty string is rejected.
#[utoipa::path(
    put,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet after the update", body = PlanetDto),
        (status = 400, description = "Supplied field is an empty string", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    planet_id: PathId,
    payload: Result<Json<UpdatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let planet_id = planet_id.resolve(NotFoundError::Planet)?;

    let planet = PlanetService::new(&state.db)
        .update_planet(planet_id, json_body(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    planet_id: PathId,
) -> Result<impl IntoResponse, Error> {
    let planet_id = planet_id.resolve(NotFoundError::Planet)?;

    PlanetService::new(&state.db).delete_planet(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planeta eliminado con éxito")),
    ))
}
