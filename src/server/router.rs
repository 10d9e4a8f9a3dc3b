//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/api/docs` and `/` lists every registered path.

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

static DOCS_PATH: &str = "/api/docs";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap listing every registered path
/// - `GET /users`, `GET /users/{user_id}`, `GET /users/{user_id}/favorites`
/// - `GET|POST /people`, `GET|PUT|DELETE /people/{people_id}`
/// - `GET|POST /planets`, `GET|PUT|DELETE /planets/{planet_id}`
/// - `POST|DELETE /favorite/people/{people_id}`, `POST|DELETE /favorite/planet/{planet_id}`
///
/// Cross-origin requests are allowed from any origin and every request is traced.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User and favorite listing routes"),
        (name = controller::people::PEOPLE_TAG, description = "Character catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::list_user_favorites))
        .routes(routes!(
            controller::people::list_people,
            controller::people::create_character
        ))
        .routes(routes!(
            controller::people::get_character,
            controller::people::update_character,
            controller::people::delete_character
        ))
        .routes(routes!(
            controller::planet::list_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts();

    let sitemap = sitemap(&api);

    routes
        .route("/", get(move || async move { Json(sitemap) }))
        .merge(SwaggerUi::new(DOCS_PATH).url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Paths of the OpenAPI document plus the sitemap itself and the docs
fn sitemap(api: &utoipa::openapi::OpenApi) -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(api.paths.paths.keys().cloned())
        .chain(std::iter::once(DOCS_PATH.to_string()))
        .collect()
}
