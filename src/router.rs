//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`. The root path serves an auto-generated listing of all routes.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{self, sitemap},
    state::AppState,
};

/// Builds the application's HTTP router with all API endpoints, the root
/// sitemap, and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Listing of all registered routes
/// - `GET|POST /characters`, `GET /characters/{id}`
/// - `GET|POST /planets`, `GET /planets/{id}`
/// - `GET|POST /starships`, `GET /starships/{id}`
/// - `GET|POST /users`, `GET /users/{id}/favorites`
/// - `POST|DELETE /favorite/{kind}/{id}`
/// - `/api/docs` - Swagger UI; `/api/docs/openapi.json` - OpenAPI document
pub fn router() -> Router<AppState> {
    let (routes, api) = api_router();

    let sitemap_entries = sitemap::entries(&api);

    routes
        .route("/", get(move || async move { Json(sitemap_entries) }))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Registers every API endpoint and collects the OpenAPI document.
fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog API"), tags(
        (name = controller::character::CHARACTER_TAG, description = "Character catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship catalog routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite routes"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::character::get_all_characters,
            controller::character::create_character
        ))
        .routes(routes!(controller::character::get_character_by_id))
        .routes(routes!(
            controller::planet::get_all_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(
            controller::starship::get_all_starships,
            controller::starship::create_starship
        ))
        .routes(routes!(controller::starship::get_starship_by_id))
        .routes(routes!(
            controller::user::get_all_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts()
}
