use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::PlanetRepository,
    error::AppError,
    model::{
        api::ErrorDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    state::AppState,
};

pub const PLANET_TAG: &str = "Planets";

/// GET /planets - List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = [PlanetDto]),
    )
)]
pub async fn get_all_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetRepository::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /planets/{id} - Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
    )
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}

/// POST /planets - Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
    )
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload
        .map_err(|_| AppError::BadRequest("All fields are required".to_string()))?;

    let planet = PlanetRepository::new(&state.db)
        .create(
            dto.name,
            Some(dto.climate),
            Some(dto.terrain),
            dto.population,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PlanetDto::from(planet))))
}
