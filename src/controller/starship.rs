use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::StarshipRepository,
    error::AppError,
    model::{
        api::ErrorDto,
        starship::{CreateStarshipDto, StarshipDto},
    },
    state::AppState,
};

pub const STARSHIP_TAG: &str = "Starships";

/// GET /starships - List all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All starships", body = [StarshipDto]),
    )
)]
pub async fn get_all_starships(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let starships = StarshipRepository::new(&state.db).get_all().await?;

    let dtos: Vec<StarshipDto> = starships.into_iter().map(StarshipDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /starships/{id} - Get a single starship by ID
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Starship found", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
    )
)]
pub async fn get_starship_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let starship = StarshipRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Starship not found".to_string()))?;

    Ok((StatusCode::OK, Json(StarshipDto::from(starship))))
}

/// POST /starships - Create a starship
#[utoipa::path(
    post,
    path = "/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 201, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
    )
)]
pub async fn create_starship(
    State(state): State<AppState>,
    payload: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload
        .map_err(|_| AppError::BadRequest("All fields are required".to_string()))?;

    let starship = StarshipRepository::new(&state.db)
        .create(dto.name, Some(dto.model), Some(dto.starship_class))
        .await?;

    Ok((StatusCode::CREATED, Json(StarshipDto::from(starship))))
}
