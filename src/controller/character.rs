use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::CharacterRepository,
    error::AppError,
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    state::AppState,
};

pub const CHARACTER_TAG: &str = "Characters";

/// GET /characters - List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = [CharacterDto]),
    )
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterRepository::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /characters/{id} - Get a single character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
    )
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}

/// POST /characters - Create a character
///
/// Any absent body, malformed JSON, or missing required field is a single
/// validation failure from the client's point of view.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
    )
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload
        .map_err(|_| AppError::BadRequest("All fields are required".to_string()))?;

    let character = CharacterRepository::new(&state.db)
        .create(
            dto.name,
            Some(dto.species),
            Some(dto.description),
            Some(dto.homeworld),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(CharacterDto::from(character))))
}
