use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::UserRepository,
    error::AppError,
    model::{
        api::ErrorDto,
        character::CharacterDto,
        favorite::FavoritesDto,
        planet::PlanetDto,
        starship::StarshipDto,
        user::{CreateUserDto, UserDto},
    },
    service::favorite::FavoriteService,
    state::AppState,
};

pub const USER_TAG: &str = "Users";

/// GET /users - List all users
///
/// Passwords never appear in the serialized form.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = [UserDto]),
    )
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserRepository::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /users - Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload
        .map_err(|_| AppError::BadRequest("All fields are required".to_string()))?;

    let user = UserRepository::new(&state.db)
        .create(dto.email, dto.password, dto.first_name, dto.last_name)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// GET /users/{id}/favorites - List a user's favorites grouped by kind
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
    )
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_user_favorites(id).await?;

    let dto = FavoritesDto {
        characters: favorites
            .characters
            .into_iter()
            .map(CharacterDto::from)
            .collect(),
        planets: favorites.planets.into_iter().map(PlanetDto::from).collect(),
        starships: favorites
            .starships
            .into_iter()
            .map(StarshipDto::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
