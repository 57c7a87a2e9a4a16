use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteKind, FavoriteUserDto},
    },
    service::favorite::FavoriteService,
    state::AppState,
};

pub const FAVORITE_TAG: &str = "Favorites";

/// POST /favorite/{kind}/{id} - Add a catalog entity to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "Catalog kind"),
        ("id" = i32, Path, description = "Target entity ID"),
    ),
    request_body = FavoriteUserDto,
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Missing user id or already a favorite", body = ErrorDto),
        (status = 404, description = "User or target not found", body = ErrorDto),
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((kind, id)): Path<(FavoriteKind, i32)>,
    payload: Result<Json<FavoriteUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) =
        payload.map_err(|_| AppError::BadRequest("User id is required".to_string()))?;

    FavoriteService::new(&state.db).add(dto.user_id, kind, id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            msg: format!("{} added to favorites", kind.label()),
        }),
    ))
}

/// DELETE /favorite/{kind}/{id} - Remove a catalog entity from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "Catalog kind"),
        ("id" = i32, Path, description = "Target entity ID"),
    ),
    request_body = FavoriteUserDto,
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Missing user id or not a favorite", body = ErrorDto),
        (status = 404, description = "User or target not found", body = ErrorDto),
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((kind, id)): Path<(FavoriteKind, i32)>,
    payload: Result<Json<FavoriteUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) =
        payload.map_err(|_| AppError::BadRequest("User id is required".to_string()))?;

    FavoriteService::new(&state.db)
        .remove(dto.user_id, kind, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("{} removed from favorites", kind.label()),
        }),
    ))
}
