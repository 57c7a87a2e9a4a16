use axum::{
    body::{to_bytes, Body},
    extract::{rejection::JsonRejection, FromRequest, Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    controller,
    model::{
        character::CreateCharacterDto,
        favorite::{FavoriteKind, FavoriteUserDto},
        planet::CreatePlanetDto,
        starship::CreateStarshipDto,
        user::CreateUserDto,
    },
    state::AppState,
};


/// Builds application state backed by a fresh in-memory database with all
/// tables created.
async fn test_state() -> AppState {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();

    AppState::new(test.db.unwrap())
}

/// Runs a request body through the `Json` extractor to produce the same
/// rejection a handler sees for malformed or incomplete payloads.
async fn extract_json<T>(body: &str) -> Result<Json<T>, JsonRejection>
where
    T: serde::de::DeserializeOwned + 'static,
{
    let request = Request::builder()
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<T>::from_request(request, &()).await
}

/// Reads a response into its status code and JSON body.
async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}
