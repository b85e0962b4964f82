//! Trivia endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{TriviaId, TriviaPayload};
use crate::models::TriviaResponse;
use crate::state::AppState;

/// GET /api/trivia - list all trivia in id order
async fn list_trivia(State(state): State<AppState>) -> Result<Json<Vec<TriviaResponse>>, ApiError> {
    let records = state.store().list().await?;
    Ok(Json(records.into_iter().map(TriviaResponse::from).collect()))
}

/// POST /api/trivia - create a new trivia entry
async fn create_trivia(
    State(state): State<AppState>,
    TriviaPayload(new): TriviaPayload,
) -> Result<(StatusCode, Json<TriviaResponse>), ApiError> {
    let record = state.store().insert(&new).await?;
    tracing::info!(id = record.id, "trivia created");

    Ok((StatusCode::CREATED, Json(TriviaResponse::from(record))))
}

/// GET /api/trivia/{id} - get a single trivia entry
async fn get_trivia(
    State(state): State<AppState>,
    TriviaId(id): TriviaId,
) -> Result<Json<TriviaResponse>, ApiError> {
    let record = state
        .store()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: "Trivia" })?;

    Ok(Json(TriviaResponse::from(record)))
}

/// Trivia routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/trivia", get(list_trivia).post(create_trivia))
        .route("/api/trivia/{id}", get(get_trivia))
}
