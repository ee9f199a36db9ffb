use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{handlers::FooApiError, models::FooData, startup::AppState};

/// `GET /foo/:id`
pub async fn get_foo_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FooData>, FooApiError> {
    tracing::info!(foo_id = %id, "Fetching foo record");

    let foo = state
        .foo_service
        .get_foo_data(&id)
        .await
        .map_err(FooApiError::from_lookup)?;

    Ok(Json(foo))
}

/// `POST /foo`. Every failure is reported as terminal.
pub async fn save_foo_data(
    State(state): State<AppState>,
    Json(payload): Json<FooData>,
) -> Result<(StatusCode, Json<FooData>), FooApiError> {
    tracing::info!(foo_id = %payload.id, "Saving foo record");

    let saved = state
        .foo_service
        .save_foo_data(payload)
        .await
        .map_err(FooApiError::terminal)?;

    Ok((StatusCode::CREATED, Json(saved)))
}
