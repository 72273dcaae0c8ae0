use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use catalog::CatalogSnapshot;
use pipeline::{Criteria, MovieView, derive_view};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// Request/Response types

/// Selector values of the list view, as sent by the browser
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub year: Option<String>,
    pub rating: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    pub movies: Vec<MovieView>,
    pub count: usize,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The full catalog: every movie, every genre and the precomputed
/// movie -> genre names mapping
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogSnapshot> {
    let snapshot = state.store.snapshot();
    tracing::debug!(movies = snapshot.movies.len(), "Serving catalog snapshot");
    Json(snapshot)
}

/// The catalog run through the list pipeline with the requested criteria
pub async fn get_view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> AppResult<Json<ViewResponse>> {
    let criteria = Criteria::from_selection(
        query.year.as_deref(),
        query.rating.as_deref(),
        query.genre.as_deref(),
    )?;

    let snapshot = state.store.snapshot();
    let movies = derive_view(&snapshot, &criteria);

    Ok(Json(ViewResponse {
        count: movies.len(),
        movies,
    }))
}

/// JSON 404 for any unknown route
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
