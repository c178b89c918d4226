use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Movie, MovieId, Recommendation, RecommendationMode, Recommendations},
    services::recommendations,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub movies: usize,
    pub collaborative_items: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            genres: movie.genres.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    #[serde(default)]
    pub mode: RecommendationMode,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub mode: RecommendationMode,
    pub recommendations: Vec<Recommendation>,
    /// Set instead of a ranking when collaborative data is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationResponse {
    fn new(query: String, mode: RecommendationMode, result: Recommendations) -> Self {
        let (recommendations, message) = match result {
            Recommendations::Ranked(items) => (items, None),
            Recommendations::NotEnoughData { message } => (Vec::new(), Some(message)),
        };
        Self {
            query,
            mode,
            recommendations,
            message,
        }
    }
}

// Handlers

/// Health check endpoint, reporting the loaded model's size
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        movies: state.model.catalog.len(),
        collaborative_items: state.model.catalog.items().len(),
        loaded_at: state.model.loaded_at,
    })
}

/// Get every movie in catalog order
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<MovieResponse>> {
    let movies = state
        .model
        .catalog
        .movies()
        .iter()
        .map(MovieResponse::from)
        .collect();
    Json(movies)
}

/// Search movies by title
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<MovieResponse>> {
    let movies = state
        .model
        .catalog
        .search(&params.q)
        .into_iter()
        .map(MovieResponse::from)
        .collect();
    Json(movies)
}

/// Recommend movies similar to a title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let count = params.count.unwrap_or(state.default_count);

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        mode = %params.mode,
        count,
        "Processing recommendation request"
    );

    let result = recommendations::recommend(&state.model, &params.title, params.mode, count)?;

    tracing::info!(
        request_id = %request_id,
        returned = result.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse::new(
        params.title,
        params.mode,
        result,
    )))
}
