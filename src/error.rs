use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::data::ArtifactError;
use crate::services::{CatalogError, RankingError};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error("Model artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Catalog(CatalogError::NotEnoughData(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Ranking(RankingError::InvalidCount(_)) | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Catalog(CatalogError::PositionOutOfRange { .. })
            | AppError::Ranking(RankingError::QueryOutOfRange { .. })
            | AppError::Artifact(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
