use std::path::Path;

use chrono::{DateTime, Utc};

use crate::models::SimilarityMatrix;
use crate::services::catalog::{CatalogIndex, ItemPositionIndex};

use super::{load_artifact, ArtifactError, ModelArtifact};

/// Everything needed to answer recommendation requests
///
/// Built once at startup and shared read-only, typically behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ModelContext {
    pub catalog: CatalogIndex,
    pub content: SimilarityMatrix,
    pub collaborative: SimilarityMatrix,
    pub loaded_at: DateTime<Utc>,
}

impl ModelContext {
    /// Validates an artifact and indexes it
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        let ModelArtifact {
            movies,
            content_sim,
            collab_sim,
            item_ids,
            auxiliary: _,
        } = artifact;

        check_rows("content", content_sim.len(), movies.len())?;
        check_rows("collaborative", collab_sim.len(), item_ids.len())?;

        let content = SimilarityMatrix::from_rows(content_sim).map_err(|source| {
            ArtifactError::Matrix {
                matrix: "content",
                source,
            }
        })?;
        let collaborative = SimilarityMatrix::from_rows(collab_sim).map_err(|source| {
            ArtifactError::Matrix {
                matrix: "collaborative",
                source,
            }
        })?;

        let items = ItemPositionIndex::new(item_ids)?;
        let catalog = CatalogIndex::new(movies, items)?;

        Ok(Self {
            catalog,
            content,
            collaborative,
            loaded_at: Utc::now(),
        })
    }

    /// Loads and validates the artifact at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let context = Self::from_artifact(load_artifact(path)?)?;

        tracing::info!(
            movies = context.catalog.len(),
            collaborative_items = context.collaborative.size(),
            "Model artifact loaded"
        );

        Ok(context)
    }
}

fn check_rows(matrix: &'static str, found: usize, expected: usize) -> Result<(), ArtifactError> {
    if found != expected {
        return Err(ArtifactError::DimensionMismatch {
            matrix,
            expected,
            found,
        });
    }
    Ok(())
}
