use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{similarity::MatrixError, Movie, MovieId};

/// Problems with the trained model artifact, all detected at load time
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {matrix} similarity matrix: {source}")]
    Matrix {
        matrix: &'static str,
        #[source]
        source: MatrixError,
    },

    #[error("{matrix} similarity matrix has {found} rows, expected {expected}")]
    DimensionMismatch {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Movie id {0} appears more than once in the item index")]
    DuplicateItem(MovieId),

    #[error("Movie id {0} in the item index is not in the catalog")]
    UnknownItem(MovieId),
}

/// Output of the offline training step
///
/// `content_sim` rows follow `movies` order. `collab_sim` rows follow
/// `item_ids` order, which lists only the movies with enough ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub movies: Vec<Movie>,
    pub content_sim: Vec<Vec<f64>>,
    pub collab_sim: Vec<Vec<f64>>,
    pub item_ids: Vec<MovieId>,
    /// Decomposition state kept by training; not used for ranking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<serde_json::Value>,
}

/// Reads a JSON model artifact from disk
///
/// Only parses; structural checks happen when building a
/// [`ModelContext`](super::ModelContext).
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ArtifactError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading model artifact");

    let file = File::open(path)?;
    let artifact = serde_json::from_reader(BufReader::new(file))?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_artifact_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "movies": [
                    {{"id": 1, "title": "Toy Story (1995)", "genres": ["Animation"]}},
                    {{"id": 2, "title": "Jumanji (1995)"}}
                ],
                "content_sim": [[1.0, 0.2], [0.2, 1.0]],
                "collab_sim": [[1.0]],
                "item_ids": [2],
                "auxiliary": {{"n_components": 50}}
            }}"#
        )
        .unwrap();

        let artifact = load_artifact(file.path()).unwrap();
        assert_eq!(artifact.movies.len(), 2);
        assert_eq!(artifact.item_ids, vec![MovieId::Numeric(2)]);
        assert!(artifact.auxiliary.is_some());
    }

    #[test]
    fn test_missing_file() {
        let result = load_artifact("/nonexistent/models.json");
        assert!(matches!(result, Err(ArtifactError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"movies\": [").unwrap();

        let result = load_artifact(file.path());
        assert!(matches!(result, Err(ArtifactError::Parse(_))));
    }
}
