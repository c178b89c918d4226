use serde::{Deserialize, Serialize};

use super::MovieId;

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Identifier shared with the ratings data
    pub id: MovieId,
    /// Display title, expected to be unique within the catalog
    pub title: String,
    /// Genre labels; only used by training, carried through for display
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Movie {
    /// Creates a new movie record
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie() {
        let movie = Movie::new(1_u64, "Toy Story (1995)", vec!["Animation".to_string()]);
        assert_eq!(movie.id, MovieId::Numeric(1));
        assert_eq!(movie.title, "Toy Story (1995)");
        assert_eq!(movie.genres, vec!["Animation"]);
    }

    #[test]
    fn test_text_id() {
        let movie = Movie::new("tt0133093", "The Matrix (1999)", Vec::new());
        assert_eq!(movie.id, MovieId::Text("tt0133093".to_string()));
        assert_eq!(movie.id.to_string(), "tt0133093");
    }

    #[test]
    fn test_genres_default_to_empty() {
        let movie: Movie = serde_json::from_str(r#"{"id": 7, "title": "Heat (1995)"}"#).unwrap();
        assert!(movie.genres.is_empty());
    }
}
