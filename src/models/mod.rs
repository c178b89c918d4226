use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod movie;
pub mod similarity;

pub use movie::Movie;
pub use similarity::SimilarityMatrix;

/// Identifier for a movie, as assigned by the ratings dataset
///
/// Training pipelines emit either numeric ids (MovieLens `movieId`) or string
/// ids, so both are accepted and compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Numeric(u64),
    Text(String),
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieId::Numeric(id) => write!(f, "{}", id),
            MovieId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId::Numeric(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId::Text(id.to_string())
    }
}

/// Which similarity source drives a recommendation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    /// Genre-based similarity over the full catalog
    #[default]
    Content,
    /// Rating-based similarity over movies with enough ratings
    Collaborative,
}

impl Display for RecommendationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationMode::Content => write!(f, "content"),
            RecommendationMode::Collaborative => write!(f, "collaborative"),
        }
    }
}

/// A single ranked recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// 1-based position in the ranking
    pub rank: usize,
    pub title: String,
    /// Similarity to the query movie
    pub score: f64,
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// Movies ordered from most to least similar
    Ranked(Vec<Recommendation>),
    /// The query movie has no collaborative signal
    NotEnoughData { message: String },
}

impl Recommendations {
    /// Number of ranked movies (zero for a degraded result)
    pub fn len(&self) -> usize {
        match self {
            Recommendations::Ranked(items) => items.len(),
            Recommendations::NotEnoughData { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Titles in rank order, or the placeholder message as a single entry
    pub fn titles(&self) -> Vec<String> {
        match self {
            Recommendations::Ranked(items) => items.iter().map(|r| r.title.clone()).collect(),
            Recommendations::NotEnoughData { message } => vec![message.clone()],
        }
    }
}
