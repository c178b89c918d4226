use std::collections::HashMap;

use thiserror::Error;

use crate::data::ArtifactError;
use crate::models::{Movie, MovieId};

/// Error types for catalog lookups
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Movie not found: {0}")]
    NotFound(String),
    #[error("Not enough rating data for collaborative filtering: {0}")]
    NotEnoughData(String),
    #[error("Position {position} is outside an index of size {size}")]
    PositionOutOfRange { position: usize, size: usize },
}

/// Bidirectional mapping between collaborative matrix columns and movie ids
///
/// Only movies with enough ratings to appear in the collaborative matrix are
/// present, so this is a subset of the catalog.
#[derive(Debug, Clone)]
pub struct ItemPositionIndex {
    ids: Vec<MovieId>,
    positions: HashMap<MovieId, usize>,
}

impl ItemPositionIndex {
    /// Builds the index from column order; ids must be unique
    pub fn new(ids: Vec<MovieId>) -> Result<Self, ArtifactError> {
        let mut positions = HashMap::with_capacity(ids.len());
        for (position, id) in ids.iter().enumerate() {
            if positions.insert(id.clone(), position).is_some() {
                return Err(ArtifactError::DuplicateItem(id.clone()));
            }
        }
        Ok(Self { ids, positions })
    }

    pub fn position(&self, id: &MovieId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id_at(&self, position: usize) -> Option<&MovieId> {
        self.ids.get(position)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Resolves titles to positions in the content and collaborative matrices
///
/// Titles are expected to be unique but this is not enforced: when two
/// records share a title, lookups resolve to the first one in catalog order.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    movies: Vec<Movie>,
    rows_by_title: HashMap<String, usize>,
    rows_by_id: HashMap<MovieId, usize>,
    items: ItemPositionIndex,
}

impl CatalogIndex {
    /// Builds the index, checking every collaborative item exists in the catalog
    pub fn new(movies: Vec<Movie>, items: ItemPositionIndex) -> Result<Self, ArtifactError> {
        let mut rows_by_title = HashMap::with_capacity(movies.len());
        let mut rows_by_id = HashMap::with_capacity(movies.len());

        for (row, movie) in movies.iter().enumerate() {
            rows_by_title.entry(movie.title.clone()).or_insert(row);
            rows_by_id.entry(movie.id.clone()).or_insert(row);
        }

        if let Some(unknown) = items.ids.iter().find(|id| !rows_by_id.contains_key(*id)) {
            return Err(ArtifactError::UnknownItem(unknown.clone()));
        }

        Ok(Self {
            movies,
            rows_by_title,
            rows_by_id,
            items,
        })
    }

    /// Row of the first movie whose title matches exactly
    pub fn resolve_content_index(&self, title: &str) -> Result<usize, CatalogError> {
        self.rows_by_title
            .get(title)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))
    }

    /// Collaborative matrix column of the movie with this title
    ///
    /// An unknown title is `NotFound`; a known title with no ratings-based
    /// position is `NotEnoughData`.
    pub fn resolve_collab_index(&self, title: &str) -> Result<usize, CatalogError> {
        let row = self.resolve_content_index(title)?;
        let id = &self.movies[row].id;
        self.items
            .position(id)
            .ok_or_else(|| CatalogError::NotEnoughData(title.to_string()))
    }

    /// Maps collaborative matrix columns back to titles, keeping input order
    pub fn positions_to_titles(&self, positions: &[usize]) -> Result<Vec<String>, CatalogError> {
        positions
            .iter()
            .map(|&position| {
                let id = self
                    .items
                    .id_at(position)
                    .ok_or(CatalogError::PositionOutOfRange {
                        position,
                        size: self.items.len(),
                    })?;
                // Every item id was checked against the catalog at build time
                let row = self.rows_by_id[id];
                Ok(self.movies[row].title.clone())
            })
            .collect()
    }

    /// Maps catalog rows to titles, keeping input order
    pub fn positions_to_titles_ordered(
        &self,
        rows: &[usize],
    ) -> Result<Vec<String>, CatalogError> {
        rows.iter()
            .map(|&row| {
                self.movies
                    .get(row)
                    .map(|movie| movie.title.clone())
                    .ok_or(CatalogError::PositionOutOfRange {
                        position: row,
                        size: self.movies.len(),
                    })
            })
            .collect()
    }

    /// Movies whose title contains `query`, ignoring case, in catalog order
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }

    pub fn get(&self, row: usize) -> Option<&Movie> {
        self.movies.get(row)
    }

    pub fn items(&self) -> &ItemPositionIndex {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
