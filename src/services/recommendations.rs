use crate::{
    data::ModelContext,
    error::AppResult,
    models::{Recommendation, RecommendationMode, Recommendations},
    services::{
        catalog::CatalogError,
        ranking::{top_similar, RankingError, ScoredIndex},
    },
};

/// Shown instead of a ranking when a movie has too few ratings
pub const NOT_ENOUGH_DATA_MESSAGE: &str = "Not enough data for collaborative filtering";

/// Recommends the `count` movies most similar to `title`
///
/// Content mode ranks against the genre similarity matrix over the whole
/// catalog. Collaborative mode ranks against the rating similarity matrix; a
/// movie that exists but has no rating-based position yields
/// [`Recommendations::NotEnoughData`] rather than an error. Unknown titles
/// and invalid counts are errors in both modes.
pub fn recommend(
    context: &ModelContext,
    title: &str,
    mode: RecommendationMode,
    count: usize,
) -> AppResult<Recommendations> {
    if count < 1 {
        return Err(RankingError::InvalidCount(count).into());
    }

    let catalog = &context.catalog;

    let recommendations = match mode {
        RecommendationMode::Content => {
            let query = catalog.resolve_content_index(title)?;
            let ranked = top_similar(&context.content, query, count)?;
            let titles = catalog.positions_to_titles_ordered(&indices(&ranked))?;
            ranked_titles(&ranked, titles)
        }
        RecommendationMode::Collaborative => {
            let query = match catalog.resolve_collab_index(title) {
                Ok(query) => query,
                Err(CatalogError::NotEnoughData(_)) => {
                    tracing::info!(title, "No collaborative data for movie");
                    return Ok(Recommendations::NotEnoughData {
                        message: NOT_ENOUGH_DATA_MESSAGE.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            };
            let ranked = top_similar(&context.collaborative, query, count)?;
            let titles = catalog.positions_to_titles(&indices(&ranked))?;
            ranked_titles(&ranked, titles)
        }
    };

    tracing::debug!(
        title,
        mode = %mode,
        requested = count,
        returned = recommendations.len(),
        "Ranked similar movies"
    );

    Ok(Recommendations::Ranked(recommendations))
}

fn indices(ranked: &[ScoredIndex]) -> Vec<usize> {
    ranked.iter().map(|candidate| candidate.index).collect()
}

fn ranked_titles(ranked: &[ScoredIndex], titles: Vec<String>) -> Vec<Recommendation> {
    ranked
        .iter()
        .zip(titles)
        .enumerate()
        .map(|(position, (candidate, title))| Recommendation {
            rank: position + 1,
            title,
            score: candidate.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ModelArtifact;
    use crate::error::AppError;
    use crate::models::{Movie, MovieId};

    fn context() -> ModelContext {
        let artifact = ModelArtifact {
            movies: vec![
                Movie::new(1_u64, "A", Vec::new()),
                Movie::new(2_u64, "B", Vec::new()),
                Movie::new(3_u64, "C", Vec::new()),
                Movie::new(4_u64, "D", Vec::new()),
            ],
            content_sim: vec![
                vec![1.0, 0.8, 0.3, 0.1],
                vec![0.8, 1.0, 0.5, 0.2],
                vec![0.3, 0.5, 1.0, 0.6],
                vec![0.1, 0.2, 0.6, 1.0],
            ],
            // Columns are D, A, B in that order; C has no ratings
            collab_sim: vec![
                vec![1.0, 0.2, 0.9],
                vec![0.2, 1.0, 0.4],
                vec![0.9, 0.4, 1.0],
            ],
            item_ids: vec![
                MovieId::Numeric(4),
                MovieId::Numeric(1),
                MovieId::Numeric(2),
            ],
            auxiliary: None,
        };
        ModelContext::from_artifact(artifact).unwrap()
    }

    #[test]
    fn test_content_recommendations() {
        let result = recommend(&context(), "A", RecommendationMode::Content, 2).unwrap();
        assert_eq!(result.titles(), vec!["B", "C"]);

        let Recommendations::Ranked(items) = result else {
            panic!("expected ranked result");
        };
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[0].score, 0.8);
        assert_eq!(items[1].rank, 2);
    }

    #[test]
    fn test_collaborative_recommendations_keep_rank_order() {
        // B's row is [0.9 (D), 0.4 (A)]; D sorts after A in the catalog
        let result = recommend(&context(), "B", RecommendationMode::Collaborative, 5).unwrap();
        assert_eq!(result.titles(), vec!["D", "A"]);
    }

    #[test]
    fn test_collaborative_without_ratings_degrades() {
        let result = recommend(&context(), "C", RecommendationMode::Collaborative, 5).unwrap();
        assert_eq!(
            result,
            Recommendations::NotEnoughData {
                message: NOT_ENOUGH_DATA_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_unknown_title_is_not_degraded() {
        for mode in [RecommendationMode::Content, RecommendationMode::Collaborative] {
            let result = recommend(&context(), "Z", mode, 5);
            assert!(matches!(
                result,
                Err(AppError::Catalog(CatalogError::NotFound(_)))
            ));
        }
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let result = recommend(&context(), "C", RecommendationMode::Collaborative, 0);
        assert!(matches!(
            result,
            Err(AppError::Ranking(RankingError::InvalidCount(0)))
        ));
    }

    #[test]
    fn test_count_larger_than_catalog() {
        let result = recommend(&context(), "D", RecommendationMode::Content, 20).unwrap();
        assert_eq!(result.titles(), vec!["C", "B", "A"]);
    }
}
