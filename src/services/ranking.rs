use thiserror::Error;

use crate::models::SimilarityMatrix;

/// Error types for the ranking engine
#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("Recommendation count must be at least 1, got {0}")]
    InvalidCount(usize),
    #[error("Query index {index} is outside a similarity matrix of size {size}")]
    QueryOutOfRange { index: usize, size: usize },
}

/// A candidate position paired with its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    pub index: usize,
    pub score: f64,
}

/// Returns the `count` positions most similar to `query`, best first
///
/// The query's own position is never returned, even when another candidate
/// ties its self-similarity. Equal scores keep matrix order. Asking for more
/// than the available candidates returns all of them.
pub fn top_similar(
    matrix: &SimilarityMatrix,
    query: usize,
    count: usize,
) -> Result<Vec<ScoredIndex>, RankingError> {
    if count < 1 {
        return Err(RankingError::InvalidCount(count));
    }

    let row = matrix.row(query).ok_or(RankingError::QueryOutOfRange {
        index: query,
        size: matrix.size(),
    })?;

    let mut candidates: Vec<ScoredIndex> = row
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != query)
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    // sort_by is stable, so ties stay in index order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(count);

    Ok(candidates)
}

/// Same as [`top_similar`] without the scores
pub fn rank_similar(
    matrix: &SimilarityMatrix,
    query: usize,
    count: usize,
) -> Result<Vec<usize>, RankingError> {
    Ok(top_similar(matrix, query, count)?
        .into_iter()
        .map(|candidate| candidate.index)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    fn abc_matrix() -> SimilarityMatrix {
        matrix(vec![
            vec![1.0, 0.8, 0.3],
            vec![0.8, 1.0, 0.5],
            vec![0.3, 0.5, 1.0],
        ])
    }

    #[test]
    fn test_ranks_by_descending_similarity() {
        assert_eq!(rank_similar(&abc_matrix(), 0, 2).unwrap(), vec![1, 2]);
        assert_eq!(rank_similar(&abc_matrix(), 2, 2).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_count_of_one_returns_best_match() {
        assert_eq!(rank_similar(&abc_matrix(), 1, 1).unwrap(), vec![0]);
    }

    #[test]
    fn test_count_beyond_candidates_is_truncated() {
        let ranked = rank_similar(&abc_matrix(), 0, 50).unwrap();
        assert_eq!(ranked, vec![1, 2]);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert_eq!(
            rank_similar(&abc_matrix(), 0, 0),
            Err(RankingError::InvalidCount(0))
        );
    }

    #[test]
    fn test_query_out_of_range() {
        assert_eq!(
            rank_similar(&abc_matrix(), 3, 1),
            Err(RankingError::QueryOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_ties_keep_index_order() {
        let m = matrix(vec![
            vec![1.0, 0.4, 0.7, 0.4, 0.7],
            vec![0.4, 1.0, 0.0, 0.0, 0.0],
            vec![0.7, 0.0, 1.0, 0.0, 0.0],
            vec![0.4, 0.0, 0.0, 1.0, 0.0],
            vec![0.7, 0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(rank_similar(&m, 0, 4).unwrap(), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_excludes_query_when_another_item_ties_self_similarity() {
        // Movie 0 and 1 have identical genres, so both score 1.0 against 1
        let m = matrix(vec![
            vec![1.0, 1.0, 0.2],
            vec![1.0, 1.0, 0.2],
            vec![0.2, 0.2, 1.0],
        ]);
        assert_eq!(rank_similar(&m, 1, 2).unwrap(), vec![0, 2]);
        assert_eq!(rank_similar(&m, 0, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_excludes_query_when_diagonal_is_not_maximal() {
        let m = matrix(vec![vec![0.1, 0.9], vec![0.9, 0.1]]);
        assert_eq!(rank_similar(&m, 0, 5).unwrap(), vec![1]);
    }

    #[test]
    fn test_result_length_and_ordering_properties() {
        let m = matrix(vec![
            vec![1.0, 0.2, 0.9, 0.5, 0.5, 0.1],
            vec![0.2, 1.0, 0.3, 0.8, 0.1, 0.6],
            vec![0.9, 0.3, 1.0, 0.2, 0.4, 0.4],
            vec![0.5, 0.8, 0.2, 1.0, 0.7, 0.3],
            vec![0.5, 0.1, 0.4, 0.7, 1.0, 0.9],
            vec![0.1, 0.6, 0.4, 0.3, 0.9, 1.0],
        ]);

        for query in 0..m.size() {
            for count in 1..=8 {
                let ranked = top_similar(&m, query, count).unwrap();
                assert_eq!(ranked.len(), count.min(m.size() - 1));
                assert!(ranked.iter().all(|c| c.index != query));
                for pair in ranked.windows(2) {
                    assert!(pair[0].score > pair[1].score
                        || (pair[0].score == pair[1].score && pair[0].index < pair[1].index));
                }
            }
        }
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let m = abc_matrix();
        assert_eq!(top_similar(&m, 1, 2).unwrap(), top_similar(&m, 1, 2).unwrap());
    }

    #[test]
    fn test_single_item_matrix_has_no_candidates() {
        let m = matrix(vec![vec![1.0]]);
        assert!(rank_similar(&m, 0, 3).unwrap().is_empty());
    }

    #[test]
    fn test_scores_are_reported() {
        let ranked = top_similar(&abc_matrix(), 0, 2).unwrap();
        assert_eq!(
            ranked,
            vec![
                ScoredIndex { index: 1, score: 0.8 },
                ScoredIndex { index: 2, score: 0.3 },
            ]
        );
    }
}
