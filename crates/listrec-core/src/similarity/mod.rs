//! Top-k retrieval over a term-weight matrix
//!
//! For each row the scores against every row (itself included) are ordered
//! from most to least similar and the first entry is dropped as the self
//! match. Among exactly equal scores the row itself sorts first, then rows in
//! input order. For an all-zero row every score is 0.0, so the dropped entry
//! is simply the first of a full tie.

mod cosine;

pub use cosine::{cosine_similarity, row_similarities};

use crate::vectorize::TermMatrix;

/// Number of neighbors returned per item
pub const NEIGHBOR_COUNT: usize = 3;

/// A ranked neighbor of some row
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Row index of the neighbor
    pub index: usize,
    /// Cosine similarity (0.0 to 1.0)
    pub score: f64,
}

/// Selects the most similar other rows of a term-weight matrix
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker {
    k: usize,
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new(NEIGHBOR_COUNT)
    }
}

impl SimilarityRanker {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Indices of `scores` from highest to lowest score
    pub fn rank_order(scores: &[f64], self_index: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .total_cmp(&scores[a])
                .then_with(|| (b == self_index).cmp(&(a == self_index)))
                .then_with(|| a.cmp(&b))
        });
        order
    }

    /// The top `k` neighbors of row `i`, the first-ranked entry excluded
    pub fn neighbors(&self, matrix: &TermMatrix, i: usize) -> Vec<Neighbor> {
        let scores = row_similarities(matrix, i);
        Self::rank_order(&scores, i)
            .into_iter()
            .skip(1)
            .take(self.k)
            .map(|index| Neighbor {
                index,
                score: scores[index],
            })
            .collect()
    }

    /// Neighbors for every row, in row order
    pub fn rank_all(&self, matrix: &TermMatrix) -> Vec<Vec<Neighbor>> {
        (0..matrix.n_rows())
            .map(|i| self.neighbors(matrix, i))
            .collect()
    }
}
