use crate::vectorize::TermMatrix;

/// Cosine similarity of two equally sized vectors; 0.0 if either is all zeros
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in vec_a.iter().zip(vec_b) {
        dot_product += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

/// Similarity of row `i` against every row of `matrix`, itself included
pub fn row_similarities(matrix: &TermMatrix, i: usize) -> Vec<f64> {
    let row = matrix.row(i);
    matrix.rows().map(|other| cosine_similarity(row, other)).collect()
}
