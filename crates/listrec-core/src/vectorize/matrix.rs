//! Dense row-major term-weight matrix

use serde::Serialize;

/// Dense matrix with one row per document and one column per term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl TermMatrix {
    /// All-zero matrix of the given shape
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![0.0; n_rows * n_cols],
        }
    }

    /// Build from equally sized rows; `None` when row lengths differ
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        Some(Self {
            n_rows,
            n_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Borrow row `i`
    ///
    /// Panics if `i >= n_rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n_cols + j]
    }

    /// Iterate over rows in document order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.n_rows).map(move |i| self.row(i))
    }

    /// Whether every weight in row `i` is zero
    pub fn is_zero_row(&self, i: usize) -> bool {
        self.row(i).iter().all(|w| *w == 0.0)
    }

    /// Scale every non-zero row to unit Euclidean length
    pub fn normalize_rows(&mut self) {
        for i in 0..self.n_rows {
            let row = self.row_mut(i);
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|w| *w /= norm);
            }
        }
    }
}
