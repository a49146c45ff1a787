//! Gaussian elimination to reduced row-echelon form.
//!
//! Reduction runs in two phases over a column-major [`Matrix`]:
//!
//! 1. Forward elimination with partial pivoting brings the matrix to row-echelon form.
//! 2. Backward elimination, from the last row upwards, clears every entry above each pivot
//!    and normalises the pivot to one.
//!
//! Every comparison against zero (or one) uses a fixed absolute tolerance taken from
//! [`RowReduceParams`]. There is no scaling by the matrix norm.

use crate::matrix::Matrix;

/// Default absolute tolerance below which an entry is treated as zero.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Parameters for row reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowReduceParams {
    /// Absolute tolerance below which an entry is treated as zero.
    pub tolerance: f32,
}

impl Default for RowReduceParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Matrix {
    /// Reduce the matrix in place to reduced row-echelon form with the default tolerance.
    ///
    /// The shape never changes and the reduction cannot fail.
    pub fn reduce(&mut self) {
        self.reduce_with(&RowReduceParams::default());
    }

    /// Reduce the matrix in place to reduced row-echelon form.
    pub fn reduce_with(&mut self, params: &RowReduceParams) {
        self.to_echelon(params);
        self.back_substitute(params);
    }

    /// Returns the reduced row-echelon form of the matrix, leaving `self` untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pointview_linalg::{Layout, Matrix};
    ///
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0], Layout::RowMajor).unwrap();
    /// let r = m.rref();
    /// assert!((r.get(0, 0).unwrap() - 1.0).abs() < 1e-5);
    /// assert!(r.get(0, 1).unwrap().abs() < 1e-5);
    /// ```
    pub fn rref(&self) -> Matrix {
        self.rref_with(&RowReduceParams::default())
    }

    /// Returns the reduced row-echelon form computed with `params`.
    pub fn rref_with(&self, params: &RowReduceParams) -> Matrix {
        let mut reduced = self.clone();
        reduced.reduce_with(params);
        reduced
    }

    /// Forward elimination with partial pivoting, leaving the matrix in row-echelon form.
    ///
    /// Pivot rows are not normalised. A column whose remaining entries are all within the
    /// tolerance of zero is skipped and becomes a free column.
    pub fn to_echelon(&mut self, params: &RowReduceParams) {
        let eps = params.tolerance;
        let (m, n) = self.shape();
        let (mut h, mut k) = (0, 0);

        while h < m && k < n {
            // partial pivot: largest magnitude in column k among rows h..m
            let column = &self.values[k];
            let mut i_max = h;
            for i in h + 1..m {
                if column[i].abs() > column[i_max].abs() {
                    i_max = i;
                }
            }

            if column[i_max].abs() < eps {
                log::trace!("no pivot in column {k} below row {h}");
                k += 1;
                continue;
            }

            log::trace!("pivot ({i_max}, {k}) = {}", column[i_max]);
            self.swap_rows(h, i_max);

            let pivot = self.values[k][h];
            for i in h + 1..m {
                let f = self.values[k][i] / pivot;
                self.values[k][i] = 0.0;
                for j in k + 1..n {
                    let above = self.values[j][h];
                    self.values[j][i] -= f * above;
                }
            }

            h += 1;
            k += 1;
        }
    }

    // Backward phase. The pivot of each row is found by scanning left to right from
    // column 0 for the first entry outside the tolerance.
    fn back_substitute(&mut self, params: &RowReduceParams) {
        let eps = params.tolerance;
        let n = self.cols();

        for h in (0..self.rows()).rev() {
            let Some(k) = (0..n).find(|&j| self.values[j][h].abs() > eps) else {
                continue;
            };

            let pivot = self.values[k][h];
            for i in 0..h {
                let f = self.values[k][i] / pivot;
                self.values[k][i] = 0.0;
                for j in k + 1..n {
                    let below = self.values[j][h];
                    self.values[j][i] -= f * below;
                }
            }

            if (pivot - 1.0).abs() > eps {
                for j in k + 1..n {
                    self.values[j][h] /= pivot;
                }
                self.values[k][h] = 1.0;
            }
        }
    }

    /// Number of non-zero rows in the reduced form, using the default tolerance.
    pub fn rank(&self) -> usize {
        self.rank_with(&RowReduceParams::default())
    }

    /// Number of non-zero rows in the reduced form computed with `params`.
    pub fn rank_with(&self, params: &RowReduceParams) -> usize {
        self.rref_with(params).pivot_columns(params).len()
    }

    /// Column index of the leading entry of every non-zero row, top to bottom.
    ///
    /// Meaningful on a matrix already in (reduced) row-echelon form.
    pub fn pivot_columns(&self, params: &RowReduceParams) -> Vec<usize> {
        (0..self.rows())
            .filter_map(|i| (0..self.cols()).find(|&j| self.values[j][i].abs() > params.tolerance))
            .collect()
    }

    // O(cols): one swap per stored column.
    fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.values.iter_mut().for_each(|c| c.swap(a, b));
        }
    }
}
