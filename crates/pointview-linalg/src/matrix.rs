use std::fmt;

use rand::Rng;

use crate::{error::LinalgError, vector::Vector};

/// Order in which flat or nested literal data is read into a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Consecutive entries (or inner arrays) run along a row.
    RowMajor,
    /// Consecutive entries (or inner arrays) run down a column.
    ColMajor,
}

/// A dense `rows x cols` matrix of `f32` stored column by column.
///
/// Column access is O(1) and borrows the stored column. Row access has to gather one entry
/// from every column and is O(cols).
///
/// The shape is fixed for the lifetime of the value. Operations that change the shape, like
/// [`Matrix::add_column`], return a new matrix. The in-place operations ([`Matrix::accumulate`],
/// [`Matrix::subtract`], [`Matrix::vectorize`] and the row reducer) only rewrite entries.
///
/// The type is `Send` and `Sync`, but a single instance must not be mutated from several
/// threads without external synchronisation.
///
/// # Examples
///
/// ```rust
/// use pointview_linalg::{Layout, Matrix};
///
/// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0], Layout::RowMajor).unwrap();
/// assert_eq!(m.get(0, 1), Ok(2.0));
/// assert_eq!(m.column(1).unwrap(), &[2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    // values[col][row]
    pub(crate) values: Vec<Vec<f32>>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if `rows` or `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            values: vec![vec![0.0; rows]; cols],
        })
    }

    /// Create a `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Self, LinalgError> {
        Self::from_fn(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Create a matrix whose entry at `(row, col)` is `f(row, col)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self, LinalgError> {
        check_shape(rows, cols)?;
        let values = (0..cols)
            .map(|j| (0..rows).map(|i| f(i, j)).collect())
            .collect();
        Ok(Self { rows, cols, values })
    }

    /// Create a matrix from a flat list of entries read in the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] for an empty shape and
    /// [`LinalgError::SizeMismatch`] if `data.len() != rows * cols`.
    pub fn from_slice(
        rows: usize,
        cols: usize,
        data: &[f32],
        layout: Layout,
    ) -> Result<Self, LinalgError> {
        check_shape(rows, cols)?;
        // an overflowing shape can never match, report it as usize::MAX entries
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(LinalgError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Self::from_fn(rows, cols, |i, j| match layout {
            Layout::RowMajor => data[i * cols + j],
            Layout::ColMajor => data[j * rows + i],
        })
    }

    /// Create a matrix from nested arrays, each one a row or a column depending on `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if no arrays (or only empty ones) are given and
    /// [`LinalgError::NonUniformLength`] if the arrays differ in length.
    pub fn from_arrays<A: AsRef<[f32]>>(arrays: &[A], layout: Layout) -> Result<Self, LinalgError> {
        let inner = arrays.first().map_or(0, |a| a.as_ref().len());
        if let Some((index, a)) = arrays
            .iter()
            .enumerate()
            .find(|(_, a)| a.as_ref().len() != inner)
        {
            return Err(LinalgError::NonUniformLength {
                index,
                expected: inner,
                actual: a.as_ref().len(),
            });
        }

        match layout {
            Layout::ColMajor => {
                check_shape(inner, arrays.len())?;
                Ok(Self {
                    rows: inner,
                    cols: arrays.len(),
                    values: arrays.iter().map(|c| c.as_ref().to_vec()).collect(),
                })
            }
            Layout::RowMajor => {
                Self::from_fn(arrays.len(), inner, |i, j| arrays[i].as_ref()[j])
            }
        }
    }

    // fixed-size shapes are checked at the call site, R and C must be non-zero
    pub(crate) fn from_cols_array<const R: usize, const C: usize>(columns: [[f32; R]; C]) -> Self {
        Self {
            rows: R,
            cols: C,
            values: columns.iter().map(|c| c.to_vec()).collect(),
        }
    }

    /// Create a matrix from a list of columns. Accepts arrays, slices or [`Vector`]s.
    pub fn from_columns<C: AsRef<[f32]>>(columns: &[C]) -> Result<Self, LinalgError> {
        Self::from_arrays(columns, Layout::ColMajor)
    }

    /// Create a matrix from a list of rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, LinalgError> {
        Self::from_arrays(rows, Layout::RowMajor)
    }

    /// Create a matrix with every entry drawn uniformly from `[0, 1)` using the thread RNG.
    pub fn random(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::random_with_rng(rows, cols, &mut rand::rng())
    }

    /// Create a matrix with every entry drawn uniformly from `[0, 1)` using `rng`.
    pub fn random_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        Self::from_fn(rows, cols, |_, _| rng.random::<f32>())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, LinalgError> {
        self.check_row(row)?;
        Ok(self.column(col)?[row])
    }

    /// Overwrite the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), LinalgError> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.values[col][row] = value;
        Ok(())
    }

    /// Borrow column `col` as a slice of length `rows()`.
    pub fn column(&self, col: usize) -> Result<&[f32], LinalgError> {
        self.values
            .get(col)
            .map(Vec::as_slice)
            .ok_or_else(|| LinalgError::index_out_of_bounds(col, self.cols))
    }

    /// Copy column `col` into a new [`Vector`].
    pub fn column_vector(&self, col: usize) -> Result<Vector, LinalgError> {
        self.column(col).map(Vector::from_slice)
    }

    /// Install `column` as column `col`.
    ///
    /// The vector's storage is moved into the matrix without copying.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] for a bad index and
    /// [`LinalgError::DimensionMismatch`] if the column length is not `rows()`.
    pub fn set_column(&mut self, col: usize, column: impl Into<Vector>) -> Result<(), LinalgError> {
        self.check_col(col)?;
        let column = column.into();
        if column.len() != self.rows {
            return Err(LinalgError::dimension_mismatch(
                "column length must equal the number of rows",
                &[self.rows],
                &[column.len()],
            ));
        }
        self.values[col] = column.into_vec();
        Ok(())
    }

    /// Copy row `row` into a new [`Vector`]. This is O(cols).
    pub fn row(&self, row: usize) -> Result<Vector, LinalgError> {
        self.check_row(row)?;
        Ok(self.values.iter().map(|c| c[row]).collect::<Vec<_>>().into())
    }

    /// Overwrite row `row` with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] for a bad index and
    /// [`LinalgError::DimensionMismatch`] if the row length is not `cols()`.
    pub fn set_row(&mut self, row: usize, values: impl AsRef<[f32]>) -> Result<(), LinalgError> {
        self.check_row(row)?;
        let values = values.as_ref();
        if values.len() != self.cols {
            return Err(LinalgError::dimension_mismatch(
                "row length must equal the number of columns",
                &[self.cols],
                &[values.len()],
            ));
        }
        for (c, &x) in self.values.iter_mut().zip(values) {
            c[row] = x;
        }
        Ok(())
    }

    /// Iterate over the columns in order.
    pub fn iter_columns(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.values.iter().map(Vec::as_slice)
    }

    /// Returns a new matrix with `column` appended after the existing columns.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the column length is not `rows()`.
    pub fn add_column(&self, column: impl AsRef<[f32]>) -> Result<Matrix, LinalgError> {
        let column = column.as_ref();
        if column.len() != self.rows {
            return Err(LinalgError::dimension_mismatch(
                "appended column length must equal the number of rows",
                &[self.rows],
                &[column.len()],
            ));
        }
        let mut values = Vec::with_capacity(self.cols + 1);
        values.extend(self.values.iter().cloned());
        values.push(column.to_vec());
        Ok(Self {
            rows: self.rows,
            cols: self.cols + 1,
            values,
        })
    }

    /// Returns `a + b` as a new matrix.
    pub fn sum(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
        let mut result = a.clone();
        result.accumulate(b)?;
        Ok(result)
    }

    /// Returns `a - b` as a new matrix.
    pub fn difference(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
        let mut result = a.clone();
        result.subtract(b)?;
        Ok(result)
    }

    /// In-place `self += other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ. `self` is not modified.
    pub fn accumulate(&mut self, other: &Matrix) -> Result<(), LinalgError> {
        self.zip_apply(other, "cannot add matrices of different shapes", |a, b| a + b)
    }

    /// In-place `self -= other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ. `self` is not modified.
    pub fn subtract(&mut self, other: &Matrix) -> Result<(), LinalgError> {
        self.zip_apply(other, "cannot subtract matrices of different shapes", |a, b| a - b)
    }

    fn zip_apply(
        &mut self,
        other: &Matrix,
        message: &str,
        op: impl Fn(f32, f32) -> f32,
    ) -> Result<(), LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::dimension_mismatch(
                message,
                &[self.rows, self.cols],
                &[other.rows, other.cols],
            ));
        }
        for (lhs, rhs) in self.values.iter_mut().zip(other.values.iter()) {
            for (a, &b) in lhs.iter_mut().zip(rhs.iter()) {
                *a = op(*a, b);
            }
        }
        Ok(())
    }

    /// Matrix-vector product `Ax`, computed as the linear combination of the columns of `A`
    /// weighted by the entries of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `x.len() != cols()`.
    pub fn times(&self, x: &Vector) -> Result<Vector, LinalgError> {
        if x.len() != self.cols {
            return Err(LinalgError::dimension_mismatch(
                "vector length must equal the number of columns",
                &[self.cols],
                &[x.len()],
            ));
        }
        Ok(self.combine_columns(x.as_slice()).into())
    }

    // sum_j weights[j] * column_j, caller guarantees weights.len() == cols
    fn combine_columns(&self, weights: &[f32]) -> Vec<f32> {
        let mut result = vec![0.0; self.rows];
        for (column, &w) in self.values.iter().zip(weights) {
            for (acc, &a) in result.iter_mut().zip(column) {
                *acc += w * a;
            }
        }
        result
    }

    /// Matrix product `AB`, built column by column as `A * b_j`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `a.cols() != b.rows()`.
    pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
        if a.cols != b.rows {
            return Err(LinalgError::dimension_mismatch(
                "inner dimensions must agree to multiply matrices",
                &[a.cols],
                &[b.rows],
            ));
        }
        Ok(Self {
            rows: a.rows,
            cols: b.cols,
            values: b.values.iter().map(|c| a.combine_columns(c)).collect(),
        })
    }

    /// Product of any number of matrices, `M1 * (M2 * (... * (Mk-1 * Mk)))`.
    ///
    /// The last two factors are multiplied first and the result is folded leftwards, so a chain
    /// of 3x3 transforms applied to a wide point matrix never forms the transform product on
    /// its own. A single factor is returned as a copy.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] for an empty chain and
    /// [`LinalgError::DimensionMismatch`] if any adjacent pair cannot be multiplied.
    pub fn product_chain(factors: &[&Matrix]) -> Result<Matrix, LinalgError> {
        let Some((last, rest)) = factors.split_last() else {
            return Err(LinalgError::InvalidDimension { rows: 0, cols: 0 });
        };
        rest.iter()
            .rev()
            .try_fold((*last).clone(), |acc, m| Matrix::product(m, &acc))
    }

    /// Returns the transpose as a new matrix.
    pub fn transpose(&self) -> Matrix {
        Self {
            rows: self.cols,
            cols: self.rows,
            values: (0..self.rows)
                .map(|i| self.values.iter().map(|c| c[i]).collect())
                .collect(),
        }
    }

    /// Apply `f` to every entry in place.
    pub fn vectorize(&mut self, mut f: impl FnMut(f32) -> f32) {
        self.values
            .iter_mut()
            .flat_map(|c| c.iter_mut())
            .for_each(|x| *x = f(*x));
    }

    /// Returns a new matrix with `f` applied to every entry.
    pub fn map(&self, f: impl FnMut(f32) -> f32) -> Matrix {
        let mut result = self.clone();
        result.vectorize(f);
        result
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row >= self.rows {
            return Err(LinalgError::index_out_of_bounds(row, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), LinalgError> {
        if col >= self.cols {
            return Err(LinalgError::index_out_of_bounds(col, self.cols));
        }
        Ok(())
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<(), LinalgError> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// Indexes by `(row, col)`. Panics when out of range, like slice indexing.
impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.values[col][row]
    }
}

// prints the matrix as a block of numbers, one row per line
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.rows {
            let row = self
                .values
                .iter()
                .map(|c| c[i].to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Matrix {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .iter_columns()
                .flatten()
                .zip(other.iter_columns().flatten())
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .iter_columns()
                .flatten()
                .zip(other.iter_columns().flatten())
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
