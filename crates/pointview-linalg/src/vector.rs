use std::fmt;

use crate::error::LinalgError;

/// A fixed-length vector of `f32` entries.
///
/// The length is set at construction and never changes. The only in-place operation is
/// [`Vector::add`]; everything else returns a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    entries: Vec<f32>,
}

/// Builds a [`Vector`] from literal entries.
///
/// ```rust
/// use pointview_linalg::vector;
///
/// let v = vector![1.0, 2.0, 3.0];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::vector::Vector::from(vec![$($x as f32),*])
    };
}

impl Vector {
    /// Create a zero-filled vector of the given length.
    pub fn zeros(length: usize) -> Self {
        Self {
            entries: vec![0.0; length],
        }
    }

    /// Create a vector by copying the given entries.
    pub fn from_slice(entries: &[f32]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<f32, LinalgError> {
        self.entries
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_bounds(index, self.len()))
    }

    /// The entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.entries
    }

    /// Consumes the vector and returns its entries.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.entries
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.entries.iter()
    }

    /// Componentwise in-place sum, `self += that`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn add(&mut self, that: &Vector) -> Result<(), LinalgError> {
        check_same_length("cannot add vectors of different lengths", self, that)?;
        self.entries
            .iter_mut()
            .zip(that.entries.iter())
            .for_each(|(a, b)| *a += *b);
        Ok(())
    }

    /// Returns a new vector with every entry multiplied by `k`.
    pub fn scale(&self, k: f32) -> Vector {
        Self {
            entries: self.entries.iter().map(|x| x * k).collect(),
        }
    }

    /// Sum of pairwise products.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, that: &Vector) -> Result<f32, LinalgError> {
        dot(self, that)
    }
}

/// Sum of pairwise products of `a` and `b`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
pub fn dot(a: &Vector, b: &Vector) -> Result<f32, LinalgError> {
    check_same_length("cannot take the dot product of vectors of different lengths", a, b)?;
    Ok(a.entries
        .iter()
        .zip(b.entries.iter())
        .map(|(x, y)| x * y)
        .sum())
}

fn check_same_length(message: &str, a: &Vector, b: &Vector) -> Result<(), LinalgError> {
    if a.len() != b.len() {
        return Err(LinalgError::dimension_mismatch(
            message,
            &[a.len()],
            &[b.len()],
        ));
    }
    Ok(())
}

impl From<Vec<f32>> for Vector {
    fn from(entries: Vec<f32>) -> Self {
        Self { entries }
    }
}

impl From<&[f32]> for Vector {
    fn from(entries: &[f32]) -> Self {
        Self::from_slice(entries)
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    fn from(entries: [f32; N]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }
}

impl From<Vector> for Vec<f32> {
    fn from(v: Vector) -> Self {
        v.entries
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.entries
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// one entry per line, printed as a column
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in &self.entries {
            writeln!(f, "{x}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
