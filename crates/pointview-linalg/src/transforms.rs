//! Homogeneous 2D transforms.
//!
//! All transforms are 3x3 matrices acting on column vectors `(x, y, 1)`. They are cheap
//! value objects and are built fresh on every call.

use crate::{error::LinalgError, matrix::Matrix};

impl Matrix {
    /// Translation by `(dx, dy)`.
    ///
    /// The third column is `(dx, dy, 1)`, so `translation(dx, dy).times(p)` adds `(dx, dy)`
    /// to the point `p`.
    ///
    /// ```rust
    /// use pointview_linalg::{vector, Matrix};
    ///
    /// let p = Matrix::translation(5.0, -3.0).times(&vector![10.0, 10.0, 1.0]).unwrap();
    /// assert_eq!(p.as_slice(), &[15.0, 7.0, 1.0]);
    /// ```
    pub fn translation(dx: f32, dy: f32) -> Matrix {
        homogeneous([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [dx, dy, 1.0]])
    }

    /// Uniform scaling by `k` about the origin.
    pub fn scaling(k: f32) -> Matrix {
        homogeneous([[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation by `angle` degrees about the origin.
    ///
    /// The columns are `(cos, sin, 0)`, `(-sin, cos, 0)` and `(0, 0, 1)`. In a y-up frame a
    /// positive angle turns counter-clockwise; in screen coordinates (y down) it turns
    /// clockwise.
    pub fn rotation(angle: f32) -> Matrix {
        let (sin, cos) = angle.to_radians().sin_cos();
        homogeneous([[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }
}

// builds a 3x3 matrix from its three columns
fn homogeneous(columns: [[f32; 3]; 3]) -> Matrix {
    Matrix::from_cols_array(columns)
}

/// Conjugates `transform` so that it acts about `(x, y)` instead of the origin.
///
/// Returns `translation(x, y) * transform * translation(-x, -y)`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `transform` is not 3x3.
pub fn about_point(transform: &Matrix, x: f32, y: f32) -> Result<Matrix, LinalgError> {
    Matrix::product_chain(&[
        &Matrix::translation(x, y),
        transform,
        &Matrix::translation(-x, -y),
    ])
}
