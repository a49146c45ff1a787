use pointview_linalg::LinalgError;

/// An error type for the viewer.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ViewerError {
    /// The viewport has no area.
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Viewport width in pixels
        width: usize,
        /// Viewport height in pixels
        height: usize,
    },

    /// A matrix operation failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
