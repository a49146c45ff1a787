use log::{debug, info};
use pointview_linalg::Matrix;
use rand::Rng;

use crate::{error::ViewerError, render::RenderSink};

/// Parameters of a [`PointViewer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerParams {
    /// Viewport width in pixels.
    pub width: usize,
    /// Viewport height in pixels.
    pub height: usize,
    /// Relative zoom applied per wheel notch.
    pub scaling_factor: f32,
    /// Rotation in degrees applied per wheel notch while shift is held.
    pub rotation_step_deg: f32,
    /// Radius in pixels the points are drawn with.
    pub point_radius: f32,
    /// Whether the point radius follows the zoom.
    pub resize_points_with_zoom: bool,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scaling_factor: 0.1,
            rotation_step_deg: 5.0,
            point_radius: 6.0,
            resize_points_with_zoom: false,
        }
    }
}

/// Discrete requests coming from the windowing layer. Coordinates are in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Add a point where the mouse was clicked.
    Click {
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
    /// The mouse moved with no button held.
    Move {
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
    /// The mouse moved with the button held.
    Drag {
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
    /// The wheel turned by `rotation` notches, positive when scrolling down.
    Wheel {
        /// Signed number of notches
        rotation: i32,
        /// Whether shift was held
        shift: bool,
    },
    /// Remove every point.
    Clear,
    /// Replace the cloud with this many random points.
    FillRandom(usize),
    /// Flip whether points are resized with the zoom.
    ToggleResizeWithZoom,
}

/// Interaction model of a 2D point viewer.
///
/// The points are kept as a `3 x N` matrix of homogeneous columns `(x, y, 1)` in a frame
/// centred on the viewport. Every interaction is turned into a 3x3 transform that is
/// multiplied onto that matrix.
#[derive(Debug, Clone)]
pub struct PointViewer {
    params: ViewerParams,
    // None while the cloud is empty
    points: Option<Matrix>,
    cursor: [f32; 2],
    previous: [f32; 2],
    point_radius: f32,
    resize_points_with_zoom: bool,
}

impl PointViewer {
    /// Create an empty viewer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidViewport`] if the width or height is zero.
    pub fn new(params: ViewerParams) -> Result<Self, ViewerError> {
        if params.width == 0 || params.height == 0 {
            return Err(ViewerError::InvalidViewport {
                width: params.width,
                height: params.height,
            });
        }
        Ok(Self {
            point_radius: params.point_radius,
            resize_points_with_zoom: params.resize_points_with_zoom,
            params,
            points: None,
            cursor: [0.0; 2],
            previous: [0.0; 2],
        })
    }

    /// The viewer parameters.
    pub fn params(&self) -> &ViewerParams {
        &self.params
    }

    /// The point matrix in centred coordinates, `None` when there are no points.
    pub fn points(&self) -> Option<&Matrix> {
        self.points.as_ref()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.as_ref().map_or(0, Matrix::cols)
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_none()
    }

    /// Current point radius in pixels.
    pub fn point_radius(&self) -> f32 {
        self.point_radius
    }

    /// Whether the point radius follows the zoom.
    pub fn resize_points_with_zoom(&self) -> bool {
        self.resize_points_with_zoom
    }

    /// Cursor position in centred coordinates.
    pub fn cursor(&self) -> [f32; 2] {
        self.cursor
    }

    fn offset(&self) -> [f32; 2] {
        [(self.params.width / 2) as f32, (self.params.height / 2) as f32]
    }

    fn to_centred(&self, x: f32, y: f32) -> [f32; 2] {
        let [ox, oy] = self.offset();
        [x - ox, y - oy]
    }

    /// Dispatch a single event.
    pub fn handle(&mut self, event: ViewerEvent) -> Result<(), ViewerError> {
        debug!("handling {event:?}");
        match event {
            ViewerEvent::Click { x, y } => self.click(x, y)?,
            ViewerEvent::Move { x, y } => self.mouse_moved(x, y),
            ViewerEvent::Drag { x, y } => self.mouse_dragged(x, y)?,
            ViewerEvent::Wheel { rotation, shift } => self.wheel(rotation, shift)?,
            ViewerEvent::Clear => self.clear(),
            ViewerEvent::FillRandom(count) => self.fill_random(count, &mut rand::rng())?,
            ViewerEvent::ToggleResizeWithZoom => self.toggle_resize_with_zoom(),
        }
        Ok(())
    }

    /// Append a point at the clicked screen position.
    pub fn click(&mut self, x: f32, y: f32) -> Result<(), ViewerError> {
        let [px, py] = self.to_centred(x, y);
        let column = [px, py, 1.0];
        self.points = Some(match &self.points {
            Some(points) => points.add_column(column)?,
            None => Matrix::from_columns(&[column])?,
        });
        Ok(())
    }

    /// Record the cursor position without moving any point.
    pub fn mouse_moved(&mut self, x: f32, y: f32) {
        self.cursor = self.to_centred(x, y);
        self.previous = self.cursor;
    }

    /// Translate the cloud by how far the cursor moved since the last move or drag.
    pub fn mouse_dragged(&mut self, x: f32, y: f32) -> Result<(), ViewerError> {
        self.cursor = self.to_centred(x, y);
        let dx = self.cursor[0] - self.previous[0];
        let dy = self.cursor[1] - self.previous[1];
        self.previous = self.cursor;

        if let Some(points) = &self.points {
            self.points = Some(Matrix::product(&Matrix::translation(dx, dy), points)?);
        }
        Ok(())
    }

    /// Zoom (or rotate, with shift) about the cursor.
    ///
    /// A positive `rotation` zooms out by `1 - scaling_factor` or rotates by
    /// `+rotation_step_deg`. A negative one zooms in by `1 + scaling_factor` or rotates the
    /// other way. Zero does nothing.
    pub fn wheel(&mut self, rotation: i32, shift: bool) -> Result<(), ViewerError> {
        if rotation == 0 {
            return Ok(());
        }
        let direction = rotation.signum() as f32;

        let transform = if shift {
            Matrix::rotation(direction * self.params.rotation_step_deg)
        } else {
            let factor = 1.0 - direction * self.params.scaling_factor;
            self.point_radius = if self.resize_points_with_zoom {
                self.point_radius * factor
            } else {
                self.params.point_radius
            };
            Matrix::scaling(factor)
        };

        if let Some(points) = &self.points {
            let [cx, cy] = self.cursor;
            // move the cursor to the origin, transform, and move it back
            let to_origin = Matrix::translation(-cx, -cy);
            let from_origin = Matrix::translation(cx, cy);
            self.points = Some(Matrix::product_chain(&[
                &from_origin,
                &transform,
                &to_origin,
                points,
            ])?);
        }
        Ok(())
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        info!("clearing {} points", self.len());
        self.points = None;
    }

    /// Replace the cloud with `count` points at random integer pixel positions in the
    /// viewport. A count of zero clears the cloud.
    pub fn fill_random<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<(), ViewerError> {
        if count == 0 {
            self.clear();
            return Ok(());
        }
        let [ox, oy] = self.offset();
        let (width, height) = (self.params.width, self.params.height);
        let columns: Vec<[f32; 3]> = (0..count)
            .map(|_| {
                let x = rng.random_range(0..width) as f32 - ox;
                let y = rng.random_range(0..height) as f32 - oy;
                [x, y, 1.0]
            })
            .collect();
        self.points = Some(Matrix::from_columns(&columns)?);
        info!("filled viewer with {count} random points");
        Ok(())
    }

    /// Flip whether points are resized with the zoom and reset the radius.
    pub fn toggle_resize_with_zoom(&mut self) {
        self.resize_points_with_zoom = !self.resize_points_with_zoom;
        self.point_radius = self.params.point_radius;
    }

    /// The points in screen coordinates. The homogeneous coordinate is dropped.
    pub fn screen_points(&self) -> Vec<[f32; 2]> {
        let [ox, oy] = self.offset();
        self.points
            .iter()
            .flat_map(Matrix::iter_columns)
            .map(|c| [c[0] + ox, c[1] + oy])
            .collect()
    }

    /// Hand the current frame to `sink`.
    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_points(&self.screen_points(), self.point_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn viewer() -> PointViewer {
        PointViewer::new(ViewerParams {
            width: 200,
            height: 100,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_invalid_viewport() {
        let params = ViewerParams {
            width: 0,
            ..Default::default()
        };
        assert_eq!(
            PointViewer::new(params).unwrap_err(),
            ViewerError::InvalidViewport {
                width: 0,
                height: 600
            }
        );
    }

    #[test]
    fn test_click_appends_centred_point() -> Result<(), ViewerError> {
        let mut v = viewer();
        assert!(v.is_empty());
        v.click(150.0, 20.0)?;
        v.click(100.0, 50.0)?;
        assert_eq!(v.len(), 2);
        let points = v.points().unwrap();
        assert_eq!(points.column(0)?, &[50.0, -30.0, 1.0]);
        assert_eq!(points.column(1)?, &[0.0, 0.0, 1.0]);
        assert_eq!(v.screen_points(), vec![[150.0, 20.0], [100.0, 50.0]]);
        Ok(())
    }

    #[test]
    fn test_drag_translates_by_delta() -> Result<(), ViewerError> {
        let mut v = viewer();
        v.click(100.0, 50.0)?;
        v.mouse_moved(10.0, 10.0);
        v.mouse_dragged(15.0, 7.0)?;
        v.mouse_dragged(20.0, 7.0)?;
        assert_eq!(v.screen_points(), vec![[110.0, 47.0]]);
        Ok(())
    }

    #[test]
    fn test_wheel_scales_about_cursor() -> Result<(), ViewerError> {
        let mut v = viewer();
        v.click(120.0, 50.0)?; // centred (20, 0)
        v.mouse_moved(110.0, 50.0); // cursor at (10, 0)
        v.wheel(-1, false)?;
        // 10 away from the cursor becomes 11
        let p = v.screen_points()[0];
        assert_relative_eq!(p[0], 121.0, epsilon = 1e-4);
        assert_relative_eq!(p[1], 50.0, epsilon = 1e-4);
        assert_eq!(v.point_radius(), 6.0);
        Ok(())
    }

    #[test]
    fn test_shift_wheel_rotates_about_cursor() -> Result<(), ViewerError> {
        let mut v = PointViewer::new(ViewerParams {
            width: 200,
            height: 100,
            rotation_step_deg: 90.0,
            ..Default::default()
        })?;
        v.click(110.0, 50.0)?; // centred (10, 0)
        v.mouse_moved(100.0, 50.0); // cursor at the origin
        v.wheel(3, true)?;
        let p = v.points().unwrap().column(0)?.to_vec();
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-4);
        assert_relative_eq!(p[1], 10.0, epsilon = 1e-4);
        assert_relative_eq!(p[2], 1.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_zero_wheel_is_noop() -> Result<(), ViewerError> {
        let mut v = viewer();
        v.click(130.0, 40.0)?;
        let before = v.screen_points();
        v.wheel(0, false)?;
        v.wheel(0, true)?;
        assert_eq!(v.screen_points(), before);
        Ok(())
    }

    #[test]
    fn test_radius_follows_zoom_when_enabled() -> Result<(), ViewerError> {
        let mut v = viewer();
        v.toggle_resize_with_zoom();
        assert!(v.resize_points_with_zoom());
        v.wheel(1, false)?;
        assert_relative_eq!(v.point_radius(), 5.4, epsilon = 1e-5);
        v.toggle_resize_with_zoom();
        assert_eq!(v.point_radius(), 6.0);
        Ok(())
    }

    #[test]
    fn test_fill_random_stays_in_viewport() -> Result<(), ViewerError> {
        let mut v = viewer();
        let mut rng = StdRng::seed_from_u64(9);
        v.fill_random(100, &mut rng)?;
        assert_eq!(v.len(), 100);
        for [x, y] in v.screen_points() {
            assert!((0.0..200.0).contains(&x));
            assert!((0.0..100.0).contains(&y));
            assert_eq!(x.fract(), 0.0);
        }
        v.fill_random(0, &mut rng)?;
        assert!(v.is_empty());
        Ok(())
    }

    #[test]
    fn test_transforms_on_empty_cloud() -> Result<(), ViewerError> {
        let mut v = viewer();
        v.mouse_dragged(30.0, 30.0)?;
        v.wheel(1, true)?;
        v.wheel(-1, false)?;
        assert!(v.is_empty());
        assert!(v.screen_points().is_empty());
        Ok(())
    }
}
