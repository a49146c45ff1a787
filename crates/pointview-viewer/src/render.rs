/// Consumer of the points produced by a [`crate::viewer::PointViewer`].
///
/// Implement this for whatever draws the points, e.g. a canvas that fills one circle of
/// `radius` pixels per point.
pub trait RenderSink {
    /// Draw `points`, given in screen coordinates, with the given radius.
    fn draw_points(&mut self, points: &[[f32; 2]], radius: f32);
}

/// A sink that keeps the last frame it was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBuffer {
    /// Points of the last frame, in screen coordinates.
    pub points: Vec<[f32; 2]>,
    /// Point radius of the last frame.
    pub radius: f32,
    /// Number of frames drawn so far.
    pub frames: usize,
}

impl RenderSink for FrameBuffer {
    fn draw_points(&mut self, points: &[[f32; 2]], radius: f32) {
        self.points.clear();
        self.points.extend_from_slice(points);
        self.radius = radius;
        self.frames += 1;
    }
}
