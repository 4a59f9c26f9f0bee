use euclid::default::{Point2D, Vector2D};

/// A single path drawing operation.
///
/// **Y-axis goes down.** `RelLineTo` is relative to the current point, every
/// other variant carries absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the given point.
    MoveTo(Point2D<f32>),
    /// Straight segment from the current point to the given point.
    LineTo(Point2D<f32>),
    /// Straight segment by the given offset from the current point.
    RelLineTo(Vector2D<f32>),
    /// Closes the current subpath back to its `MoveTo` point.
    Close,
}

/// Transient sequence of drawing operations.
///
/// A `Path` is rebuilt from scratch on every draw: call [`Path::reset`], feed
/// it to an outline builder, and hand the result to the renderer. Resetting
/// keeps the allocated command storage so per-frame rebuilds do not allocate
/// once the path has reached its steady-state size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self { commands: vec![] }
    }

    /// Clears all commands while keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Starts a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point2D::new(x, y)));
    }

    /// Appends a segment to the absolute point `(x, y)`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point2D::new(x, y)));
    }

    /// Appends a segment offset by `(dx, dy)` from the current point.
    pub fn rel_line_to(&mut self, dx: f32, dy: f32) {
        self.commands
            .push(PathCommand::RelLineTo(Vector2D::new(dx, dy)));
    }

    /// Closes the current subpath.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the recorded commands in emission order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` when no commands have been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Resolves the command list into absolute vertex loops.
    ///
    /// Each `MoveTo` starts a new loop and `Close` finishes it; relative
    /// segments are resolved against the running current point. Renderers
    /// that only consume plain polygons (and the test suite) read this form
    /// instead of replaying the command stream themselves.
    ///
    /// Commands before the first `MoveTo` are ignored, an unclosed trailing
    /// subpath is still returned as a loop.
    pub fn polygons(&self) -> Vec<Vec<Point2D<f32>>> {
        let mut polygons = vec![];
        let mut current_loop: Vec<Point2D<f32>> = vec![];
        let mut current_point = Point2D::zero();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if !current_loop.is_empty() {
                        polygons.push(std::mem::take(&mut current_loop));
                    }
                    current_point = p;
                    current_loop.push(p);
                }
                PathCommand::LineTo(p) => {
                    current_point = p;
                    current_loop.push(p);
                }
                PathCommand::RelLineTo(v) => {
                    current_point += v;
                    current_loop.push(current_point);
                }
                PathCommand::Close => {
                    if !current_loop.is_empty() {
                        current_point = current_loop[0];
                        polygons.push(std::mem::take(&mut current_loop));
                    }
                }
            }
        }

        if !current_loop.is_empty() {
            polygons.push(current_loop);
        }

        polygons
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_capacity() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        path.close();

        let capacity = path.commands.capacity();
        path.reset();

        assert!(path.is_empty());
        assert_eq!(path.commands.capacity(), capacity);
    }

    #[test]
    fn test_polygons_resolve_relative_segments() {
        let mut path = Path::new();
        path.move_to(10.0, 0.0);
        path.line_to(50.0, 0.0);
        path.rel_line_to(0.0, 20.0);
        path.rel_line_to(-40.0, 0.0);
        path.close();

        let polygons = path.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(
            polygons[0],
            vec![
                Point2D::new(10.0, 0.0),
                Point2D::new(50.0, 0.0),
                Point2D::new(50.0, 20.0),
                Point2D::new(10.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_polygons_split_subpaths() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        path.close();
        path.move_to(0.0, 2.0);
        path.line_to(1.0, 2.0);
        path.close();

        let polygons = path.polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 2);
        assert_eq!(polygons[1][0], Point2D::new(0.0, 2.0));
    }

    #[test]
    fn test_empty_path_has_no_polygons() {
        let path = Path::new();
        assert!(path.polygons().is_empty());
        assert_eq!(path.len(), 0);
    }
}
