//! Path construction.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s. It carries geometry
//! only; how it is stroked is decided by the [`StrokeDefinition`] passed
//! alongside it to a [`Canvas`].
//!
//! [`StrokeDefinition`]: crate::draw::StrokeDefinition
//! [`Canvas`]: crate::draw::Canvas
//!
//! # Example
//!
//! ```
//! # use chordal_core::draw::Path;
//! # use chordal_core::geometry::Point;
//! let mut path = Path::new();
//! path.move_to(Point::new(0.0, 0.0));
//! path.cubic_to(
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! );
//! assert_eq!(path.segments().len(), 2);
//! assert_eq!(path.end_point(), Some(Point::new(0.0, 10.0)));
//! ```

use crate::geometry::Point;

/// A single segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Circular arc around `center`.
    ///
    /// The arc starts at `start_angle` and turns through `sweep` radians;
    /// a positive sweep runs in the direction of increasing angle. If the
    /// current point is not the arc's start point, a straight line joins them.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
    /// Cubic Bézier curve from the current point.
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathSegment {
    /// Returns the point the pen rests on after this segment.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => point,
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Point::on_circle(center, radius, start_angle + sweep),
            Self::CubicTo { end, .. } => end,
        }
    }
}

/// An ordered sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new subpath at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    /// Adds a straight line to `point`.
    pub fn line_to(&mut self, point: Point) {
        self.segments.push(PathSegment::LineTo(point));
    }

    /// Adds a circular arc; see [`PathSegment::Arc`].
    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep: f32) {
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
    }

    /// Adds a cubic Bézier curve ending at `end`.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.segments.push(PathSegment::CubicTo {
            control1,
            control2,
            end,
        });
    }

    /// Returns the segments in insertion order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns where the pen rests after the last segment.
    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(PathSegment::end_point)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_path_new_is_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.end_point(), None);
    }

    #[test]
    fn test_path_keeps_segment_order() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 1.0));
        path.line_to(Point::new(2.0, 2.0));
        path.arc(Point::default(), 1.0, 0.0, FRAC_PI_2);

        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert!(matches!(segments[0], PathSegment::MoveTo(_)));
        assert!(matches!(segments[1], PathSegment::LineTo(_)));
        assert!(matches!(segments[2], PathSegment::Arc { .. }));
    }

    #[test]
    fn test_arc_end_point() {
        let mut path = Path::new();
        path.arc(Point::new(10.0, 10.0), 5.0, 0.0, FRAC_PI_2);

        let end = path.end_point().unwrap();
        assert_approx_eq!(f32, end.x(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, end.y(), 15.0);
    }
}
