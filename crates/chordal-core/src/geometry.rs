//! Basic geometric types for diagram layout.
//!
//! All coordinates are canvas coordinates in points, stored as `f32`. Angles
//! are radians measured from the positive x axis in the direction of
//! increasing y.

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point at `radius` from `origin` along `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordal_core::geometry::Point;
    /// let p = Point::on_circle(Point::new(10.0, 10.0), 5.0, 0.0);
    /// assert_eq!(p, Point::new(15.0, 10.0));
    /// ```
    pub fn on_circle(origin: Point, radius: f32, angle: f32) -> Self {
        Self {
            x: origin.x + radius * angle.cos(),
            y: origin.y + radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance between this point and another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Represents the dimensions of a canvas or element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of the two dimensions
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the center point of a canvas of this size
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}


#[cfg(test)]
mod proptest_tests {
    use std::f32::consts::TAU;

    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Every point produced by `on_circle` lies at `radius` from the origin.
    fn check_on_circle_keeps_radius(
        origin: Point,
        radius: f32,
        angle: f32,
    ) -> Result<(), TestCaseError> {
        let p = Point::on_circle(origin, radius, angle);
        prop_assert!(approx_eq!(
            f32,
            p.distance(origin),
            radius,
            epsilon = radius * 1e-3
        ));
        Ok(())
    }

    /// Distance is symmetric and never negative.
    fn check_distance_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let forward = p1.distance(p2);
        prop_assert!(forward >= 0.0);
        prop_assert!(approx_eq!(f32, forward, p2.distance(p1), epsilon = 0.001));
        Ok(())
    }

    proptest! {
        #[test]
        fn on_circle_keeps_radius(
            origin in point_strategy(),
            radius in 1.0f32..1000.0,
            angle in 0.0f32..TAU,
        ) {
            check_on_circle_keeps_radius(origin, radius, angle)?;
        }

        #[test]
        fn distance_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_symmetric(p1, p2)?;
        }
    }
}
