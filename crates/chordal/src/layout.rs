//! Circular layout of diagram nodes.
//!
//! [`LayoutEngine`] places `N` nodes evenly around a circle centered on the
//! canvas. Node `i` sits at `i * 2π/N` and owns an arc segment spanning a
//! third of its angular slot on either side, so neighbouring arcs always
//! leave a gap between them.
//!
//! The derived primitives, [`Arc`] and [`Chord`], are recomputed on every
//! render and never stored in the diagram.

use std::f32::consts::TAU;

use log::debug;

use chordal_core::{
    draw::Path,
    geometry::{Point, Size},
};

use crate::error::DiagramError;

/// Fraction of the canvas' shorter side used as the circle radius.
pub const RADIUS_FACTOR: f32 = 0.35;

/// Fraction of the radius that chord control points are pulled in to.
pub const CHORD_PULL: f32 = 0.5;

/// Circle geometry for a fixed node count and canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    origin: Point,
    radius: f32,
    angle_step: f32,
    node_count: usize,
}

impl LayoutEngine {
    /// Computes the layout for `node_count` nodes on a canvas of `canvas` size.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Empty`] for zero nodes and
    /// [`DiagramError::SingleNode`] for one node, whose slot would be the
    /// whole circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordal::layout::LayoutEngine;
    /// # use chordal_core::geometry::Size;
    /// let layout = LayoutEngine::new(4, Size::new(200.0, 100.0)).unwrap();
    /// assert!((layout.radius() - 35.0).abs() < 1e-4);
    /// assert_eq!(layout.angle_step(), std::f32::consts::FRAC_PI_2);
    /// ```
    pub fn new(node_count: usize, canvas: Size) -> Result<Self, DiagramError> {
        match node_count {
            0 => return Err(DiagramError::Empty),
            1 => return Err(DiagramError::SingleNode),
            _ => {}
        }

        let layout = Self {
            origin: canvas.center(),
            radius: canvas.min_side() * RADIUS_FACTOR,
            angle_step: TAU / node_count as f32,
            node_count,
        };
        debug!(
            node_count,
            radius = layout.radius,
            angle_step = layout.angle_step;
            "Circle layout computed"
        );
        Ok(layout)
    }

    /// Returns the circle center.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the circle radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the angular slot of one node, `2π / N`.
    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    /// Returns the number of nodes laid out.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the angle at which node `index` sits.
    pub fn center_angle(&self, index: usize) -> f32 {
        index as f32 * self.angle_step
    }

    /// Returns true when node `index` lies strictly on the left half of the
    /// circle, `angle ∈ (π/2, 3π/2)`.
    ///
    /// Decided from the index so nodes sitting exactly at π/2 or 3π/2 are
    /// never caught by rounding.
    pub fn is_left_half(&self, index: usize) -> bool {
        let quarters = 4 * index;
        quarters > self.node_count && quarters < 3 * self.node_count
    }

    /// Returns the point at `scale × radius` from the origin along `angle`.
    pub fn point_at(&self, angle: f32, scale: f32) -> Point {
        Point::on_circle(self.origin, self.radius * scale, angle)
    }

    /// Returns the arc segment owned by node `index`.
    pub fn arc(&self, index: usize) -> Arc {
        let angle = self.center_angle(index);
        let half_width = self.angle_step / 3.0;
        Arc {
            center: self.origin,
            radius: self.radius,
            start_angle: angle - half_width,
            end_angle: angle + half_width,
        }
    }

    /// Returns the chord from node `source` to node `target`.
    ///
    /// Both endpoints lie on the circle; each control point sits at
    /// [`CHORD_PULL`] of the radius along its endpoint's angle, so the curve
    /// bows toward the center.
    pub fn chord(&self, source: usize, target: usize) -> Chord {
        let source_angle = self.center_angle(source);
        let target_angle = self.center_angle(target);
        Chord {
            start: self.point_at(source_angle, 1.0),
            end: self.point_at(target_angle, 1.0),
            control1: self.point_at(source_angle, CHORD_PULL),
            control2: self.point_at(target_angle, CHORD_PULL),
        }
    }
}

/// A circular arc between two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Arc {
    /// Returns the signed angle the arc turns through.
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Returns the point where the arc starts.
    pub fn start_point(&self) -> Point {
        Point::on_circle(self.center, self.radius, self.start_angle)
    }

    /// Builds a path tracing the arc.
    pub fn to_path(&self) -> Path {
        let mut path = Path::new();
        path.move_to(self.start_point());
        path.arc(self.center, self.radius, self.start_angle, self.sweep());
        path
    }
}

/// A cubic curve connecting two points on the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub start: Point,
    pub end: Point,
    pub control1: Point,
    pub control2: Point,
}

impl Chord {
    /// Builds a path tracing the chord.
    pub fn to_path(&self) -> Path {
        let mut path = Path::new();
        path.move_to(self.start);
        path.cubic_to(self.control1, self.control2, self.end);
        path
    }
}
