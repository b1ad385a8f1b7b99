//! Weighted chords between nodes.

use log::trace;
use serde::Deserialize;

use chordal_core::{
    color::Color,
    draw::{Canvas, CanvasError, Path, StrokeCap, StrokeDefinition},
};

use crate::{diagram::FlowEntry, layout::LayoutEngine};

/// Stroke width of the heaviest flow, in points.
pub const MAX_CHORD_WIDTH: f32 = 3.0;

/// Amount added to a chord color's 8-bit alpha so thin strokes stay visible.
pub const ALPHA_BOOST: u8 = 100;

/// Self-loops bulge inward to this fraction of the radius.
const LOOP_DEPTH: f32 = 0.75;

/// What to draw for a node's flow to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfFlowPolicy {
    /// Draw nothing. The flow still counts toward the node's volume label.
    #[default]
    Skip,
    /// Draw a small teardrop loop inside the ring at the node's position.
    Loop,
}

/// Normalized stroke width for a flow of `weight` against the heaviest flow.
///
/// Returns `None` when no chord should be drawn: a zero weight, or a matrix
/// whose largest entry is zero.
///
/// ```
/// # use chordal::render::stroke_width;
/// assert_eq!(stroke_width(100.0, 100.0), Some(3.0));
/// assert_eq!(stroke_width(50.0, 100.0), Some(1.5));
/// assert_eq!(stroke_width(0.0, 100.0), None);
/// assert_eq!(stroke_width(0.0, 0.0), None);
/// ```
pub fn stroke_width(weight: f64, max_weight: f64) -> Option<f32> {
    if weight > 0.0 && max_weight > 0.0 {
        Some(((weight / max_weight) * f64::from(MAX_CHORD_WIDTH)) as f32)
    } else {
        None
    }
}

/// Raises `color`'s alpha by [`ALPHA_BOOST`], saturating at fully opaque.
pub fn boost_alpha(color: Color) -> Color {
    let rgba = color.to_rgba8();
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a.saturating_add(ALPHA_BOOST))
}

/// Draws the curved connection for one ordered node pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordRenderer {
    self_flow: SelfFlowPolicy,
    cap: StrokeCap,
}

impl ChordRenderer {
    /// Creates a renderer with the given self-flow policy and butt caps.
    pub fn new(self_flow: SelfFlowPolicy) -> Self {
        Self {
            self_flow,
            cap: StrokeCap::default(),
        }
    }

    /// Returns a copy drawing chords with `cap` line ends.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the chord line cap.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the self-flow policy.
    pub fn self_flow(&self) -> SelfFlowPolicy {
        self.self_flow
    }

    /// Draws the chord carrying `entry`.
    ///
    /// Returns whether anything was drawn. Nothing is drawn for zero weights,
    /// for an all-zero matrix, or for self-flow under [`SelfFlowPolicy::Skip`].
    ///
    /// # Errors
    ///
    /// Propagates any [`CanvasError`] from the backend unchanged.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: &LayoutEngine,
        entry: FlowEntry,
        max_weight: f64,
        color: Color,
    ) -> Result<bool, CanvasError> {
        let FlowEntry {
            source,
            target,
            weight,
        } = entry;
        let Some(width) = stroke_width(weight, max_weight) else {
            return Ok(false);
        };

        let path = if entry.is_self_flow() {
            match self.self_flow {
                SelfFlowPolicy::Skip => {
                    trace!(node = source, weight; "Skipping self-flow");
                    return Ok(false);
                }
                SelfFlowPolicy::Loop => Self::self_loop(layout, source),
            }
        } else {
            layout.chord(source, target).to_path()
        };

        trace!(source, target, weight, width; "Drawing chord");
        let stroke = StrokeDefinition::new(boost_alpha(color), width).with_cap(self.cap);
        canvas.stroke(&path, &stroke)?;
        Ok(true)
    }

    /// Teardrop loop leaving and re-entering the node's circle point.
    fn self_loop(layout: &LayoutEngine, index: usize) -> Path {
        let angle = layout.center_angle(index);
        let spread = layout.angle_step() / 6.0;
        let anchor = layout.point_at(angle, 1.0);

        let mut path = Path::new();
        path.move_to(anchor);
        path.cubic_to(
            layout.point_at(angle - spread, LOOP_DEPTH),
            layout.point_at(angle + spread, LOOP_DEPTH),
            anchor,
        );
        path
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Heavier flows are never drawn thinner, and the heaviest is drawn at full width.
    fn check_stroke_width_monotonic(max: f64, a: f64, b: f64) -> Result<(), TestCaseError> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_width = stroke_width(low * max, max).unwrap();
        let high_width = stroke_width(high * max, max).unwrap();

        prop_assert!(low_width <= high_width);
        prop_assert!(high_width <= MAX_CHORD_WIDTH);
        prop_assert_eq!(stroke_width(max, max), Some(MAX_CHORD_WIDTH));
        Ok(())
    }

    /// Zero weights and all-zero matrices never produce a stroke.
    fn check_zero_never_drawn(max: f64) -> Result<(), TestCaseError> {
        prop_assert_eq!(stroke_width(0.0, max), None);
        prop_assert_eq!(stroke_width(max, 0.0), None);
        Ok(())
    }

    proptest! {
        #[test]
        fn stroke_width_monotonic(
            max in 1.0f64..1e12,
            a in 0.001f64..=1.0,
            b in 0.001f64..=1.0,
        ) {
            check_stroke_width_monotonic(max, a, b)?;
        }

        #[test]
        fn zero_never_drawn(max in 0.0f64..1e12) {
            check_zero_never_drawn(max)?;
        }
    }
}
