//! Node labels around the ring.
//!
//! Every node gets two labels, both centered on their anchor:
//!
//! | Label    | Distance        | Rotation            | Content                  |
//! |----------|-----------------|---------------------|--------------------------|
//! | identity | `radius × 1.07` | `angle`             | the node's display label |
//! | volume   | `radius × 1.15` | `angle + π/2`       | outgoing total in MB     |
//!
//! Labels on the left half of the circle, `angle ∈ (π/2, 3π/2)`, get an
//! extra half turn so they never read upside down. Each label is filled
//! twice: a near-white backplate first, then the foreground text.

use std::f32::consts::{FRAC_PI_2, PI};

use chordal_core::{
    color::Color,
    draw::{Canvas, CanvasError, TextAlign, TextStyle, VerticalAlign},
    geometry::Point,
};

use crate::layout::LayoutEngine;

/// Distance of identity labels from the origin, in radii.
pub const IDENTITY_RADIUS_SCALE: f32 = 1.07;

/// Distance of volume labels from the origin, in radii.
pub const VOLUME_RADIUS_SCALE: f32 = 1.15;

/// Font size of both label kinds, in points.
pub const LABEL_FONT_SIZE: f32 = 12.0;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Adds a half turn to `rotation` when node `index` lies on the left half
/// of the circle.
///
/// ```
/// # use chordal::{geometry::Size, layout::LayoutEngine, render::upright_rotation};
/// use std::f32::consts::PI;
///
/// let layout = LayoutEngine::new(4, Size::new(100.0, 100.0)).unwrap();
/// assert_eq!(upright_rotation(&layout, 0, 0.0), 0.0);
/// assert_eq!(upright_rotation(&layout, 1, 1.0), 1.0);
/// assert_eq!(upright_rotation(&layout, 2, 1.0), 1.0 + PI);
/// ```
pub fn upright_rotation(layout: &LayoutEngine, index: usize, rotation: f32) -> f32 {
    if layout.is_left_half(index) {
        rotation + PI
    } else {
        rotation
    }
}

/// Formats a byte count as megabytes with one decimal place.
///
/// ```
/// # use chordal::render::format_megabytes;
/// assert_eq!(format_megabytes(12_911_000.0), "12.3 MB");
/// assert_eq!(format_megabytes(0.0), "0.0 MB");
/// ```
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.1} MB", bytes / BYTES_PER_MEGABYTE)
}

/// Where a label goes and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub position: Point,
    pub rotation: f32,
}

/// Places and draws node labels.
#[derive(Debug, Clone)]
pub struct LabelPlacer {
    foreground: TextStyle,
    backplate: Color,
}

impl LabelPlacer {
    /// Placement of node `index`'s identity label.
    pub fn identity_placement(layout: &LayoutEngine, index: usize) -> LabelPlacement {
        let angle = layout.center_angle(index);
        LabelPlacement {
            position: layout.point_at(angle, IDENTITY_RADIUS_SCALE),
            rotation: upright_rotation(layout, index, angle),
        }
    }

    /// Placement of node `index`'s volume label.
    pub fn volume_placement(layout: &LayoutEngine, index: usize) -> LabelPlacement {
        let angle = layout.center_angle(index);
        LabelPlacement {
            position: layout.point_at(angle, VOLUME_RADIUS_SCALE),
            rotation: upright_rotation(layout, index, angle + FRAC_PI_2),
        }
    }

    /// Returns the foreground text style, before rotation is applied.
    pub fn foreground(&self) -> &TextStyle {
        &self.foreground
    }

    /// Returns the backplate fill color.
    pub fn backplate(&self) -> Color {
        self.backplate
    }

    /// Draws the display label of node `index`.
    ///
    /// # Errors
    ///
    /// Propagates any [`CanvasError`] from the backend unchanged.
    pub fn draw_identity<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: &LayoutEngine,
        index: usize,
        label: &str,
    ) -> Result<(), CanvasError> {
        self.draw(canvas, Self::identity_placement(layout, index), label)
    }

    /// Draws the outgoing-volume label of node `index`.
    ///
    /// # Errors
    ///
    /// Propagates any [`CanvasError`] from the backend unchanged.
    pub fn draw_volume<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: &LayoutEngine,
        index: usize,
        total_bytes: f64,
    ) -> Result<(), CanvasError> {
        let content = format_megabytes(total_bytes);
        self.draw(canvas, Self::volume_placement(layout, index), &content)
    }

    fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        placement: LabelPlacement,
        content: &str,
    ) -> Result<(), CanvasError> {
        let style = self.foreground.clone().with_rotation(placement.rotation);
        let backplate = style.clone().with_color(self.backplate);

        canvas.fill_text(&backplate, placement.position, content)?;
        canvas.fill_text(&style, placement.position, content)
    }
}

impl Default for LabelPlacer {
    fn default() -> Self {
        Self {
            foreground: TextStyle::new(LABEL_FONT_SIZE)
                .with_color(Color::default())
                .with_align(TextAlign::Center, VerticalAlign::Center),
            backplate: Color::from_rgba8(255, 255, 255, 220),
        }
    }
}
