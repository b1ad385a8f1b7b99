use chordal_core::{
    color::Color,
    draw::{Canvas, CanvasError, StrokeDefinition},
};

use crate::layout::Arc;

/// Strokes each node's arc segment in a fixed neutral style.
///
/// The ring ignores flow values entirely: every node gets the same gray
/// 2pt stroke.
#[derive(Debug, Clone)]
pub struct ArcRenderer {
    stroke: StrokeDefinition,
}

impl ArcRenderer {
    /// Creates a renderer using `stroke` for every arc.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self { stroke }
    }

    /// Returns the stroke applied to arcs.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Strokes `arc` onto `canvas`.
    ///
    /// # Errors
    ///
    /// Propagates any [`CanvasError`] from the backend unchanged.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, arc: &Arc) -> Result<(), CanvasError> {
        canvas.stroke(&arc.to_path(), &self.stroke)
    }
}

impl Default for ArcRenderer {
    fn default() -> Self {
        Self::new(StrokeDefinition::new(Color::from_rgba8(100, 100, 100, 255), 2.0))
    }
}
