//! The drawing-surface capability.

use std::error::Error;

use thiserror::Error;

use crate::{
    draw::{Path, StrokeDefinition, TextStyle},
    geometry::{Point, Size},
};

/// Errors reported by a [`Canvas`] backend.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The backend cannot perform the requested operation.
    #[error("unsupported canvas operation: {0}")]
    Unsupported(String),

    /// The backend failed while drawing.
    #[error("canvas backend error: {0}")]
    Backend(Box<dyn Error + Send + Sync>),
}

/// A 2D drawing surface.
///
/// Renderers are generic over this trait and never assume a concrete
/// backend. A canvas is only ever mutated through these calls, and calls
/// land on the surface in the order they are made: later calls draw on top
/// of earlier ones.
pub trait Canvas {
    /// Returns the drawable area in points.
    fn size(&self) -> Size;

    /// Strokes `path` with `stroke`.
    ///
    /// # Errors
    ///
    /// Returns a [`CanvasError`] if the backend cannot draw the path.
    fn stroke(&mut self, path: &Path, stroke: &StrokeDefinition) -> Result<(), CanvasError>;

    /// Fills `content` anchored at `position` using `style`.
    ///
    /// # Errors
    ///
    /// Returns a [`CanvasError`] if the backend cannot draw the text.
    fn fill_text(
        &mut self,
        style: &TextStyle,
        position: Point,
        content: &str,
    ) -> Result<(), CanvasError>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn stroke(&mut self, path: &Path, stroke: &StrokeDefinition) -> Result<(), CanvasError> {
        (**self).stroke(path, stroke)
    }

    fn fill_text(
        &mut self,
        style: &TextStyle,
        position: Point,
        content: &str,
    ) -> Result<(), CanvasError> {
        (**self).fill_text(style, position, content)
    }
}
