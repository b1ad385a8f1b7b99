//! In-memory canvas that records draw calls.
//!
//! [`RecordingCanvas`] is the backend used to inspect what a renderer did:
//! every call is stored as a [`DrawOp`] in call order, so two renders can be
//! compared operation by operation.
//!
//! ```
//! # use chordal_core::draw::{Canvas, DrawOp, Path, RecordingCanvas, StrokeDefinition};
//! # use chordal_core::geometry::{Point, Size};
//! let mut canvas = RecordingCanvas::new(Size::new(100.0, 100.0));
//! let mut path = Path::new();
//! path.move_to(Point::new(0.0, 0.0));
//! path.line_to(Point::new(10.0, 10.0));
//! canvas.stroke(&path, &StrokeDefinition::default()).unwrap();
//!
//! assert_eq!(canvas.ops().len(), 1);
//! assert!(matches!(canvas.ops()[0], DrawOp::Stroke { .. }));
//! ```

use crate::{
    draw::{Canvas, CanvasError, Path, StrokeDefinition, TextStyle},
    geometry::{Point, Size},
};

/// A single recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A [`Canvas::stroke`] call.
    Stroke {
        path: Path,
        stroke: StrokeDefinition,
    },
    /// A [`Canvas::fill_text`] call.
    FillText {
        style: TextStyle,
        position: Point,
        content: String,
    },
}

/// A canvas that stores every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas reporting `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Returns the recorded operations in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the canvas and returns the recorded operations.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Returns the recorded strokes in call order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &StrokeDefinition)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke { path, stroke } => Some((path, stroke)),
            DrawOp::FillText { .. } => None,
        })
    }

    /// Returns the recorded text fills in call order.
    pub fn texts(&self) -> impl Iterator<Item = (&TextStyle, Point, &str)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText {
                style,
                position,
                content,
            } => Some((style, *position, content.as_str())),
            DrawOp::Stroke { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn stroke(&mut self, path: &Path, stroke: &StrokeDefinition) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::Stroke {
            path: path.clone(),
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        style: &TextStyle,
        position: Point,
        content: &str,
    ) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::FillText {
            style: style.clone(),
            position,
            content: content.to_string(),
        });
        Ok(())
    }
}
