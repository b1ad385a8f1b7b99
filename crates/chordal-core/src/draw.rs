//! Drawing primitives and the canvas capability.
//!
//! Renderers never talk to a concrete output format. They build [`Path`]s,
//! pick a [`StrokeDefinition`] or [`TextStyle`], and hand both to a
//! [`Canvas`]. Backends decide what a stroke or a text fill becomes:
//!
//! - [`RecordingCanvas`] keeps an in-memory list of [`DrawOp`]s
//! - the SVG writer in the `chordal` crate turns calls into SVG elements

mod canvas;
mod path;
mod recording;
mod stroke;
mod text;

pub use canvas::{Canvas, CanvasError};
pub use path::{Path, PathSegment};
pub use recording::{DrawOp, RecordingCanvas};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{TextAlign, TextStyle, VerticalAlign};
