//! Error types for Chordal operations.
//!
//! [`DiagramError`] covers input-shape violations that are caught before any
//! drawing happens. [`ChordalError`] is the top-level error wrapping every
//! failure the library can report.

use std::io;

use thiserror::Error;

use chordal_core::draw::CanvasError;

use crate::source::SourceError;

/// A labels/matrix combination that cannot be drawn as a chord diagram.
///
/// These are caller errors, never transient: the same input always fails
/// the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiagramError {
    #[error("diagram has no nodes")]
    Empty,

    #[error("diagram has a single node, a chord diagram needs at least two")]
    SingleNode,

    #[error("flow matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{labels} labels given for a flow matrix with {rows} rows")]
    LabelMismatch { labels: usize, rows: usize },

    #[error("flow[{row}][{col}] is {value}, weights must be finite and non-negative")]
    InvalidWeight { row: usize, col: usize, value: f64 },
}

/// The main error type for Chordal operations.
#[derive(Debug, Error)]
pub enum ChordalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("Invalid flow input: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(String),
}
