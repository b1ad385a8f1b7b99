//! Error adapter for converting ChordalError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use chordal::{ChordalError, DiagramError, source::SourceError};

/// Adapter exposing a [`ChordalError`] as a miette diagnostic.
///
/// Every variant gets a stable code; input-shape violations also carry a
/// help line describing what a valid document looks like.
pub struct ErrorAdapter<'a>(pub &'a ChordalError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChordalError::Io(_) => "chordal::io",
            ChordalError::Diagram(_) => "chordal::diagram",
            ChordalError::Canvas(_) => "chordal::canvas",
            ChordalError::Source(_) => "chordal::source",
            ChordalError::Config(_) => "chordal::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ChordalError::Diagram(DiagramError::Empty) => {
                "the input contains no flows; check the query window or the document contents"
            }
            ChordalError::Diagram(DiagramError::SingleNode) => {
                "a chord diagram needs flows between at least two distinct hosts"
            }
            ChordalError::Diagram(
                DiagramError::NotSquare { .. } | DiagramError::LabelMismatch { .. },
            ) => "`flow` must have one row per label, and each row one entry per label",
            ChordalError::Diagram(DiagramError::InvalidWeight { .. }) => {
                "byte counts must be finite numbers no smaller than zero"
            }
            ChordalError::Source(SourceError::UnknownShape(_)) => {
                "expected `{\"labels\", \"flow\"}`, an aggregation response, or an array of flow records"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`ChordalError`] for rendering with miette.
pub fn to_reportable(err: &ChordalError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
