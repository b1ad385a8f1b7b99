//! Output backends.
//!
//! Renderers only know the [`Canvas`](chordal_core::draw::Canvas) trait.
//! This module provides the concrete surfaces the crate ships with.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`SvgCanvas`]

/// SVG export backend.
pub mod svg;

pub use self::svg::SvgCanvas;
