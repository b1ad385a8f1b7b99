//! Configuration types for Chordal diagram rendering.
//!
//! This module provides configuration structures that control the output
//! surface, styling and rendering policies of a diagram. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining all sections.
//! - [`CanvasConfig`] - Output surface size in points.
//! - [`StyleConfig`] - Background color and title.
//! - [`RenderConfig`] - Chord palette, line cap and self-flow policy.
//!
//! # Example
//!
//! ```
//! # use chordal::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.canvas().width(), 1728.0);
//! ```

use serde::Deserialize;

use std::str::FromStr;

use chordal_core::{color::Color, draw::StrokeCap, geometry::Size};

use crate::{palette::PaletteKind, render::SelfFlowPolicy};

/// Default output width and height: 24 inches at 72 points per inch.
pub const DEFAULT_CANVAS_SIDE: f32 = 24.0 * 72.0;

/// Title drawn above the diagram unless configured otherwise.
pub const DEFAULT_TITLE: &str = "Network Traffic Flow Between IPs";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig, render: RenderConfig) -> Self {
        Self {
            canvas,
            style,
            render,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Output surface dimensions, in points.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_side")]
    width: f32,

    #[serde(default = "default_side")]
    height: f32,
}

fn default_side() -> f32 {
    DEFAULT_CANVAS_SIDE
}

impl CanvasConfig {
    /// Creates a canvas configuration of the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the configured width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the configured height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the canvas [`Size`].
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, negative or not finite.
    pub fn size(&self) -> Result<Size, String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "Invalid canvas {name} in config: {value}, expected a positive number"
                ));
            }
        }
        Ok(Size::new(self.width, self.height))
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIDE, DEFAULT_CANVAS_SIDE)
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Title text; an empty string disables the title.
    #[serde(default)]
    title: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration.
    pub fn new(background_color: Option<String>, title: Option<String>) -> Self {
        Self {
            background_color,
            title,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the title to draw, or `None` if it is disabled.
    pub fn title(&self) -> Option<&str> {
        match self.title.as_deref() {
            None => Some(DEFAULT_TITLE),
            Some("") => None,
            Some(title) => Some(title),
        }
    }
}

/// Rendering policies.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    /// Chord color policy.
    #[serde(default)]
    palette: PaletteKind,

    /// What to draw for a node's flow to itself.
    #[serde(default)]
    self_flow: SelfFlowPolicy,

    /// Chord line cap, as an SVG `stroke-linecap` value.
    #[serde(default)]
    chord_cap: Option<String>,
}

impl RenderConfig {
    /// Creates a render configuration with butt chord caps.
    pub fn new(palette: PaletteKind, self_flow: SelfFlowPolicy) -> Self {
        Self {
            palette,
            self_flow,
            chord_cap: None,
        }
    }

    /// Returns a copy with a different chord line cap.
    pub fn with_chord_cap(mut self, cap: impl Into<String>) -> Self {
        self.chord_cap = Some(cap.into());
        self
    }

    /// Returns the configured palette.
    pub fn palette(&self) -> PaletteKind {
        self.palette
    }

    /// Returns the configured self-flow policy.
    pub fn self_flow(&self) -> SelfFlowPolicy {
        self.self_flow
    }

    /// Returns the parsed chord [`StrokeCap`], [`StrokeCap::Butt`] if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not `butt`, `round` or
    /// `square`.
    pub fn chord_cap(&self) -> Result<StrokeCap, String> {
        self.chord_cap
            .as_deref()
            .map(StrokeCap::from_str)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid chord cap in config: {err}"))
    }
}
