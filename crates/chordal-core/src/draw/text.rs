//! Text styling for labels drawn on a canvas.
//!
//! A [`TextStyle`] carries everything a backend needs to place a string at
//! an anchor point: color, font, rotation and alignment relative to the
//! anchor. Styles are small values; renderers clone and tweak them per label.
//!
//! ```
//! # use chordal_core::draw::{TextAlign, TextStyle, VerticalAlign};
//! # use chordal_core::color::Color;
//! let style = TextStyle::new(12.0)
//!     .with_color(Color::new("navy").unwrap())
//!     .with_rotation(std::f32::consts::FRAC_PI_2)
//!     .with_align(TextAlign::Center, VerticalAlign::Center);
//! assert_eq!(style.font_size(), 12.0);
//! ```

use crate::color::Color;

/// Horizontal placement of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

impl TextAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical placement of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Anchor is at the top of the text
    Top,
    /// Anchor is at the vertical center of the text
    Center,
    /// Anchor is at the bottom of the text
    #[default]
    Bottom,
}

impl VerticalAlign {
    /// Returns the SVG `dominant-baseline` value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Top => "hanging",
            Self::Center => "central",
            Self::Bottom => "alphabetic",
        }
    }
}

/// Visual style of a text fill.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Color | black |
/// | Font family | `"sans-serif"` |
/// | Font size | `12.0` |
/// | Rotation | `0.0` |
/// | Alignment | left, bottom |
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    color: Color,
    font_family: String,
    font_size: f32,
    rotation: f32,
    align: TextAlign,
    vertical_align: VerticalAlign,
}

impl TextStyle {
    /// Creates a default style with the given font size in points.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// Returns a copy with a different fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy rotated by `rotation` radians around the anchor.
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with different alignment.
    pub fn with_align(mut self, align: TextAlign, vertical_align: VerticalAlign) -> Self {
        self.align = align;
        self.vertical_align = vertical_align;
        self
    }

    /// Returns the fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Returns the horizontal alignment.
    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Returns the vertical alignment.
    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            font_family: String::from("sans-serif"),
            font_size: 12.0,
            rotation: 0.0,
            align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
        }
    }
}
