//! Color handling for Chordal diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors can be parsed from CSS strings, built from
//! 8-bit RGBA channels (the form palettes work in), or from HSL components.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Hsl, Srgb};

pub use color::Rgba8;

/// Wrapper around the `DynamicColor` type from the color crate
/// This provides convenience methods for working with colors in Chordal
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let Rgba8 { r, g, b, a } = self.to_rgba8();
        [r, g, b, a].hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordal_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a color from 8-bit sRGB channels and an 8-bit alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordal_core::color::Color;
    ///
    /// let gray = Color::from_rgba8(100, 100, 100, 255);
    /// assert_eq!(gray.to_hex_rgb(), "#646464");
    /// ```
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgba8(r, g, b, a)),
        }
    }

    /// Creates a color from HSL components.
    ///
    /// `hue` is in degrees, `saturation` and `lightness` are percentages in
    /// `0.0..=100.0`, and `alpha` is in `0.0..=1.0`.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hsl = AlphaColor::<Hsl>::new([hue, saturation, lightness, alpha]);
        Self {
            color: DynamicColor::from_alpha_color(hsl.convert::<Srgb>()),
        }
    }

    /// Returns the color quantized to 8-bit sRGB channels.
    pub fn to_rgba8(self) -> Rgba8 {
        self.color.to_alpha_color::<Srgb>().to_rgba8()
    }

    /// Returns the opaque part of the color as a `#rrggbb` string.
    ///
    /// SVG paint attributes take the alpha channel separately (see
    /// [`Color::alpha`]), so this is the form exporters write.
    pub fn to_hex_rgb(self) -> String {
        let Rgba8 { r, g, b, .. } = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The value is between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgba8(0, 0, 0, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
