//! Chord color policies.
//!
//! A [`ColorMapper`] assigns a color to every ordered node pair. The only
//! contract is determinism: the same `(source, target)` always maps to the
//! same color. Any `Fn(usize, usize) -> Color` closure is a mapper, so
//! callers can plug in their own palette without touching the renderers.
//!
//! Two palettes ship with the crate:
//!
//! - [`IndexedPalette`] scales the red and green channels by the node
//!   indices. Channels are 8-bit and wrap past 255, so pairs alias once
//!   indices exceed 8.
//! - [`SpectrumPalette`] spreads source nodes around the hue wheel and steps
//!   lightness by target, which keeps large diagrams distinguishable.

use serde::Deserialize;

use chordal_core::color::Color;

/// Assigns a color to the chord from `source` to `target`.
pub trait ColorMapper {
    /// Returns the color for the ordered pair `(source, target)`.
    fn color(&self, source: usize, target: usize) -> Color;
}

impl<F> ColorMapper for F
where
    F: Fn(usize, usize) -> Color,
{
    fn color(&self, source: usize, target: usize) -> Color {
        self(source, target)
    }
}

/// Red from the source index, green from the target index, full blue.
///
/// Each channel is `30 × index` truncated to 8 bits, with alpha fixed at 200.
///
/// ```
/// # use chordal::palette::{ColorMapper, IndexedPalette};
/// let rgba = IndexedPalette.color(1, 2).to_rgba8();
/// assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (30, 60, 255, 200));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexedPalette;

impl IndexedPalette {
    const CHANNEL_STEP: usize = 30;
    const ALPHA: u8 = 200;

    fn channel(index: usize) -> u8 {
        (index.wrapping_mul(Self::CHANNEL_STEP) % 256) as u8
    }
}

impl ColorMapper for IndexedPalette {
    fn color(&self, source: usize, target: usize) -> Color {
        Color::from_rgba8(
            Self::channel(source),
            Self::channel(target),
            255,
            Self::ALPHA,
        )
    }
}

/// Hue by source node, lightness by target node.
///
/// Sources are spaced evenly around the HSL wheel; targets step lightness
/// between 30% and 70%. Distinct pairs get distinct HSL coordinates for any
/// node count, though very large diagrams can still land on the same 8-bit
/// color after quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumPalette {
    node_count: usize,
}

impl SpectrumPalette {
    const SATURATION: f32 = 70.0;
    const MIN_LIGHTNESS: f32 = 30.0;
    const LIGHTNESS_RANGE: f32 = 40.0;
    const ALPHA: f32 = 200.0 / 255.0;

    /// Creates a palette for a diagram with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count: node_count.max(1),
        }
    }
}

impl ColorMapper for SpectrumPalette {
    fn color(&self, source: usize, target: usize) -> Color {
        let n = self.node_count as f32;
        let hue = (source % self.node_count) as f32 * 360.0 / n;
        let lightness_step = if self.node_count > 1 {
            Self::LIGHTNESS_RANGE / (n - 1.0)
        } else {
            0.0
        };
        let lightness = Self::MIN_LIGHTNESS + (target % self.node_count) as f32 * lightness_step;
        Color::from_hsla(hue, Self::SATURATION, lightness, Self::ALPHA)
    }
}

/// Palette selection as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// [`IndexedPalette`]
    #[default]
    Indexed,
    /// [`SpectrumPalette`]
    Spectrum,
}

impl PaletteKind {
    /// Builds the selected palette for a diagram of `node_count` nodes.
    pub fn build(self, node_count: usize) -> Box<dyn ColorMapper> {
        match self {
            Self::Indexed => Box::new(IndexedPalette),
            Self::Spectrum => Box::new(SpectrumPalette::new(node_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_indexed_palette_formula() {
        let rgba = IndexedPalette.color(0, 0).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 0, 255, 200));

        let rgba = IndexedPalette.color(3, 5).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (90, 150, 255, 200));
    }

    #[test]
    fn test_indexed_palette_wraps_like_a_byte() {
        // 30 * 9 = 270 wraps to 14
        let rgba = IndexedPalette.color(9, 0).to_rgba8();
        assert_eq!(rgba.r, 14);
    }

    #[test]
    fn test_palettes_are_deterministic() {
        let spectrum = SpectrumPalette::new(12);
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(IndexedPalette.color(i, j), IndexedPalette.color(i, j));
                assert_eq!(spectrum.color(i, j), spectrum.color(i, j));
            }
        }
    }

    #[test]
    fn test_spectrum_palette_distinguishes_pairs() {
        let n = 20;
        let spectrum = SpectrumPalette::new(n);
        let mut seen = HashSet::new();
        for i in 0..n {
            for j in 0..n {
                seen.insert(spectrum.color(i, j));
            }
        }
        assert_eq!(seen.len(), n * n);
    }

    #[test]
    fn test_indexed_palette_aliases_for_large_indices() {
        // Documented limitation: the byte wrap makes some large indices collide.
        let mut seen = HashSet::new();
        for i in 0..300 {
            seen.insert(IndexedPalette.color(i, 0));
        }
        assert!(seen.len() < 300);
    }

    #[test]
    fn test_closure_is_a_color_mapper() {
        let mapper = |i: usize, j: usize| Color::from_rgba8(i as u8, j as u8, 0, 255);
        let rgba = mapper.color(4, 7).to_rgba8();
        assert_eq!((rgba.r, rgba.g), (4, 7));
    }

    #[test]
    fn test_palette_kind_build() {
        let indexed = PaletteKind::Indexed.build(5);
        assert_eq!(indexed.color(1, 1), IndexedPalette.color(1, 1));

        let spectrum = PaletteKind::Spectrum.build(5);
        assert_eq!(spectrum.color(2, 3), SpectrumPalette::new(5).color(2, 3));
    }
}
