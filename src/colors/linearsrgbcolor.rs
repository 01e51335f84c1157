//! Linear-light sRGB: the sRGB primaries without the transfer function. This is the hub every
//! [`Color`] converts through, and the only space where the OKLab matrices apply.

use super::srgbcolor::SrgbColor;
use crate::color::Color;
use crate::gamma;

/// An sRGB color whose channels are proportional to physical light intensity. Channels can be
/// negative or greater than 1 for colors outside the sRGB gamut.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSrgbColor {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
    /// Opacity, carried along untouched.
    pub alpha: f32,
}

impl LinearSrgbColor {
    /// Creates a color from its linear channels and opacity.
    pub fn new(r: f32, g: f32, b: f32, alpha: f32) -> LinearSrgbColor {
        LinearSrgbColor { r, g, b, alpha }
    }

    /// Applies the sRGB transfer function to each color channel. Opacity is passed through.
    pub fn to_encoded(self) -> SrgbColor {
        SrgbColor {
            r: gamma::encode(self.r),
            g: gamma::encode(self.g),
            b: gamma::encode(self.b),
            alpha: self.alpha,
        }
    }
}

impl Color for LinearSrgbColor {
    fn from_linear_srgb(linear: LinearSrgbColor) -> LinearSrgbColor {
        linear
    }
    fn to_linear_srgb(&self) -> LinearSrgbColor {
        *self
    }
}
