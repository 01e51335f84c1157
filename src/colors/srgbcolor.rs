//! This file implements [`SrgbColor`], gamma-encoded sRGB with an opacity channel: the form colors
//! take on screens, in image files, and in most UI toolkits. It's the input and output of the whole
//! pipeline, and is kept as a separate type from [`LinearSrgbColor`] so that encoded and linear
//! channels can never be mixed up.

use float_cmp::{ApproxEq, F32Margin};

use super::linearsrgbcolor::LinearSrgbColor;
use crate::color::Color;
use crate::error::ComponentError;
use crate::gamma;

/// A gamma-encoded sRGB color. Every channel is nominally between 0 and 1, but nothing enforces
/// that: conversions from wider spaces produce values outside that range for out-of-gamut colors,
/// and they are kept so the conversion can be undone.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrgbColor {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
    /// Opacity, from 0 (transparent) to 1 (opaque). Never affected by gamma.
    pub alpha: f32,
}

impl SrgbColor {
    /// Creates a color from its encoded channels and opacity.
    pub fn new(r: f32, g: f32, b: f32, alpha: f32) -> SrgbColor {
        SrgbColor { r, g, b, alpha }
    }

    /// Decodes each color channel to linear light. Opacity is passed through.
    pub fn to_linear(self) -> LinearSrgbColor {
        LinearSrgbColor {
            r: gamma::decode(self.r),
            g: gamma::decode(self.g),
            b: gamma::decode(self.b),
            alpha: self.alpha,
        }
    }

    /// The channels as an `[r, g, b, alpha]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.alpha]
    }
}

impl Color for SrgbColor {
    fn from_linear_srgb(linear: LinearSrgbColor) -> SrgbColor {
        linear.to_encoded()
    }
    fn to_linear_srgb(&self) -> LinearSrgbColor {
        self.to_linear()
    }
}

impl From<[f32; 4]> for SrgbColor {
    fn from([r, g, b, alpha]: [f32; 4]) -> SrgbColor {
        SrgbColor { r, g, b, alpha }
    }
}

impl From<SrgbColor> for [f32; 4] {
    fn from(color: SrgbColor) -> [f32; 4] {
        color.to_array()
    }
}

/// Reads `[r, g, b]` or `[r, g, b, alpha]` from a slice. Three components mean an opaque color.
impl<'a> TryFrom<&'a [f32]> for SrgbColor {
    type Error = ComponentError;
    fn try_from(components: &'a [f32]) -> Result<SrgbColor, ComponentError> {
        match *components {
            [r, g, b] => Ok(SrgbColor::new(r, g, b, 1.0)),
            [r, g, b, alpha] => Ok(SrgbColor::new(r, g, b, alpha)),
            _ => Err(ComponentError::WrongComponentCount {
                found: components.len(),
            }),
        }
    }
}

impl ApproxEq for SrgbColor {
    type Margin = F32Margin;
    fn approx_eq<M: Into<F32Margin>>(self, other: SrgbColor, margin: M) -> bool {
        let margin = margin.into();
        self.r.approx_eq(other.r, margin)
            && self.g.approx_eq(other.g, margin)
            && self.b.approx_eq(other.b, margin)
            && self.alpha.approx_eq(other.alpha, margin)
    }
}
