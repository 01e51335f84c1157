//! This file implements OKLCH, the cylindrical form of OKLab: lightness is kept, and the two
//! opponent axes are replaced by chroma (distance from gray) and hue (the angle around the gray
//! axis). It's the space colors are meant to be authored in, because each component can be edited
//! on its own without the others shifting perceptually.

use float_cmp::{ApproxEq, F32Margin};

use super::linearsrgbcolor::LinearSrgbColor;
use super::oklabcolor::OklabColor;
use crate::angle::Angle;
use crate::color::Color;

/// A color in the OKLCH color space.
///
/// Only `lightness`, `chroma`, `hue` and `opacity` are stored. The Cartesian axes [`a`] and [`b`]
/// are computed from chroma and hue on every call, so they can never disagree with them.
///
/// [`a`]: #method.a
/// [`b`]: #method.b
/// # Example
///
/// ```
/// # use oklch::prelude::*;
/// # use oklch::angle::Angle;
/// let mut teal = OklchColor::new(0.6, 0.1, Angle::degrees(200.), None);
/// let darker = teal.with(|c| c.lightness -= 0.2);
/// assert!((darker.lightness - 0.4).abs() <= 1e-6);
/// assert!((teal.lightness - 0.6).abs() <= 1e-6);
/// // the derived axes follow the fields immediately
/// teal.chroma = 0.0;
/// assert_eq!(teal.a(), 0.0);
/// assert_eq!(teal.b(), 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OklchColor {
    /// Perceived lightness, from 0 (dark) to 1 (bright). Pure black and white also need a chroma
    /// of 0.
    pub lightness: f32,
    /// Chroma, the amount of color. Starts at 0 for grays and is unbounded in theory; colors in the
    /// sRGB gamut stay below about 0.33, and CSS takes 0.4 as 100%.
    pub chroma: f32,
    /// Hue, the angle around the gray axis. Values produced by conversion lie in (-π, π]; red sits
    /// near 29 degrees, yellow near 110, green near 142, and blue near -96. Meaningless when chroma
    /// is 0.
    pub hue: Angle,
    /// Opacity from 0 to 1. `None` means no opacity was given: the color is drawn opaque, but a
    /// host can tell it apart from an explicit `Some(1.0)`.
    pub opacity: Option<f32>,
}

impl OklchColor {
    /// Creates a color from its components.
    pub fn new(lightness: f32, chroma: f32, hue: Angle, opacity: Option<f32>) -> OklchColor {
        OklchColor {
            lightness,
            chroma,
            hue,
            opacity,
        }
    }

    /// The green-red axis of the equivalent OKLab color: `chroma * cos(hue)`.
    pub fn a(&self) -> f32 {
        self.chroma * self.hue.to_radians().cos()
    }

    /// The blue-yellow axis of the equivalent OKLab color: `chroma * sin(hue)`.
    pub fn b(&self) -> f32 {
        self.chroma * self.hue.to_radians().sin()
    }

    /// Returns a copy of this color with `f` applied to it. `self` is left as it was.
    pub fn with<F: FnOnce(&mut OklchColor)>(&self, f: F) -> OklchColor {
        let mut color = *self;
        f(&mut color);
        color
    }

    /// Converts an OKLab color to polar form. Lightness and opacity are passed through. A gray
    /// (`a = b = 0`) gets a hue of 0.
    pub fn from_oklab(lab: OklabColor) -> OklchColor {
        OklchColor {
            lightness: lab.l,
            chroma: lab.a.hypot(lab.b),
            hue: Angle::radians(lab.b.atan2(lab.a)),
            opacity: Some(lab.alpha),
        }
    }

    /// Converts back to Cartesian OKLab. An absent opacity becomes 1.
    pub fn to_oklab(&self) -> OklabColor {
        let (sin, cos) = self.hue.sin_cos();
        OklabColor {
            l: self.lightness,
            a: self.chroma * cos,
            b: self.chroma * sin,
            alpha: self.opacity.unwrap_or(1.0),
        }
    }
}

impl Color for OklchColor {
    /// Converts from linear-light sRGB by way of OKLab.
    fn from_linear_srgb(linear: LinearSrgbColor) -> OklchColor {
        OklchColor::from_oklab(OklabColor::from_linear_srgb(linear))
    }
    /// Converts to linear-light sRGB by way of OKLab.
    fn to_linear_srgb(&self) -> LinearSrgbColor {
        self.to_oklab().to_linear_srgb()
    }
}

impl From<OklabColor> for OklchColor {
    fn from(lab: OklabColor) -> OklchColor {
        OklchColor::from_oklab(lab)
    }
}

impl From<OklchColor> for OklabColor {
    fn from(lch: OklchColor) -> OklabColor {
        lch.to_oklab()
    }
}

/// Compares lightness and the derived `a` and `b` axes rather than chroma and hue, so two grays
/// with different hues are equal, as are hues a full turn apart. A missing opacity compares equal
/// to 1.
impl ApproxEq for OklchColor {
    type Margin = F32Margin;
    fn approx_eq<M: Into<F32Margin>>(self, other: OklchColor, margin: M) -> bool {
        let margin = margin.into();
        self.lightness.approx_eq(other.lightness, margin)
            && self.a().approx_eq(other.a(), margin)
            && self.b().approx_eq(other.b(), margin)
            && self
                .opacity
                .unwrap_or(1.0)
                .approx_eq(other.opacity.unwrap_or(1.0), margin)
    }
}
