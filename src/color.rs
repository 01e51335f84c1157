//! This file defines the [`Color`] trait, which every color type in this crate implements. Linear-light
//! sRGB is the hub: each type only has to know how to get to and from [`LinearSrgbColor`], and
//! [`Color::convert`] chains two of those conversions to get between any pair of types.
//!
//! Conversions never clamp. A color that is outside the sRGB gamut in one space stays outside it in
//! every other space, with channels below 0 or above 1 as appropriate.

use crate::colors::LinearSrgbColor;

/// A color representation that can be converted to and from linear-light sRGB, and thus to and from
/// any other `Color`.
/// # Example
///
/// ```
/// # use oklch::prelude::*;
/// let orange = SrgbColor::new(1.0, 0.5, 0.0, 1.0);
/// let lch: OklchColor = orange.convert();
/// let back: SrgbColor = lch.convert();
/// assert!((back.r - 1.0).abs() <= 1e-4);
/// assert!((back.g - 0.5).abs() <= 1e-4);
/// assert!(back.b.abs() <= 1e-4);
/// ```
pub trait Color: Sized {
    /// Converts from linear-light sRGB. The alpha channel is carried across unchanged.
    fn from_linear_srgb(linear: LinearSrgbColor) -> Self;
    /// Converts to linear-light sRGB. The alpha channel is carried across unchanged.
    fn to_linear_srgb(&self) -> LinearSrgbColor;
    /// Converts this color into any other `Color` by way of linear-light sRGB.
    fn convert<T: Color>(&self) -> T {
        T::from_linear_srgb(self.to_linear_srgb())
    }
}
