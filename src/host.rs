//! The seam between this crate and a UI toolkit's own color type. A toolkit only has to say how to
//! read four gamma-encoded sRGB components out of its color, and how to build one from four
//! components; [`HostColor`] then supplies the OKLCH conversions in both directions.
//!
//! Reading components is allowed to fail, since some toolkits can't report RGBA for every color
//! (pattern colors, colors in a different color space, and so on). A failure is an absence, not an
//! error: [`HostColor::oklch`] returns `None` and logs the event at debug level.

use crate::colors::{OklchColor, SrgbColor};
use crate::pipeline;

/// A toolkit color that can be bridged to and from OKLCH.
/// # Example
///
/// ```
/// # use oklch::host::HostColor;
/// # use oklch::prelude::*;
/// # use oklch::angle::Angle;
/// struct Swatch([f32; 4]);
///
/// impl HostColor for Swatch {
///     fn rgba(&self) -> Option<[f32; 4]> {
///         Some(self.0)
///     }
///     fn from_rgba(rgba: [f32; 4]) -> Swatch {
///         Swatch(rgba)
///     }
/// }
///
/// let sky = Swatch::from_oklch(&OklchColor::new(0.75, 0.1, Angle::degrees(240.), None));
/// assert_eq!(sky.0[3], 1.0);
/// let lch = sky.oklch().unwrap();
/// assert!((lch.hue.to_degrees() + 120.).abs() <= 0.1);
/// ```
pub trait HostColor: Sized {
    /// The color's gamma-encoded `[red, green, blue, opacity]`, or `None` if the host can't report
    /// them.
    fn rgba(&self) -> Option<[f32; 4]>;

    /// Builds a host color from gamma-encoded `[red, green, blue, opacity]`. Components may lie
    /// outside [0, 1] for out-of-gamut colors; what to do with them is up to the host.
    fn from_rgba(rgba: [f32; 4]) -> Self;

    /// Reads this color as OKLCH. The result's opacity is always present.
    fn oklch(&self) -> Option<OklchColor> {
        match self.rgba() {
            Some([r, g, b, opacity]) => {
                let color = pipeline::from_srgb(r, g, b, opacity);
                tracing::trace!(r, g, b, opacity, ?color, "read host color as oklch");
                Some(color)
            }
            None => {
                tracing::debug!("host color did not report rgba components");
                None
            }
        }
    }

    /// Builds a host color from an OKLCH color. A color without opacity is built opaque.
    fn from_oklch(color: &OklchColor) -> Self {
        let (r, g, b, opacity) = pipeline::to_srgb(color);
        tracing::trace!(?color, r, g, b, opacity, "built host color from oklch");
        Self::from_rgba([r, g, b, opacity])
    }
}

impl HostColor for [f32; 4] {
    fn rgba(&self) -> Option<[f32; 4]> {
        Some(*self)
    }
    fn from_rgba(rgba: [f32; 4]) -> [f32; 4] {
        rgba
    }
}

impl HostColor for (f32, f32, f32, f32) {
    fn rgba(&self) -> Option<[f32; 4]> {
        Some([self.0, self.1, self.2, self.3])
    }
    fn from_rgba([r, g, b, a]: [f32; 4]) -> (f32, f32, f32, f32) {
        (r, g, b, a)
    }
}

impl HostColor for SrgbColor {
    fn rgba(&self) -> Option<[f32; 4]> {
        Some(self.to_array())
    }
    fn from_rgba(rgba: [f32; 4]) -> SrgbColor {
        SrgbColor::from(rgba)
    }
}

/// A raw component buffer, as handed over by hosts that report a variable number of components.
/// Three components are read as an opaque color; any other length than three or four can't be
/// read.
impl HostColor for Vec<f32> {
    fn rgba(&self) -> Option<[f32; 4]> {
        match SrgbColor::try_from(self.as_slice()) {
            Ok(color) => Some(color.to_array()),
            Err(err) => {
                tracing::debug!(%err, "unreadable component buffer");
                None
            }
        }
    }
    fn from_rgba(rgba: [f32; 4]) -> Vec<f32> {
        rgba.to_vec()
    }
}
