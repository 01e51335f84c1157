//! The two end-to-end conversions, for callers that deal in raw components rather than color types.
//! Each one runs the three stages in order: gamma, the OKLab matrices, and the polar transform.
//! Nothing is clamped along the way, so colors outside the sRGB gamut come back with channels
//! outside [0, 1]; clamp afterwards if the result has to be displayable.

use crate::color::Color;
use crate::colors::{OklabColor, OklchColor, SrgbColor};

/// Converts gamma-encoded sRGB channels and an opacity to OKLCH. The result always has
/// `Some(opacity)`.
/// # Example
/// ```
/// # use oklch::pipeline;
/// let red = pipeline::from_srgb(1., 0., 0., 1.);
/// assert!((red.lightness - 0.628).abs() <= 1e-3);
/// assert!((red.chroma - 0.258).abs() <= 1e-3);
/// assert!((red.hue.to_degrees() - 29.23).abs() <= 1e-1);
/// ```
pub fn from_srgb(r: f32, g: f32, b: f32, opacity: f32) -> OklchColor {
    let linear = SrgbColor::new(r, g, b, opacity).to_linear();
    OklchColor::from_oklab(OklabColor::from(linear))
}

/// Converts an OKLCH color to gamma-encoded `(r, g, b, opacity)`. An absent opacity comes back as
/// 1.
pub fn to_srgb(color: &OklchColor) -> (f32, f32, f32, f32) {
    let linear = color.to_oklab().to_linear_srgb();
    let SrgbColor { r, g, b, alpha } = linear.to_encoded();
    (r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::angle::Angle;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn test_white() {
        let white = from_srgb(1., 1., 1., 1.);
        assert!((white.lightness - 1.0).abs() <= 1e-3);
        assert!(white.chroma <= 1e-3);
    }

    #[test]
    fn test_black() {
        let black = from_srgb(0., 0., 0., 1.);
        assert!(black.lightness.abs() <= 1e-3);
        assert!(black.chroma <= 1e-3);
    }

    #[test]
    fn test_primaries() {
        // published OKLCH values for the sRGB primaries, hues in degrees
        let cases = [
            ((1., 0., 0.), (0.627955, 0.257683, 29.2339)),
            ((0., 1., 0.), (0.866440, 0.294827, 142.4953)),
            ((0., 0., 1.), (0.452014, 0.313214, -95.9465)),
        ];
        for &((r, g, b), (l, c, h)) in cases.iter() {
            let lch = from_srgb(r, g, b, 1.);
            assert!((lch.lightness - l).abs() <= 1e-3, "{:?}", lch);
            assert!((lch.chroma - c).abs() <= 1e-3, "{:?}", lch);
            assert!((lch.hue.to_degrees() - h).abs() <= 0.1, "{:?}", lch);
        }
    }

    #[test]
    fn test_grays_are_achromatic() {
        for i in 0..=20 {
            let v = i as f32 / 20.;
            let gray = from_srgb(v, v, v, 1.);
            assert!(gray.chroma <= 1e-4, "{} -> {:?}", v, gray);
        }
    }

    #[test]
    fn test_oklch_round_trip() {
        let original = OklchColor::new(0.5, 0.1, Angle::radians(1.0), None);
        let (r, g, b, opacity) = to_srgb(&original);
        assert_eq!(opacity, 1.0);
        let back = from_srgb(r, g, b, opacity);
        assert!((back.lightness - 0.5).abs() <= 1e-3);
        assert!((back.chroma - 0.1).abs() <= 1e-3);
        assert!((back.hue.to_radians() - 1.0).abs() <= 1e-3);
        assert!(approx_eq!(OklchColor, original, back, epsilon = 1e-4));
    }

    #[test]
    fn test_opacity_passes_through() {
        let c = from_srgb(0.2, 0.4, 0.6, 0.35);
        assert_eq!(c.opacity, Some(0.35));
        assert_eq!(to_srgb(&c).3, 0.35);
    }

    #[test]
    fn test_out_of_gamut_is_not_clamped() {
        // far more chroma than sRGB can show at this hue
        let vivid = OklchColor::new(0.6, 0.4, Angle::degrees(150.), Some(1.));
        let (r, g, b, _) = to_srgb(&vivid);
        assert!(r < 0.0 || g > 1.0 || b < 0.0, "{} {} {}", r, g, b);
        let back = from_srgb(r, g, b, 1.);
        assert!(approx_eq!(OklchColor, vivid, back, epsilon = 1e-4));
    }

    #[test]
    fn test_matches_trait_conversion() {
        let srgb = SrgbColor::new(0.8, 0.3, 0.55, 0.9);
        let via_trait: OklchColor = srgb.convert();
        let via_pipeline = from_srgb(0.8, 0.3, 0.55, 0.9);
        assert_eq!(via_trait, via_pipeline);
    }

    proptest! {
        #[test]
        fn srgb_round_trip(
            r in 0.0_f32..=1.0,
            g in 0.0_f32..=1.0,
            b in 0.0_f32..=1.0,
            opacity in 0.0_f32..=1.0,
        ) {
            let (r2, g2, b2, o2) = to_srgb(&from_srgb(r, g, b, opacity));
            prop_assert!((r2 - r).abs() <= 1e-4, "r: {} vs {}", r2, r);
            prop_assert!((g2 - g).abs() <= 1e-4, "g: {} vs {}", g2, g);
            prop_assert!((b2 - b).abs() <= 1e-4, "b: {} vs {}", b2, b);
            prop_assert_eq!(o2, opacity);
        }
    }
}
