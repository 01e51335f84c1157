//! A module that implements the [OKLab color space](https://bottosson.github.io/posts/oklab/), a
//! perceptually uniform space with a lightness axis and two opponent color axes, in the same spirit
//! as CIELAB but computed directly from linear-light sRGB with two fixed matrices. The conversion
//! is: a matrix into cone responses (LMS), a cube root of each response, then a second matrix into
//! `l`, `a`, and `b`. The inverse undoes those three steps in reverse order.

use nalgebra::Vector3;

use super::linearsrgbcolor::LinearSrgbColor;
use crate::color::Color;
use crate::consts;

/// A color in the OKLab color space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OklabColor {
    /// Perceived lightness. 0 is black and 1 is the white of sRGB.
    pub l: f32,
    /// The green-red opponent axis: negative is green, positive is red. Colors in the sRGB gamut
    /// stay within about ±0.4.
    pub a: f32,
    /// The blue-yellow opponent axis: negative is blue, positive is yellow. Colors in the sRGB gamut
    /// stay within about ±0.4.
    pub b: f32,
    /// Opacity, carried along untouched.
    pub alpha: f32,
}

impl OklabColor {
    /// Creates a color from its lightness, opponent axes and opacity.
    pub fn new(l: f32, a: f32, b: f32, alpha: f32) -> OklabColor {
        OklabColor { l, a, b, alpha }
    }
}

impl Color for OklabColor {
    /// Converts linear-light sRGB to OKLab.
    fn from_linear_srgb(linear: LinearSrgbColor) -> OklabColor {
        let lms = consts::LINEAR_SRGB_TO_LMS() * Vector3::new(linear.r, linear.g, linear.b);
        // cbrt keeps the sign, unlike powf(1/3): saturated out-of-gamut colors give negative
        // responses here and must not turn into NaN
        let lms_ = lms.map(f32::cbrt);
        let lab = consts::LMS_TO_OKLAB() * lms_;
        OklabColor {
            l: lab.x,
            a: lab.y,
            b: lab.z,
            alpha: linear.alpha,
        }
    }
    /// Converts OKLab back to linear-light sRGB.
    fn to_linear_srgb(&self) -> LinearSrgbColor {
        let lms_ = consts::OKLAB_TO_LMS() * Vector3::new(self.l, self.a, self.b);
        let lms = lms_.map(|x| x * x * x);
        let rgb = consts::LMS_TO_LINEAR_SRGB() * lms;
        LinearSrgbColor {
            r: rgb.x,
            g: rgb.y,
            b: rgb.z,
            alpha: self.alpha,
        }
    }
}

impl From<LinearSrgbColor> for OklabColor {
    fn from(linear: LinearSrgbColor) -> OklabColor {
        OklabColor::from_linear_srgb(linear)
    }
}

impl From<OklabColor> for LinearSrgbColor {
    fn from(lab: OklabColor) -> LinearSrgbColor {
        lab.to_linear_srgb()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn assert_lab(lab: OklabColor, l: f32, a: f32, b: f32) {
        assert!((lab.l - l).abs() <= 1e-3, "l: {} vs {}", lab.l, l);
        assert!((lab.a - a).abs() <= 1e-3, "a: {} vs {}", lab.a, a);
        assert!((lab.b - b).abs() <= 1e-3, "b: {} vs {}", lab.b, b);
    }

    #[test]
    fn test_reference_values() {
        // linear sRGB primaries against the published OKLab values
        let red = OklabColor::from(LinearSrgbColor::new(1., 0., 0., 1.));
        assert_lab(red, 0.627955, 0.224863, 0.125846);
        let green = OklabColor::from(LinearSrgbColor::new(0., 1., 0., 1.));
        assert_lab(green, 0.866440, -0.233888, 0.179498);
        let blue = OklabColor::from(LinearSrgbColor::new(0., 0., 1., 1.));
        assert_lab(blue, 0.452014, -0.032457, -0.311528);
    }

    #[test]
    fn test_white_and_black() {
        let white = OklabColor::from(LinearSrgbColor::new(1., 1., 1., 1.));
        assert_lab(white, 1.0, 0.0, 0.0);
        let black = OklabColor::from(LinearSrgbColor::new(0., 0., 0., 1.));
        assert_eq!(black.l, 0.0);
        assert_eq!(black.a, 0.0);
        assert_eq!(black.b, 0.0);
    }

    #[test]
    fn test_linear_round_trip() {
        let linear = LinearSrgbColor::new(0.3, 0.6, 0.1, 0.8);
        let back: LinearSrgbColor = OklabColor::from(linear).into();
        assert!((back.r - linear.r).abs() <= 1e-5);
        assert!((back.g - linear.g).abs() <= 1e-5);
        assert!((back.b - linear.b).abs() <= 1e-5);
        assert_eq!(back.alpha, 0.8);
    }

    #[test]
    fn test_negative_cone_response_keeps_sign() {
        // strongly negative red drives the L response below zero; a naive powf(1/3) would give NaN
        let linear = LinearSrgbColor::new(-0.5, 0.05, 0.05, 1.);
        let lms = consts::LINEAR_SRGB_TO_LMS() * Vector3::new(linear.r, linear.g, linear.b);
        assert!(lms.x < 0.0);
        let lab = OklabColor::from(linear);
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
        let back = lab.to_linear_srgb();
        assert!((back.r - linear.r).abs() <= 1e-4);
        assert!((back.g - linear.g).abs() <= 1e-4);
        assert!((back.b - linear.b).abs() <= 1e-4);
    }

    #[test]
    fn test_negative_lms_from_oklab_side() {
        // a saturated green OKLab value whose cube-rooted S response is negative
        let lab = OklabColor::new(0.2, -0.4, 0.2, 1.);
        let linear = lab.to_linear_srgb();
        assert!(linear.r.is_finite() && linear.g.is_finite() && linear.b.is_finite());
        let back = OklabColor::from(linear);
        assert!((back.l - lab.l).abs() <= 1e-4);
        assert!((back.a - lab.a).abs() <= 1e-4);
        assert!((back.b - lab.b).abs() <= 1e-4);
    }
}
