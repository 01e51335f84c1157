//! This module contains [`Angle`], the unit-carrying type used for hue. Hue is stored in radians,
//! because that is what the trigonometry wants, but it can be read and written in degrees just as
//! easily, so callers never have to remember which unit a bare `f32` was in.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, Neg, Sub};

/// A planar angle. Two angles are equal only if their radian values are equal: 0 and 2π are
/// different `Angle`s that describe the same direction. Use [`Angle::normalized`] to compare
/// directions.
/// # Example
/// ```
/// # use oklch::angle::Angle;
/// let quarter = Angle::degrees(90.);
/// assert!((quarter.to_radians() - std::f32::consts::FRAC_PI_2).abs() <= 1e-6);
/// let turned = quarter + Angle::radians(std::f32::consts::PI);
/// assert!((turned.to_degrees() - 270.).abs() <= 1e-4);
/// assert!((turned.normalized().to_degrees() + 90.).abs() <= 1e-4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// An angle of zero.
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Creates an angle from a value in radians.
    pub const fn radians(radians: f32) -> Angle {
        Angle { radians }
    }

    /// Creates an angle from a value in degrees.
    pub fn degrees(degrees: f32) -> Angle {
        Angle {
            radians: degrees.to_radians(),
        }
    }

    /// The angle in radians.
    pub fn to_radians(self) -> f32 {
        self.radians
    }

    /// The angle in degrees.
    pub fn to_degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    /// Sets the angle from a value in radians.
    pub fn set_radians(&mut self, radians: f32) {
        self.radians = radians;
    }

    /// Sets the angle from a value in degrees.
    pub fn set_degrees(&mut self, degrees: f32) {
        self.radians = degrees.to_radians();
    }

    /// The same direction expressed in (-π, π], the range `atan2` produces.
    pub fn normalized(self) -> Angle {
        // rem_euclid lands in [0, 2π), then shift the upper half down
        let wrapped = self.radians.rem_euclid(TAU);
        if wrapped > PI {
            Angle::radians(wrapped - TAU)
        } else {
            Angle::radians(wrapped)
        }
    }

    /// Sine and cosine at once, in that order.
    pub fn sin_cos(self) -> (f32, f32) {
        self.radians.sin_cos()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_degree_radian_agreement() {
        let a = Angle::degrees(180.);
        assert!((a.to_radians() - PI).abs() <= 1e-6);
        let b = Angle::radians(1.0);
        assert!((b.to_degrees() - 57.29578).abs() <= 1e-4);
    }

    #[test]
    fn test_setters() {
        let mut a = Angle::ZERO;
        a.set_degrees(-45.);
        assert!((a.to_radians() + PI / 4.).abs() <= 1e-6);
        a.set_radians(2.0);
        assert_eq!(a.to_radians(), 2.0);
    }

    #[test]
    fn test_normalized_range() {
        for deg in [-720., -540., -181., -180., -1., 0., 90., 180., 181., 359., 360., 725.] {
            let n = Angle::degrees(deg).normalized().to_radians();
            assert!(n > -PI - 1e-5 && n <= PI + 1e-5, "{} -> {}", deg, n);
        }
        assert!((Angle::degrees(270.).normalized().to_degrees() + 90.).abs() <= 1e-3);
        assert!((Angle::degrees(-90.).normalized().to_degrees() + 90.).abs() <= 1e-3);
        assert!((Angle::degrees(725.).normalized().to_degrees() - 5.).abs() <= 1e-3);
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::radians(1.5) - Angle::radians(0.5);
        assert_eq!(a, Angle::radians(1.0));
        assert_eq!(-a, Angle::radians(-1.0));
        assert_eq!(a + Angle::ZERO, a);
    }
}
