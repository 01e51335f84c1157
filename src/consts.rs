//! This file provides the two matrices that define the OKLab basis, along with their inverses. The
//! inverses are not computed: the published constants are used as-is so that every implementation
//! of OKLab agrees to the last digit. The tests check them against a numerical inverse, so a typo
//! in one of the 36 numbers below can't slip through.

use nalgebra::Matrix3;

/// Maps linear-light sRGB to the cone-response (LMS) space that OKLab is built on.
#[allow(non_snake_case)]
pub fn LINEAR_SRGB_TO_LMS() -> Matrix3<f32> {
    Matrix3::new(
        0.4122214708,
        0.5363325363,
        0.0514459929,
        0.2119034982,
        0.6806995451,
        0.1073969566,
        0.0883024619,
        0.2817188376,
        0.6299787005,
    )
}

/// Maps cube-rooted LMS responses to OKLab lightness and opponent axes.
#[allow(non_snake_case)]
pub fn LMS_TO_OKLAB() -> Matrix3<f32> {
    Matrix3::new(
        0.2104542553,
        0.7936177850,
        -0.0040720468,
        1.9779984951,
        -2.4285922050,
        0.4505937099,
        0.0259040371,
        0.7827717662,
        -0.8086757660,
    )
}

/// Inverse of [`LMS_TO_OKLAB`]: OKLab back to cube-rooted LMS.
#[allow(non_snake_case)]
pub fn OKLAB_TO_LMS() -> Matrix3<f32> {
    Matrix3::new(
        1.0,
        0.3963377774,
        0.2158037573,
        1.0,
        -0.1055613458,
        -0.0638541728,
        1.0,
        -0.0894841775,
        -1.2914855480,
    )
}

/// Inverse of [`LINEAR_SRGB_TO_LMS`]: LMS back to linear-light sRGB.
#[allow(non_snake_case)]
pub fn LMS_TO_LINEAR_SRGB() -> Matrix3<f32> {
    Matrix3::new(
        4.0767416621,
        -3.3077115913,
        0.2309699292,
        -1.2684380046,
        2.6097574011,
        -0.3413193965,
        -0.0041960863,
        -0.7034186147,
        1.7076147010,
    )
}
