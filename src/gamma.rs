//! The sRGB transfer function, one channel at a time. Nothing here clamps or validates: a channel
//! outside [0, 1] goes through the same formula as any other, and NaN in means NaN out. The typed
//! versions that work on whole colors are [`SrgbColor::to_linear`] and
//! [`LinearSrgbColor::to_encoded`].
//!
//! [`SrgbColor::to_linear`]: ../colors/srgbcolor/struct.SrgbColor.html#method.to_linear
//! [`LinearSrgbColor::to_encoded`]: ../colors/linearsrgbcolor/struct.LinearSrgbColor.html#method.to_encoded

/// Converts a gamma-encoded sRGB channel to linear light.
/// # Example
/// ```
/// # use oklch::gamma;
/// assert_eq!(gamma::decode(0.0), 0.0);
/// assert!((gamma::decode(0.5) - 0.21404).abs() <= 1e-5);
/// ```
pub fn decode(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear-light channel back to gamma-encoded sRGB. Inverse of [`decode`].
pub fn encode(c: f32) -> f32 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
