//! Conversions between sRGB and OKLCH, the perceptually uniform lightness/chroma/hue model built on
//! [OKLab](https://bottosson.github.io/posts/oklab/). The point is to let colors be picked and
//! edited in a space where equal steps look like equal steps, while still drawing them with plain
//! sRGB.
//!
//! A conversion from sRGB runs in three stages, each with its own type so that the output of one
//! stage can't be fed to the wrong one:
//!
//! 1. [`SrgbColor`] to [`LinearSrgbColor`]: undo the sRGB transfer function ([`gamma`]).
//! 2. [`LinearSrgbColor`] to [`OklabColor`]: two fixed matrices around a cube root.
//! 3. [`OklabColor`] to [`OklchColor`]: Cartesian to polar.
//!
//! Going back runs the inverse of each stage in reverse order. Opacity rides along untouched. No
//! stage clamps anything: colors that sRGB can't show come back with channels outside [0, 1].
//!
//! [`SrgbColor`]: colors/srgbcolor/struct.SrgbColor.html
//! [`LinearSrgbColor`]: colors/linearsrgbcolor/struct.LinearSrgbColor.html
//! [`OklabColor`]: colors/oklabcolor/struct.OklabColor.html
//! [`OklchColor`]: colors/oklchcolor/struct.OklchColor.html
//! [`gamma`]: gamma/index.html
//!
//! # Example
//!
//! ```
//! use oklch::prelude::*;
//! use oklch::pipeline;
//!
//! // a slightly lighter, less saturated version of an sRGB orange
//! let orange = pipeline::from_srgb(1.0, 0.55, 0.1, 1.0);
//! let softer = orange.with(|c| {
//!     c.lightness += 0.05;
//!     c.chroma *= 0.8;
//! });
//! let (r, g, b, a) = pipeline::to_srgb(&softer);
//! assert!(r > 0.9 && g > 0.55 && b > 0.1);
//! assert_eq!(a, 1.0);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]
// the matrix constants are written out to the published number of digits
#![allow(clippy::excessive_precision)]

pub mod angle;
pub mod color;
pub mod colors;
mod consts;
pub mod error;
pub mod gamma;
pub mod host;
pub mod pipeline;
pub mod prelude;
