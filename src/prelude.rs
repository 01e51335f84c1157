//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the [`Color`] and [`HostColor`] traits and the four color types. [`Angle`],
//! the end-to-end [`pipeline`] functions and the scalar [`gamma`] functions are not included.
//!
//! [`Angle`]: ../angle/struct.Angle.html
//! [`pipeline`]: ../pipeline/index.html
//! [`gamma`]: ../gamma/index.html

pub use crate::color::Color;
pub use crate::colors::{LinearSrgbColor, OklabColor, OklchColor, SrgbColor};
pub use crate::host::HostColor;
