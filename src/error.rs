//! Errors for the few places that take untrusted input: raw component buffers handed over by a host.
//! The conversions themselves are total and have no error type.

use thiserror::Error;

/// An error in reading a color out of a raw component buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum ComponentError {
    /// The buffer did not hold red, green, blue and an optional opacity.
    #[error("expected 3 or 4 color components, got {found}")]
    WrongComponentCount {
        /// The number of components the buffer actually held.
        found: usize,
    },
}
