//! This module contains the types that implement [`Color`], one per color space along the
//! conversion pipeline. For convenience, each main type is imported into this module's namespace
//! directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod linearsrgbcolor;
pub mod oklabcolor;
pub mod oklchcolor;
pub mod srgbcolor;

// for convenience, use this namespace for the color objects
pub use self::linearsrgbcolor::LinearSrgbColor;
pub use self::oklabcolor::OklabColor;
pub use self::oklchcolor::OklchColor;
pub use self::srgbcolor::SrgbColor;
