//! # pixel-color
//!
//! A bounds-checked, immutable RGBA color value type.
//!
//! This crate provides one thing: [`Color`], a four-component pixel value
//! whose channels are validated into [0, 255] at construction and can never
//! leave that range afterwards. On top of the value type sit three pure
//! pixel-level transforms:
//!
//! - [`Color::to_grey_scale`] - channel average with truncating division
//! - [`Color::to_sepia`] - fixed-weight reddish-brown recombination
//! - [`Color::invert`] - per-channel complement against 255
//!
//! Every transform returns a new `Color` and leaves the alpha component
//! untouched; nothing mutates a live value.
//!
//! ```
//! use pixel_color::prelude::*;
//!
//! let color = Color::new(10, 20, 30, 255)?;
//! assert_eq!(color.to_grey_scale(), Color::new(20, 20, 20, 255)?);
//! assert_eq!(color.invert().invert(), color);
//! assert!(Color::new(256, 0, 0, 255).is_err());
//! # Ok::<(), pixel_color::Error>(())
//! ```
//!
//! ## Scope
//!
//! Bulk pixel buffers, image I/O, and color-space conversions are out of
//! scope; callers hold `Color` values in whatever container suits them
//! (`Color` is `Copy` and 4 bytes, so arrays and grids are cheap).
//!
//! ## Feature Flags
//!
//! - `serde` - Enable `Serialize`/`Deserialize` for [`Color`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;

pub use color::{CHANNEL_MAX, Color, SEPIA_BLUE, SEPIA_GREEN, SEPIA_RED};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixel_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{CHANNEL_MAX, Color};
    pub use crate::error::{Error, Result};
}
