//! Error types for color construction.
//!
//! Both variants of [`Error`] are raised only by the validating constructors
//! on [`Color`](crate::Color); every other operation on a live `Color` is
//! infallible because the [0, 255] invariant is established at construction
//! and the type is immutable.
//!
//! # Usage
//!
//! ```rust
//! use pixel_color::Color;
//!
//! let err = Color::new(300, 0, 0, 255).unwrap_err();
//! assert!(err.is_component_error());
//! assert!(err.to_string().contains("300"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing a [`Color`](crate::Color).
///
/// The two variants are deliberately distinct: invalid color channels and
/// invalid transparency are separate failure conditions, and each carries the
/// offending values for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more of the red, green, or blue channels is outside [0, 255].
    ///
    /// Carries all three channel values as given by the caller so the
    /// diagnostic shows the full input, not just the offending channel.
    #[error(
        "invalid color values, red, green, and blue must be between 0 and 255: \
         {{red: {red}, green: {green}, blue: {blue}}}"
    )]
    InvalidColorComponent {
        /// Red value as given by the caller
        red: i32,
        /// Green value as given by the caller
        green: i32,
        /// Blue value as given by the caller
        blue: i32,
    },

    /// The alpha (transparency) value is outside [0, 255].
    #[error("invalid transparency value, must be between 0 and 255: {alpha}")]
    InvalidAlpha {
        /// Alpha value as given by the caller
        alpha: i32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidColorComponent`] error.
    #[inline]
    pub fn invalid_color_component(red: i32, green: i32, blue: i32) -> Self {
        Self::InvalidColorComponent { red, green, blue }
    }

    /// Creates an [`Error::InvalidAlpha`] error.
    #[inline]
    pub fn invalid_alpha(alpha: i32) -> Self {
        Self::InvalidAlpha { alpha }
    }

    /// Returns `true` if this is a red/green/blue channel error.
    #[inline]
    pub fn is_component_error(&self) -> bool {
        matches!(self, Self::InvalidColorComponent { .. })
    }

    /// Returns `true` if this is an alpha (transparency) error.
    #[inline]
    pub fn is_alpha_error(&self) -> bool {
        matches!(self, Self::InvalidAlpha { .. })
    }
}
