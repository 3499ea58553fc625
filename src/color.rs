//! The [`Color`] value type and its pixel-level transforms.
//!
//! A `Color` is an immutable RGBA value: four channels, each an integer in
//! [0, 255]. The bounds are checked once, by the validating constructors, and
//! can never be violated afterwards because the channels are stored as `u8`
//! and no method mutates a live value. The three transforms (greyscale,
//! sepia, invert) each return a new `Color` and leave alpha untouched.
//!
//! # Example
//!
//! ```
//! use pixel_color::Color;
//!
//! let color = Color::new(10, 20, 30, 255)?;
//! assert_eq!(color.to_grey_scale(), Color::new(20, 20, 20, 255)?);
//! assert_eq!(color.invert().invert(), color);
//! # Ok::<(), pixel_color::Error>(())
//! ```

use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// Channel range and sepia weights
// ============================================================================

/// Maximum value of a color channel or the alpha component.
pub const CHANNEL_MAX: i32 = 255;

/// Sepia weights applied to `[red, green, blue]` to produce the new red.
pub const SEPIA_RED: [f64; 3] = [0.393, 0.769, 0.189];

/// Sepia weights applied to `[red, green, blue]` to produce the new green.
pub const SEPIA_GREEN: [f64; 3] = [0.349, 0.686, 0.168];

/// Sepia weights applied to `[red, green, blue]` to produce the new blue.
pub const SEPIA_BLUE: [f64; 3] = [0.272, 0.534, 0.131];

#[inline]
fn in_range(v: i32) -> bool {
    (0..=CHANNEL_MAX).contains(&v)
}

/// Weighted sum of the three channels, truncated toward zero.
///
/// Evaluated in `f64` and narrowed with an `as` cast so the truncation
/// semantics match the reference integer-cast behavior exactly. All weights
/// and inputs are non-negative, so the sum cannot go below zero in any
/// evaluation order.
#[inline]
fn sepia_channel(weights: [f64; 3], r: u8, g: u8, b: u8) -> u8 {
    let sum = weights[0] * f64::from(r) + weights[1] * f64::from(g) + weights[2] * f64::from(b);
    debug_assert!(sum >= 0.0);
    (sum as i32).min(CHANNEL_MAX) as u8
}

// ============================================================================
// Color
// ============================================================================

/// An immutable RGBA color value.
///
/// Each of the four components is an integer in [0, 255]. The range is
/// enforced by [`Color::new`]; once constructed, a `Color` never changes.
/// The fourth component is alpha, called "transparency" in some codebases.
///
/// Equality and hashing are structural over all four components.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`.
///
/// # Example
///
/// ```
/// use pixel_color::Color;
///
/// let teal = Color::new(0, 128, 128, 255)?;
/// assert_eq!(teal.green(), 128);
/// assert!(Color::new(256, 0, 0, 255).is_err());
/// # Ok::<(), pixel_color::Error>(())
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_channels(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Color = Color::from_channels(255, 255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::from_channels(0, 0, 0, 0);

    /// Creates a color from four validated channels.
    ///
    /// Private on purpose: `u8` inputs are always in range, so this skips the
    /// range check that [`Color::new`] performs on widened integers.
    #[inline]
    const fn from_channels(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a new color, validating all four components.
    ///
    /// Inputs are widened integers so out-of-range values can be reported
    /// rather than silently wrapped. Validation is atomic: on failure no
    /// instance is produced.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidColorComponent`] if `red`, `green`, or `blue` is
    ///   outside [0, 255]. Checked before alpha.
    /// - [`Error::InvalidAlpha`] if `alpha` is outside [0, 255].
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_color::Color;
    ///
    /// let color = Color::new(255, 155, 0, 200)?;
    /// assert_eq!(color.red(), 255);
    ///
    /// assert!(Color::new(-1, 0, 0, 255).is_err());
    /// assert!(Color::new(0, 0, 0, 300).is_err());
    /// # Ok::<(), pixel_color::Error>(())
    /// ```
    pub fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        if !in_range(red) || !in_range(green) || !in_range(blue) {
            return Err(Error::invalid_color_component(red, green, blue));
        }
        if !in_range(alpha) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self::from_channels(
            red as u8,
            green as u8,
            blue as u8,
            alpha as u8,
        ))
    }

    /// Creates a fully opaque color (alpha = 255).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorComponent`] if any channel is outside [0, 255].
    #[inline]
    pub fn opaque(red: i32, green: i32, blue: i32) -> Result<Self> {
        Self::new(red, green, blue, CHANNEL_MAX)
    }

    /// Creates a color from an array of already-in-range channels.
    ///
    /// Order: `[red, green, blue, alpha]`. Infallible because `u8` cannot
    /// hold an out-of-range value.
    #[inline]
    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self::from_channels(channels[0], channels[1], channels[2], channels[3])
    }

    /// Red channel value.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel value.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel value.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Alpha (transparency) value.
    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// All four components as an array `[red, green, blue, alpha]`.
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// All four components as a tuple `(red, green, blue, alpha)`.
    #[inline]
    pub const fn channels(&self) -> (u8, u8, u8, u8) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Averages the red, green, and blue channels, producing a grey color.
    ///
    /// The average is computed once on the sum of the three channels, with
    /// truncating integer division. Alpha is carried over unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_color::Color;
    ///
    /// let grey = Color::new(10, 20, 30, 255)?.to_grey_scale();
    /// assert_eq!(grey, Color::new(20, 20, 20, 255)?);
    /// # Ok::<(), pixel_color::Error>(())
    /// ```
    #[must_use]
    pub fn to_grey_scale(&self) -> Self {
        let avg = (i32::from(self.red) + i32::from(self.green) + i32::from(self.blue)) / 3;
        debug_assert!(in_range(avg));
        Self::from_channels(avg as u8, avg as u8, avg as u8, self.alpha)
    }

    /// Converts the color to a reddish-brown tone (sepia).
    ///
    /// Each new channel is a fixed weighted sum of the original three,
    /// truncated toward zero and clamped to 255. The weights are
    /// [`SEPIA_RED`], [`SEPIA_GREEN`], and [`SEPIA_BLUE`]. Alpha is carried
    /// over unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_color::Color;
    ///
    /// // All three weighted sums exceed 255 for white, so white stays white.
    /// assert_eq!(Color::WHITE.to_sepia(), Color::WHITE);
    /// ```
    #[must_use]
    pub fn to_sepia(&self) -> Self {
        let (r, g, b) = (self.red, self.green, self.blue);
        Self::from_channels(
            sepia_channel(SEPIA_RED, r, g, b),
            sepia_channel(SEPIA_GREEN, r, g, b),
            sepia_channel(SEPIA_BLUE, r, g, b),
            self.alpha,
        )
    }

    /// Complements each channel against 255, turning white to black.
    ///
    /// Alpha is carried over unchanged. Applying `invert` twice returns the
    /// original color.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_color::Color;
    ///
    /// let color = Color::new(0, 100, 255, 200)?;
    /// assert_eq!(color.invert(), Color::new(255, 155, 0, 200)?);
    /// # Ok::<(), pixel_color::Error>(())
    /// ```
    #[must_use]
    pub const fn invert(&self) -> Self {
        Self::from_channels(
            255 - self.red,
            255 - self.green,
            255 - self.blue,
            self.alpha,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color{{red={}, green={}, blue={}, alpha={}}}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn color(r: i32, g: i32, b: i32, a: i32) -> Color {
        Color::new(r, g, b, a).unwrap()
    }

    fn hash_of(color: Color) -> u64 {
        let mut hasher = DefaultHasher::new();
        color.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construction_returns_given_values() {
        let c = color(10, 20, 30, 40);
        assert_eq!(c.red(), 10);
        assert_eq!(c.green(), 20);
        assert_eq!(c.blue(), 30);
        assert_eq!(c.alpha(), 40);
        assert_eq!(c.to_array(), [10, 20, 30, 40]);
        assert_eq!(c.channels(), (10, 20, 30, 40));
    }

    #[test]
    fn test_construction_accepts_range_bounds() {
        assert!(Color::new(0, 0, 0, 0).is_ok());
        assert!(Color::new(255, 255, 255, 255).is_ok());
    }

    #[test]
    fn test_construction_rejects_out_of_range_channels() {
        for (r, g, b) in [(-1, 0, 0), (0, 256, 0), (0, 0, 1000), (-1, 256, 0)] {
            let err = Color::new(r, g, b, 255).unwrap_err();
            assert_eq!(err, Error::invalid_color_component(r, g, b));
        }
    }

    #[test]
    fn test_construction_rejects_out_of_range_alpha() {
        for a in [-1, 256, 300] {
            let err = Color::new(0, 0, 0, a).unwrap_err();
            assert_eq!(err, Error::invalid_alpha(a));
        }
    }

    #[test]
    fn test_channel_error_takes_precedence_over_alpha_error() {
        let err = Color::new(256, 0, 0, 300).unwrap_err();
        assert!(err.is_component_error());
    }

    #[test]
    fn test_opaque_and_constants() {
        assert_eq!(Color::opaque(1, 2, 3).unwrap(), color(1, 2, 3, 255));
        assert_eq!(Color::BLACK, color(0, 0, 0, 255));
        assert_eq!(Color::WHITE, color(255, 255, 255, 255));
        assert_eq!(Color::TRANSPARENT, color(0, 0, 0, 0));
        assert_eq!(Color::from_array([5, 6, 7, 8]), color(5, 6, 7, 8));
    }

    #[test]
    fn test_grey_scale_averages_channels() {
        assert_eq!(color(10, 20, 30, 255).to_grey_scale(), color(20, 20, 20, 255));
    }

    #[test]
    fn test_grey_scale_truncates() {
        // (1 + 1 + 2) / 3 = 1 with truncating division
        assert_eq!(color(1, 1, 2, 255).to_grey_scale(), color(1, 1, 1, 255));
        // (254 + 255 + 255) / 3 = 254
        assert_eq!(
            color(254, 255, 255, 0).to_grey_scale(),
            color(254, 254, 254, 0)
        );
    }

    #[test]
    fn test_grey_scale_is_idempotent() {
        for c in [color(10, 20, 30, 255), color(0, 0, 255, 17), Color::WHITE] {
            assert_eq!(c.to_grey_scale().to_grey_scale(), c.to_grey_scale());
        }
    }

    #[test]
    fn test_sepia_clamps_at_white() {
        // 0.393*255 + 0.769*255 + 0.189*255 = 348.345, clamped to 255;
        // green and blue sums clamp the same way.
        assert_eq!(Color::WHITE.to_sepia(), Color::WHITE);
    }

    #[test]
    fn test_sepia_truncates_toward_zero() {
        // Pure red: floor(0.393*100) = 39, floor(0.349*100) = 34,
        // floor(0.272*100) = 27.
        assert_eq!(color(100, 0, 0, 255).to_sepia(), color(39, 34, 27, 255));
        // Pure green: floor(0.769*200) = 153, floor(0.686*200) = 137,
        // floor(0.534*200) = 106.
        assert_eq!(color(0, 200, 0, 255).to_sepia(), color(153, 137, 106, 255));
    }

    #[test]
    fn test_sepia_stays_in_range_for_extremes() {
        for c in [
            Color::BLACK,
            Color::WHITE,
            color(255, 0, 0, 255),
            color(0, 255, 0, 255),
            color(0, 0, 255, 255),
            color(255, 255, 0, 1),
        ] {
            // Constructing from the result re-validates every channel.
            let s = c.to_sepia();
            assert!(
                Color::new(
                    s.red().into(),
                    s.green().into(),
                    s.blue().into(),
                    s.alpha().into()
                )
                .is_ok()
            );
        }
    }

    #[test]
    fn test_invert_example() {
        assert_eq!(color(0, 100, 255, 200).invert(), color(255, 155, 0, 200));
    }

    #[test]
    fn test_invert_is_involution() {
        for c in [Color::BLACK, Color::WHITE, color(1, 128, 254, 7)] {
            assert_eq!(c.invert().invert(), c);
        }
    }

    #[test]
    fn test_transforms_preserve_alpha() {
        let c = color(12, 34, 56, 78);
        assert_eq!(c.to_grey_scale().alpha(), 78);
        assert_eq!(c.to_sepia().alpha(), 78);
        assert_eq!(c.invert().alpha(), 78);
    }

    #[test]
    fn test_transforms_do_not_mutate_receiver() {
        let c = color(10, 20, 30, 40);
        let _ = c.to_grey_scale();
        let _ = c.to_sepia();
        let _ = c.invert();
        assert_eq!(c, color(10, 20, 30, 40));
    }

    #[test]
    fn test_equality_and_hash_are_structural() {
        let a = color(10, 20, 30, 40);
        let b = color(10, 20, 30, 40);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));

        for different in [
            color(11, 20, 30, 40),
            color(10, 21, 30, 40),
            color(10, 20, 31, 40),
            color(10, 20, 30, 41),
        ] {
            assert_ne!(a, different);
        }

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&color(0, 0, 0, 0)));
    }

    #[test]
    fn test_display_exposes_all_fields() {
        assert_eq!(
            color(1, 2, 3, 4).to_string(),
            "Color{red=1, green=2, blue=3, alpha=4}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = color(10, 20, 30, 40);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
