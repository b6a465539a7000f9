//! The value/color model.
//!
//! A working-array element is a plain `u32` that doubles as a pixel color:
//! the three most significant bytes are the red, green and blue channel
//! intensities, and the least significant byte is unused by the color model
//! (the file-oriented sink owns the per-pixel terminator instead).
//!
//! All comparisons in the sorting engine go through [`sort_key`]; algorithms
//! never compare raw values.

/// Opaque RGB8 color extracted from a working-array value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Rgb8 {
    /// Extract the top three bytes of `value` as color channels.
    ///
    /// Explicit shift/mask accessors keep this independent of platform byte
    /// order.
    pub fn from_value(value: u32) -> Self {
        Self {
            r: ((value >> 24) & 0xFF) as u8,
            g: ((value >> 16) & 0xFF) as u8,
            b: ((value >> 8) & 0xFF) as u8,
        }
    }
}

/// Derived scalar every comparison predicate operates on: `(r + 2g) / 3`
/// with truncating integer division.
///
/// Green is double-weighted. That is not a luminance average and not a bug;
/// the formula is asymmetric by construction and kept for output
/// compatibility.
pub fn sort_key(value: u32) -> u32 {
    let c = Rgb8::from_value(value);
    (u32::from(c.r) + 2 * u32::from(c.g)) / 3
}
