//! Packed 24-bit colors.
//!
//! A [`Color`] is a `0xRRGGBB` value. [`Color::NONE`] means "all channels
//! off" and doubles as the terminator of a [`ColorSequence`](crate::ColorSequence).
//!
//! Conversions to and from `palette::Srgb<u8>` are provided for code that
//! already works with palette's 8-bit RGB type.

use palette::Srgb;

/// A packed `0xRRGGBB` color.
///
/// Only the low 24 bits are significant; constructors mask anything above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

impl Color {
    /// All channels off. Also terminates a color sequence.
    pub const NONE: Color = Color(0x00_0000);
    pub const RED: Color = Color(0xFF_0000);
    pub const GREEN: Color = Color(0x00_FF00);
    pub const BLUE: Color = Color(0x00_00FF);
    pub const MAGENTA: Color = Color(0xFF_00FF);
    pub const YELLOW: Color = Color(0xFF_FF00);
    pub const CYAN: Color = Color(0x00_FFFF);
    pub const WHITE: Color = Color(0xFF_FFFF);
    pub const ORANGE: Color = Color(0xFF_A500);
    pub const PURPLE: Color = Color(0x80_0080);

    /// Creates a color from a packed value, discarding bits above 23.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Color(packed & 0xFF_FFFF)
    }

    /// Creates a color from its three 8-bit components.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Bits 23–16.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Bits 15–8.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Bits 7–0.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True for [`Color::NONE`].
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Color::NONE.0
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::new(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.packed()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
