pub mod model;
pub mod palette;

use serde::{Deserialize, Serialize};

/// A straight (non-premultiplied) RGBA color, one byte per channel.
///
/// This is the layout palette entries have on disk: four bytes in R, G, B, A
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Fully transparent color returned for out-of-range pixel or palette lookups.
pub const NO_COLOR: Color = Color::rgba(0, 0, 0, 0);

pub const BLACK: Color = Color::gray(0);
/// 25% light.
pub const DARKER_GRAY: Color = Color::gray(64);
/// 33% light. Splits a monochrome range into 4 parts together with `LIGHT_GRAY`.
pub const DARK_GRAY: Color = Color::gray(85);
pub const MEDIUM_GRAY: Color = Color::gray(128);
/// 66% light.
pub const LIGHT_GRAY: Color = Color::gray(170);
/// 75% light.
pub const LIGHTER_GRAY: Color = Color::gray(192);
pub const WHITE: Color = Color::gray(255);

/// Truncates a 16-bit channel to its top 8 bits.
///
/// This is a plain shift, not a rounding conversion.
pub const fn channel_as_byte(channel: u16) -> u8 {
    (channel >> 8) as u8
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with every color channel set to `y`.
    pub const fn gray(y: u8) -> Self {
        Self::rgba(y, y, y, 0xFF)
    }

    /// Builds a color from 16-bit channels, keeping the top byte of each.
    pub const fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self::rgba(
            channel_as_byte(r),
            channel_as_byte(g),
            channel_as_byte(b),
            channel_as_byte(a),
        )
    }

    pub const fn as_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Reads a color from exactly 4 bytes, `None` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let [r, g, b, a]: [u8; 4] = bytes.try_into().ok()?;
        Some(Self::rgba(r, g, b, a))
    }

    /// Bitwise OR of the three color channels.
    pub const fn brightness(self) -> u8 {
        self.r | self.g | self.b
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_truncates() {
        assert_eq!(channel_as_byte(0xFFFF), 0xFF);
        assert_eq!(channel_as_byte(0x80FF), 0x80);
        assert_eq!(channel_as_byte(0x00FF), 0x00);
    }

    #[test]
    fn test_from_rgba16() {
        let color = Color::from_rgba16(0x1234, 0xABCD, 0x00FF, 0xFFFF);
        assert_eq!(color, Color::rgba(0x12, 0xAB, 0x00, 0xFF));
    }

    #[test]
    fn test_bytes() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(color.as_bytes(), [1, 2, 3, 4]);
        assert_eq!(Color::from_bytes(&[1, 2, 3, 4]), Some(color));
        assert_eq!(Color::from([1, 2, 3, 4]), color);
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        assert_eq!(Color::from_bytes(&[1, 2, 3]), None);
        assert_eq!(Color::from_bytes(&[1, 2, 3, 4, 5]), None);
        assert_eq!(Color::from_bytes(&[]), None);
    }

    #[test]
    fn test_no_color_is_transparent() {
        assert_eq!(NO_COLOR.a, 0);
        assert_eq!(NO_COLOR, Color::default());
    }
}
