use serde::{Deserialize, Serialize};

use super::{Color, BLACK, DARK_GRAY, LIGHT_GRAY, WHITE};

/// An ordered list of colors. A pixel's stored value is an index into it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>, // Insertion order is index order
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Returns the color at `index`, or `None` past the end of the palette.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Black and white.
    pub fn one_bit_default() -> Self {
        Self::new(vec![BLACK, WHITE])
    }

    /// Four evenly spaced grays.
    pub fn two_bit_default() -> Self {
        Self::new(vec![BLACK, DARK_GRAY, LIGHT_GRAY, WHITE])
    }

    /// 256 colors covering every combination of 2-bit R, G, B and A levels.
    pub fn eight_bit_default() -> Self {
        (0..=u8::MAX).map(eight_bit_default_color).collect()
    }
}

/// Default 8-bit palette entry for index `n`.
///
/// Bits 0-1 select red, 2-3 green, 4-5 blue and 6-7 alpha. Each 2-bit level is
/// spread over the whole byte so the levels land on 0x00, 0x55, 0xAA and 0xFF.
pub fn eight_bit_default_color(n: u8) -> Color {
    Color::rgba(
        spread_level(n & 0b11),
        spread_level((n >> 2) & 0b11),
        spread_level((n >> 4) & 0b11),
        spread_level(n >> 6),
    )
}

fn spread_level(level: u8) -> u8 {
    level * 0x55
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
