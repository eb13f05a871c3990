use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::palette::Palette;
use super::{Color, NO_COLOR};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported bit-depth code: {0:#010b}")]
pub struct UnsupportedBitDepth(pub u8);

/// Bits used to store one pixel's palette index.
///
/// The discriminant is the code the mode byte carries in its top two bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BitDepth {
    One = 0b0000_0000,
    Two = 0b0100_0000,
    Eight = 0b1000_0000,
}

impl BitDepth {
    pub const ALL: [BitDepth; 3] = [BitDepth::One, BitDepth::Two, BitDepth::Eight];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Eight => 8,
        }
    }

    /// Number of palette entries an in-file palette holds at this depth.
    pub const fn palette_size(self) -> usize {
        1 << self.bits()
    }

    /// Bytes needed for `pixels` packed indices, the last byte zero padded.
    pub const fn plane_len(self, pixels: usize) -> usize {
        (pixels * self.bits() as usize).div_ceil(8)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = UnsupportedBitDepth;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        BitDepth::ALL
            .into_iter()
            .find(|depth| depth.code() == code)
            .ok_or(UnsupportedBitDepth(code))
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A palette tagged with the bit depth whose quantization rule applies to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorModel {
    OneBit(Palette),
    TwoBit(Palette),
    EightBit(Palette),
}

impl ColorModel {
    pub fn new(depth: BitDepth, palette: Palette) -> Self {
        match depth {
            BitDepth::One => ColorModel::OneBit(palette),
            BitDepth::Two => ColorModel::TwoBit(palette),
            BitDepth::Eight => ColorModel::EightBit(palette),
        }
    }

    /// Picks the depth from the palette length: up to 2 colors is 1-bit, up
    /// to 4 is 2-bit, anything larger is 8-bit.
    pub fn from_palette(palette: Palette) -> Self {
        let depth = match palette.len() {
            0..=2 => BitDepth::One,
            3..=4 => BitDepth::Two,
            _ => BitDepth::Eight,
        };
        Self::new(depth, palette)
    }

    /// The built-in model for `depth`.
    pub fn default_for(depth: BitDepth) -> Self {
        let palette = match depth {
            BitDepth::One => Palette::one_bit_default(),
            BitDepth::Two => Palette::two_bit_default(),
            BitDepth::Eight => Palette::eight_bit_default(),
        };
        Self::new(depth, palette)
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self {
            ColorModel::OneBit(_) => BitDepth::One,
            ColorModel::TwoBit(_) => BitDepth::Two,
            ColorModel::EightBit(_) => BitDepth::Eight,
        }
    }

    pub fn palette(&self) -> &Palette {
        match self {
            ColorModel::OneBit(palette)
            | ColorModel::TwoBit(palette)
            | ColorModel::EightBit(palette) => palette,
        }
    }

    pub fn into_palette(self) -> Palette {
        match self {
            ColorModel::OneBit(palette)
            | ColorModel::TwoBit(palette)
            | ColorModel::EightBit(palette) => palette,
        }
    }

    /// Quantizes `color` to a palette index.
    ///
    /// The rule only depends on the variant, never on the palette contents.
    pub fn index(&self, color: Color) -> u8 {
        match self {
            ColorModel::OneBit(_) => one_bit_index(color),
            ColorModel::TwoBit(_) => two_bit_index(color),
            ColorModel::EightBit(_) => eight_bit_index(color),
        }
    }

    /// Looks up a palette entry, falling back to `NO_COLOR` for indices the
    /// palette doesn't cover.
    pub fn color_at(&self, index: u8) -> Color {
        self.palette().get(index as usize).unwrap_or(NO_COLOR)
    }

    /// Maps `color` to the palette entry it quantizes to.
    pub fn convert(&self, color: Color) -> Color {
        self.color_at(self.index(color))
    }
}

// Bright and at least half opaque is "on".
fn one_bit_index(color: Color) -> u8 {
    let is_bright = color.brightness() >= 0x80 && color.a >= 0x80;
    u8::from(is_bright)
}

fn two_bit_index(color: Color) -> u8 {
    if color.a < 0x80 {
        return 0;
    }
    color.brightness() >> 6
}

fn eight_bit_index(color: Color) -> u8 {
    (color.r >> 6) | ((color.g >> 6) << 2) | ((color.b >> 6) << 4) | ((color.a >> 6) << 6)
}

/// Default color models per bit depth, used when a file carries no palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMap {
    pub one_bit: ColorModel,
    pub two_bit: ColorModel,
    pub eight_bit: ColorModel,
}

impl ModelMap {
    pub fn get(&self, depth: BitDepth) -> &ColorModel {
        match depth {
            BitDepth::One => &self.one_bit,
            BitDepth::Two => &self.two_bit,
            BitDepth::Eight => &self.eight_bit,
        }
    }

    /// Replaces the entry for the model's own bit depth.
    pub fn with(mut self, model: ColorModel) -> Self {
        match model.bit_depth() {
            BitDepth::One => self.one_bit = model,
            BitDepth::Two => self.two_bit = model,
            BitDepth::Eight => self.eight_bit = model,
        }
        self
    }
}

impl Default for ModelMap {
    fn default() -> Self {
        Self {
            one_bit: ColorModel::default_for(BitDepth::One),
            two_bit: ColorModel::default_for(BitDepth::Two),
            eight_bit: ColorModel::default_for(BitDepth::Eight),
        }
    }
}
