/// "Magic string" identifying an imretro stream.
pub const SIGNATURE: [u8; 7] = *b"IMRETRO";

/// Signature plus the mode byte.
pub const HEADER_SIZE: usize = SIGNATURE.len() + 1;
pub const DIMENSION_SIZE: usize = std::mem::size_of::<u16>();
pub const COLOR_SIZE: usize = 4;

/// Top two bits of the mode byte.
pub const BIT_DEPTH_MASK: u8 = 0b1100_0000;
/// Set in the mode byte when a palette follows the dimensions.
pub const PALETTE_FLAG: u8 = 0b0010_0000;

pub const MAX_DIMENSION: u32 = u16::MAX as u32;
