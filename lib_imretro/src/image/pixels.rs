use log::debug;

use super::source::ImageSource;
use crate::color::model::{BitDepth, ColorModel};

/// Extracts the palette index stored for pixel `(x, y)`.
///
/// Indices are packed in raster order, most significant bits first. Returns
/// `None` when the buffer is too short to hold the pixel. Bounds against the
/// image's width and height are the caller's concern.
pub fn index_at(x: usize, y: usize, width: usize, depth: BitDepth, buffer: &[u8]) -> Option<u8> {
    let offset = y * width + x;

    match depth {
        BitDepth::One => {
            let byte = *buffer.get(offset / 8)?;
            let bit_pos = offset % 8;
            Some((byte >> (7 - bit_pos)) & 0b1)
        }
        BitDepth::Two => {
            let byte = *buffer.get(offset / 4)?;
            let bit_pos = (offset % 4) * 2;
            Some((byte >> (6 - bit_pos)) & 0b11)
        }
        BitDepth::Eight => buffer.get(offset).copied(),
    }
}

/// Packs palette indices into bytes, most significant bits first.
pub struct IndexPacker {
    bits: u8,
    mask: u8,
    used: u8, // Bits already taken in the last byte
    buffer: Vec<u8>,
}

impl IndexPacker {
    pub fn new(depth: BitDepth, pixels: usize) -> Self {
        let bits = depth.bits();
        Self {
            bits,
            mask: ((1u16 << bits) - 1) as u8,
            used: 8,
            buffer: Vec::with_capacity(depth.plane_len(pixels)),
        }
    }

    pub fn push(&mut self, index: u8) {
        if self.used + self.bits > 8 {
            self.buffer.push(0);
            self.used = 0;
        }

        let shift = 8 - self.bits - self.used;
        if let Some(last) = self.buffer.last_mut() {
            *last |= (index & self.mask) << shift;
        }
        self.used += self.bits;
    }

    /// The packed bytes. A partially filled last byte is zero padded.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

/// Quantizes every pixel of `source` with `model` and packs the indices in
/// raster order.
pub fn pack_pixels<S: ImageSource + ?Sized>(source: &S, model: &ColorModel) -> Vec<u8> {
    let (width, height) = source.dimensions();
    let depth = model.bit_depth();
    let mut packer = IndexPacker::new(depth, width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            packer.push(model.index(source.color_at(x, y)));
        }
    }

    let plane = packer.finish();
    debug!("Packed {}x{} pixels at {} into {} bytes", width, height, depth, plane.len());
    plane
}
