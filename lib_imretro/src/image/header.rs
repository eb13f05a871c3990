use std::io::{self, Read, Write};

use log::{debug, error};

use super::decoder::DecodeError;
use crate::color::model::BitDepth;
use crate::constants::{BIT_DEPTH_MASK, DIMENSION_SIZE, PALETTE_FLAG, SIGNATURE};

/// Checks the signature and returns the mode byte that follows it.
///
/// A stream shorter than the signature fails with `TruncatedInput`; any other
/// mismatch fails with `SignatureMismatch` at the first differing byte.
pub fn parse_header<R: Read>(reader: &mut R) -> Result<u8, DecodeError> {
    let mut signature = [0u8; SIGNATURE.len()];
    reader.read_exact(&mut signature)?;

    if let Some(position) = SIGNATURE
        .iter()
        .zip(signature.iter())
        .position(|(want, actual)| want != actual)
    {
        error!(
            "Unexpected signature byte {:#04x} at position {}",
            signature[position], position
        );
        return Err(DecodeError::SignatureMismatch { position });
    }

    let mut mode = [0u8; 1];
    reader.read_exact(&mut mode)?;
    debug!("Signature validated, mode byte {:#010b}", mode[0]);

    Ok(mode[0])
}

/// Reads width then height, both big-endian.
pub fn parse_dimensions<R: Read>(reader: &mut R) -> Result<(u16, u16), DecodeError> {
    let mut buffer = [0u8; 2 * DIMENSION_SIZE];
    reader.read_exact(&mut buffer)?;

    let width = u16::from_be_bytes([buffer[0], buffer[1]]);
    let height = u16::from_be_bytes([buffer[2], buffer[3]]);
    debug!("Image dimensions read: width={} height={}", width, height);

    Ok((width, height))
}

/// The raw bit-depth code of a mode byte. Not necessarily a supported one.
pub const fn bit_depth_of(mode: u8) -> u8 {
    mode & BIT_DEPTH_MASK
}

pub const fn has_in_file_palette(mode: u8) -> bool {
    mode & PALETTE_FLAG != 0
}

pub fn is_bit_depth_supported(code: u8) -> bool {
    BitDepth::try_from(code).is_ok()
}

/// Builds a mode byte. Reserved bits are left clear.
pub const fn mode_byte(depth: BitDepth, with_palette: bool) -> u8 {
    if with_palette {
        depth.code() | PALETTE_FLAG
    } else {
        depth.code()
    }
}

pub fn write_header<W: Write>(
    writer: &mut W,
    depth: BitDepth,
    with_palette: bool,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let mode = mode_byte(depth, with_palette);

    writer.write_all(&SIGNATURE)?;
    writer.write_all(&[mode])?;
    writer.write_all(&width.to_be_bytes())?;
    writer.write_all(&height.to_be_bytes())?;
    debug!(
        "Header written: mode={:#010b} width={} height={}",
        mode, width, height
    );

    Ok(())
}
