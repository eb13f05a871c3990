use std::io::{self, Write};

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::header::write_header;
use super::palette::write_palette;
use super::pixels::pack_pixels;
use super::source::{ImageSource, RgbaImageRef};
use crate::color::model::{BitDepth, ColorModel, UnsupportedBitDepth};
use crate::constants::{DIMENSION_SIZE, HEADER_SIZE, MAX_DIMENSION};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Image dimension {0} exceeds the maximum of 65535")]
    DimensionsTooLarge(u32),
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
    #[error(transparent)]
    UnsupportedBitDepth(#[from] UnsupportedBitDepth),
    #[error("Failed to write encoded data")]
    Io(#[from] io::Error),
}

/// Encoder options.
///
/// The model's variant picks the bit depth and quantization rule. With
/// `write_palette` set (the default) the model's palette is written to the
/// stream, padded with `NO_COLOR` or cut to the depth's palette size. Without
/// it the palette flag is left clear and decoders fall back to their default
/// model for the depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub model: ColorModel,
    pub write_palette: bool,
}

impl EncoderConfig {
    pub fn new(depth: BitDepth) -> Self {
        Self {
            model: ColorModel::default_for(depth),
            write_palette: true,
        }
    }

    pub fn with_model(model: ColorModel) -> Self {
        Self {
            model,
            write_palette: true,
        }
    }

    pub fn without_palette(mut self) -> Self {
        self.write_palette = false;
        self
    }
}

impl From<BitDepth> for EncoderConfig {
    fn from(depth: BitDepth) -> Self {
        Self::new(depth)
    }
}

/// Encodes `source` with the default model for `depth`, always writing the
/// palette.
pub fn encode<W, S>(writer: W, source: &S, depth: BitDepth) -> Result<(), EncodeError>
where
    W: Write,
    S: ImageSource + ?Sized,
{
    encode_with(writer, source, &EncoderConfig::new(depth))
}

pub fn encode_with<W, S>(
    mut writer: W,
    source: &S,
    config: &EncoderConfig,
) -> Result<(), EncodeError>
where
    W: Write,
    S: ImageSource + ?Sized,
{
    info!("Starting encoding");

    let (width, height) = source.dimensions();
    let width = checked_dimension(width)?;
    let height = checked_dimension(height)?;
    let depth = config.model.bit_depth();

    write_header(&mut writer, depth, config.write_palette, width, height)?;
    if config.write_palette {
        write_palette(&mut writer, config.model.palette(), depth.palette_size())?;
    }

    let plane = pack_pixels(source, &config.model);
    writer.write_all(&plane)?;
    debug!("Pixel data written: {} bytes", plane.len());

    info!("Encoded {}x{} {} image", width, height, depth);
    Ok(())
}

/// Encodes a tightly packed RGBA8 buffer into a new byte vector.
///
/// `depth_code` is the raw mode-byte code (`0x00`, `0x40` or `0x80`).
pub fn encode_rgba(
    width: u16,
    height: u16,
    rgba_data: &[u8],
    depth_code: u8,
) -> Result<Vec<u8>, EncodeError> {
    let depth = BitDepth::try_from(depth_code).map_err(|err| {
        error!("{}", err);
        err
    })?;
    let source = RgbaImageRef::new(width.into(), height.into(), rgba_data)?;

    let mut encoded = Vec::with_capacity(HEADER_SIZE + 2 * DIMENSION_SIZE + rgba_data.len() / 4);
    encode(&mut encoded, &source, depth)?;
    Ok(encoded)
}

fn checked_dimension(dimension: u32) -> Result<u16, EncodeError> {
    if dimension > MAX_DIMENSION {
        error!(
            "Image dimension {} exceeds the maximum of {}",
            dimension, MAX_DIMENSION
        );
        return Err(EncodeError::DimensionsTooLarge(dimension));
    }
    Ok(dimension as u16)
}
