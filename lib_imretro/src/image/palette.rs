use std::io::{self, Read, Write};

use log::{debug, error};

use super::decoder::DecodeError;
use crate::color::model::{BitDepth, ColorModel, ModelMap};
use crate::color::palette::Palette;
use crate::color::{Color, NO_COLOR};
use crate::constants::COLOR_SIZE;

/// Resolves the color model for a stream whose header has just been read.
///
/// Without an in-file palette the default model for the depth is taken from
/// `defaults`; otherwise a full palette for the depth is read.
pub fn resolve_color_model<R: Read>(
    depth_code: u8,
    has_palette: bool,
    reader: &mut R,
    defaults: &ModelMap,
) -> Result<ColorModel, DecodeError> {
    let depth = BitDepth::try_from(depth_code).map_err(|err| {
        error!("{}", err);
        err
    })?;

    if !has_palette {
        debug!("No in-file palette, using default {} model", depth);
        return Ok(defaults.get(depth).clone());
    }

    let palette = read_palette(reader, depth.palette_size())?;
    debug!("Read {} palette with {} colors", depth, palette.len());

    Ok(ColorModel::new(depth, palette))
}

/// Reads `size` colors, 4 bytes (R, G, B, A) each.
pub fn read_palette<R: Read>(reader: &mut R, size: usize) -> Result<Palette, DecodeError> {
    let mut palette = Palette::with_capacity(size);
    let mut buffer = [0u8; COLOR_SIZE];

    for i in 0..size {
        reader.read_exact(&mut buffer).map_err(|err| {
            error!("Unexpected end of data while reading palette color #{}", i);
            DecodeError::from(err)
        })?;
        palette.push(Color::from(buffer));
    }

    Ok(palette)
}

/// Writes exactly `size` colors, the slot count decoders read back for the
/// depth. Missing entries are written as `NO_COLOR`, extra ones are dropped.
pub fn write_palette<W: Write>(writer: &mut W, palette: &Palette, size: usize) -> io::Result<()> {
    for index in 0..size {
        let color = palette.get(index).unwrap_or(NO_COLOR);
        writer.write_all(&color.as_bytes())?;
    }
    if palette.len() != size {
        debug!(
            "Palette with {} colors fitted to {} entries",
            palette.len(),
            size
        );
    }
    debug!("Palette data written with {} colors", size);

    Ok(())
}
