use std::io::{self, Read};

use log::{debug, error, info};
use thiserror::Error;

use super::format::{Config, Image};
use super::header::{bit_depth_of, has_in_file_palette, parse_dimensions, parse_header};
use super::palette::resolve_color_model;
use crate::color::model::{ModelMap, UnsupportedBitDepth};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unexpected signature byte at position {position}")]
    SignatureMismatch { position: usize },
    #[error("Unexpected end of input")]
    TruncatedInput,
    #[error(transparent)]
    UnsupportedBitDepth(#[from] UnsupportedBitDepth),
    #[error("Failed to read input")]
    Io(#[source] io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            error!("Unexpected end of input");
            DecodeError::TruncatedInput
        } else {
            error!("I/O error while decoding: {}", err);
            DecodeError::Io(err)
        }
    }
}

/// Reads the dimensions and color model without touching the pixel plane.
pub fn decode_config<R: Read>(reader: R) -> Result<Config, DecodeError> {
    decode_config_with(reader, &ModelMap::default())
}

/// Like [`decode_config`], taking the models used when the stream carries no
/// palette from `defaults`.
pub fn decode_config_with<R: Read>(
    mut reader: R,
    defaults: &ModelMap,
) -> Result<Config, DecodeError> {
    let mode = parse_header(&mut reader)?;
    let depth_code = bit_depth_of(mode);
    let has_palette = has_in_file_palette(mode);

    let (width, height) = parse_dimensions(&mut reader)?;
    let model = resolve_color_model(depth_code, has_palette, &mut reader, defaults)?;

    Ok(Config {
        width,
        height,
        model,
    })
}

pub fn decode<R: Read>(reader: R) -> Result<Image, DecodeError> {
    decode_with(reader, &ModelMap::default())
}

pub fn decode_with<R: Read>(mut reader: R, defaults: &ModelMap) -> Result<Image, DecodeError> {
    info!("Starting decoding");

    let config = decode_config_with(&mut reader, defaults)?;

    // The rest of the stream is the pixel plane
    let mut pixels = Vec::new();
    reader.read_to_end(&mut pixels)?;
    debug!("Pixel data length: {}", pixels.len());

    info!(
        "Decoded {}x{} {} image",
        config.width,
        config.height,
        config.model.bit_depth()
    );
    Ok(Image::new(config, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::model::BitDepth;
    use crate::color::{BLACK, NO_COLOR, WHITE};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_decode_checkerboard() {
        let bytes = b"IMRETRO\x00\x00\x02\x00\x02\x90";
        let image = decode(&bytes[..]).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.bit_depth(), BitDepth::One);
        assert_eq!(image.at(0, 0), WHITE);
        assert_eq!(image.at(1, 0), BLACK);
        assert_eq!(image.at(2, 0), NO_COLOR);
    }

    #[test]
    fn test_decode_config_leaves_pixels() {
        let bytes = b"IMRETRO\x80\x00\x01\x00\x01\xC3";
        let mut reader = &bytes[..];
        let config = decode_config(&mut reader).unwrap();

        assert_eq!(config.model.bit_depth(), BitDepth::Eight);
        assert_eq!(reader, &[0xC3]);
    }

    #[test]
    fn test_unsupported_bit_depth() {
        let bytes = b"IMRETRO\xC0\x00\x01\x00\x01";
        let result = decode(&bytes[..]);
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedBitDepth(UnsupportedBitDepth(0xC0)))
        ));
    }

    #[test]
    fn test_other_io_errors() {
        let result = decode(FailingReader);
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(decode(io::empty()), Err(DecodeError::TruncatedInput)));
    }
}
