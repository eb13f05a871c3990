pub mod color;
pub mod constants;
pub mod image;

use log::*;
use std::io::Write;

pub use crate::color::model::{BitDepth, ColorModel, ModelMap, UnsupportedBitDepth};
pub use crate::color::palette::Palette;
pub use crate::color::{Color, NO_COLOR};
pub use crate::image::format::{Config, Image};
pub use crate::image::source::{ImageSource, RgbaImageRef};
pub use crate::image::{
    decode, decode_config, decode_config_with, decode_with, encode, encode_rgba, encode_with,
    DecodeError, EncodeError, EncoderConfig,
};

/// Routes this crate's log records to stderr at debug level.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter(Some("lib_imretro"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}
