pub mod decoder;
pub mod encoder;
pub mod format;
pub mod header;
pub mod palette;
pub mod pixels;
pub mod source;

pub use decoder::{decode, decode_config, decode_config_with, decode_with, DecodeError};
pub use encoder::{encode, encode_rgba, encode_with, EncodeError, EncoderConfig};
