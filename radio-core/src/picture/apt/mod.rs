//! Automatic Picture Transmission: the NOAA weather-satellite AM picture
//! format. An AM demodulator centered on the sub-carrier, with per-pixel
//! timing and Sync A line detection on decode, and AM tone-burst
//! modulation on encode.

pub mod decoder;
pub mod encoder;
pub mod info;
pub mod result;

pub use decoder::{AptDecoder, AptDecoderOptions};
pub use encoder::AptEncoder;
pub use result::{DecodedData, DecodedVariant, Error, Line, LineSynchronization};
