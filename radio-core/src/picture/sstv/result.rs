//! Result of one tick of the SSTV decoding pipeline.

use crate::base::result::combine as combine_results;
use crate::base::DecodeResult;
use crate::base::StaticVec;
use crate::color::Color3;
use crate::picture::sstv::mode::Mode;

/// A valid (checksum-passing) VIS code was detected. Does not by itself
/// imply pixels will follow -- a stronger transmission may interrupt this
/// one before any scanline is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedVisCode {
    pub vis_code: u8,
}

/// Horizontal line synchronization was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSynchronization;

/// Emitted right before the first scanline row of a picture is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePixelsBegin {
    pub mode: Mode,
}

/// One decoded row of image pixels, `mode_spec.image_width` long.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePixelsRow {
    pub pixels: Vec<Color3<u8>>,
}

/// All pixels of the picture have been decoded. Only emitted when the full
/// picture was received -- a noisy environment where a stronger
/// transmission interrupts this one produces no explicit end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePixelsEnd;

#[derive(Debug, Clone, PartialEq)]
pub enum DecodedVariant {
    DecodedVisCode(DecodedVisCode),
    LineSynchronization(LineSynchronization),
    ImagePixelsBegin(ImagePixelsBegin),
    ImagePixelsRow(ImagePixelsRow),
    ImagePixelsEnd(ImagePixelsEnd),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("SSTV decode error")]
    DecodeError,
}

/// A tick emits at most a VIS code, a line sync, a begin/end marker, and
/// two pixel rows (the PD family packs two image rows per transmission
/// line).
pub type DecodedData = StaticVec<DecodedVariant, 4>;

pub type Result = DecodeResult<DecodedData, Error>;

pub fn empty_result() -> Result {
    Ok(DecodedData::new())
}

pub fn combine(a: Result, b: Result) -> Result {
    combine_results(a, b)
}
