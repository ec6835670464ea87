//! Result of one tick of the APT decoding pipeline.

use crate::base::DecodeResult;
use crate::base::StaticVec;

/// Horizontal line synchronization: the decoder detected the Sync A marker.
/// The next `Line` event starts at this synchronization marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSynchronization;

/// An entire decoded line: Sync A, Space A, Image A, Telemetry A, Sync B,
/// Space B, Image B, Telemetry B, concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub pixels: Vec<u8>,
}

/// One piece of data decoded from an APT tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedVariant {
    Line(Line),
    LineSynchronization(LineSynchronization),
}

/// Generic decode error, reserved for structural violations (see
/// SPEC_FULL §7's propagation policy: most protocol violations just reset
/// the state machine and return an empty value, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("APT decode error")]
    DecodeError,
}

/// A tick emits at most a synchronization marker and a completed line.
pub type DecodedData = StaticVec<DecodedVariant, 2>;

pub type Result = DecodeResult<DecodedData, Error>;

pub fn empty_result() -> Result {
    Ok(DecodedData::new())
}
