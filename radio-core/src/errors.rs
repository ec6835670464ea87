//! Error types for `radio-core`, layered by subsystem.
//!
//! This is distinct from the per-sample `DecodeResult` types returned by the
//! protocol decoders (see [`crate::result`]): those model "not enough data
//! yet" as a valid, error-free empty value. The types here are for
//! construction-time and configuration-time failures.

use thiserror::Error;

/// Top-level error type for all `radio-core` operations.
#[derive(Debug, Error)]
pub enum RadioError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("DSP error: {0}")]
    Dsp(#[from] DspError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("picture error: {0}")]
    Picture(#[from] PictureError),
}

/// Configuration-time errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid sample rate: {rate} Hz (must be > 0)")]
    InvalidSampleRate { rate: f64 },

    #[error("sample rate {fs_in} is not a multiple of audio rate {fs_af}")]
    SampleRateNotDivisible { fs_in: f64, fs_af: f64 },

    #[error("invalid bandwidth: {bandwidth} Hz (must be > 0)")]
    InvalidBandwidth { bandwidth: f64 },

    #[error("unknown demodulator mode: {mode}")]
    UnknownMode { mode: String },
}

/// DSP primitive construction/usage errors.
#[derive(Debug, Error)]
pub enum DspError {
    #[error("filter design failed: {reason}")]
    FilterDesignFailed { reason: String },

    #[error("decimation ratio {ratio} is out of the supported range (1..=25)")]
    InvalidDecimationRatio { ratio: usize },

    #[error("kernel length {length} must be odd")]
    KernelLengthMustBeOdd { length: usize },

    #[error("buffer capacity {capacity} exceeded by write of size {size}")]
    BufferOverflow { capacity: usize, size: usize },
}

/// HDLC / AX.25 framing errors (distinct from the per-frame `Unavailable` /
/// `ChecksumMismatch` / `ResourceExhausted` decode outcomes, which are values
/// rather than exceptions — see `crate::protocol::ax25`).
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("static capacity exceeded: {what}")]
    CapacityExceeded { what: &'static str },
}

/// SSTV / APT picture protocol construction errors.
#[derive(Debug, Error)]
pub enum PictureError {
    #[error("unsupported SSTV VIS code: {code:#04x}")]
    UnsupportedMode { code: u8 },

    #[error("image dimensions mismatch: expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
    },
}

/// Result type alias for `radio-core` construction/configuration operations.
pub type Result<T> = std::result::Result<T, RadioError>;
