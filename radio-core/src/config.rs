//! Configuration types for the signal path and protocol decoders.

use serde::{Deserialize, Serialize};

/// WAV output bit depth, used by CLI binaries when writing decoded audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BitDepth {
    Pcm16,
    Pcm24,
    #[default]
    Float32,
}

/// Demodulator selection for the signal path (see `crate::signal_path`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemodulatorKind {
    Am,
    Nfm,
    Wfm,
    Usb,
    Lsb,
    Cw,
}

impl Default for DemodulatorKind {
    fn default() -> Self {
        DemodulatorKind::Nfm
    }
}

/// Configuration for a `SignalPath` instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalPathConfig {
    /// Input IQ sample rate, in Hz.
    pub sample_rate_in_hz: f64,
    /// Output audio sample rate, in Hz.
    pub sample_rate_af_hz: f64,
    /// Demodulator to use.
    pub demodulator: DemodulatorKind,
    /// Receive filter bandwidth, in Hz.
    pub bandwidth_hz: f64,
    /// Receive filter transition band, in Hz.
    pub transition_band_hz: f64,
    /// Frequency offset of the tuned signal from DC, in Hz.
    pub frequency_offset_hz: f64,
    /// CW tone frequency, in Hz (only used when `demodulator == Cw`).
    pub cw_tone_hz: f64,
    /// NFM/WFM peak deviation, in Hz.
    pub fm_deviation_hz: f64,
    /// Duration of the AF soft-start ramp on first boot, in milliseconds.
    pub soft_startup_time_ms: f64,
    /// Duration of the AF soft-start ramp after a mode change, in milliseconds.
    pub soft_configure_time_ms: f64,
}

impl Default for SignalPathConfig {
    fn default() -> Self {
        Self {
            sample_rate_in_hz: 240_000.0,
            sample_rate_af_hz: 48_000.0,
            demodulator: DemodulatorKind::default(),
            bandwidth_hz: 12_500.0,
            transition_band_hz: 2_000.0,
            frequency_offset_hz: 0.0,
            cw_tone_hz: 700.0,
            fm_deviation_hz: 5_000.0,
            soft_startup_time_ms: 300.0,
            soft_configure_time_ms: 100.0,
        }
    }
}

/// Configuration for SSTV encode/decode CLI tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SstvConfig {
    pub sample_rate_hz: f64,
}

impl Default for SstvConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44_100.0,
        }
    }
}

/// Configuration for APT encode/decode CLI tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptConfig {
    pub sample_rate_hz: f64,
}

impl Default for AptConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 11_025.0,
        }
    }
}

/// Configuration for the Bell-202 FSK / AX.25 decoder CLI tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ax25FskConfig {
    pub sample_rate_hz: f64,
    pub baud_rate: f64,
    pub mark_hz: f64,
    pub space_hz: f64,
}

impl Default for Ax25FskConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 22_050.0,
            baud_rate: 1_200.0,
            mark_hz: 1_200.0,
            space_hz: 2_200.0,
        }
    }
}
