//! Bell-202-style FSK symbol demodulation, as used by the AX.25/APRS stack.

pub mod fsk;
pub mod tone_correlator;

pub use fsk::FskDemodulator;
pub use tone_correlator::ToneCorrelator;
