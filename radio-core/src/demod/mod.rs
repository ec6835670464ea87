//! Demodulators: AM, NFM/WFM, CW, and SSB (USB/LSB), operating on the
//! analytical signal produced by the signal path's IF tap.

pub mod am;
pub mod cw;
pub mod fm;
pub mod ssb;

pub use am::AmDemodulator;
pub use cw::CwDemodulator;
pub use fm::FmDemodulator;
pub use ssb::{Sideband, SsbDemodulator};
