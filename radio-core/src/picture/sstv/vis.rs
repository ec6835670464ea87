//! Vertical Interval Signaling (VIS) tone constants: the leader/break
//! sequence and the 10 bit-tones (start, 7 code bits, parity, stop) that
//! precede every SSTV picture transmission.
//!
//! ```text
//!  Freq
//!   Hz
//!  1900  ━━━━━━━┓  ┏━━━━━━━┓ s                             parity ──┐
//!         ┆       ┃  ┃       ┃ t                                      │    s
//!         ┆       ┃  ┃       ┃ a   0         0         0         0    │    t
//!  1300   ┆       ┃  ┃       ┃ r ┏━━━━┓    ┏━━━━┓    ┏━━━━┓    ┏━━━━┓ │    o
//!  1200   ┆       ┡━━┩       ┡━━━┛ b0 ┃ b1 ┃ b2 ┃ b3 ┃ b4 ┃ b5 ┃ b6 ┃ b7 ┏━━━━┯
//!  1100   ┆       ┆  ┆       ┆        ┗━━━━┛    ┗━━━━┛    ┗━━━━┛    ┗━━━━┛
//!         ┆ 300ms ┆10┆ 300ms ┆                   10 * 30 ms
//! ```
//!
//! Even parity: the number of logical ones across the whole 8-bit code
//! (7 data bits + parity) must be even.

use crate::base::{FrequencyDuration, Interval};
use crate::math::Real;

pub const BIT_DURATION_MS: f64 = 30.0;

pub fn frequency_interval<R: Real>() -> Interval<R> {
    Interval::new(R::from_f64(1100.0), R::from_f64(1900.0))
}

pub fn leader_tone<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1900.0), R::from_f64(300.0))
}

pub fn break_tone<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1200.0), R::from_f64(10.0))
}

pub fn leader_sequence<R: Real>() -> [FrequencyDuration<R>; 3] {
    [leader_tone(), break_tone(), leader_tone()]
}

pub fn start_bit<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1200.0), R::from_f64(BIT_DURATION_MS))
}

pub fn bit_value_zero<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1300.0), R::from_f64(BIT_DURATION_MS))
}

pub fn bit_value_one<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1100.0), R::from_f64(BIT_DURATION_MS))
}

pub fn stop_bit<R: Real>() -> FrequencyDuration<R> {
    FrequencyDuration::new(R::from_f64(1200.0), R::from_f64(BIT_DURATION_MS))
}
