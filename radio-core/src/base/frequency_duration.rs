//! `(frequency, duration_ms)` value type used by the tone generator and the
//! SSTV/APT mode specs.

use crate::math::Real;

/// A tone segment: play `frequency_hz` for `duration_ms` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyDuration<R> {
    pub frequency_hz: R,
    pub duration_ms: R,
}

impl<R: Real> FrequencyDuration<R> {
    pub fn new(frequency_hz: R, duration_ms: R) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub fn num_samples(&self, sample_rate_hz: R) -> R {
        self.duration_ms * sample_rate_hz / R::from_f64(1000.0)
    }
}
