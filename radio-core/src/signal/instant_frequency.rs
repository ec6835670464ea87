//! Instantaneous frequency: the derivative of unwrapped instantaneous phase.

use crate::math::Real;
use num_complex::Complex;

/// Tracks instantaneous frequency sample-by-sample from a stream of
/// analytical-signal samples, handling phase wraparound internally so the
/// caller never sees a +-2pi jump between consecutive outputs.
pub struct InstantFrequency<R: Real> {
    sample_rate_hz: R,
    previous_phase: Option<R>,
}

impl<R: Real> InstantFrequency<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            previous_phase: None,
        }
    }

    /// Feed one analytical-signal sample, returning the instantaneous
    /// frequency in Hz. The first call has no prior phase and returns zero.
    pub fn push(&mut self, z: Complex<R>) -> R {
        let phase = z.im.atan2(z.re);
        let freq = match self.previous_phase {
            None => R::zero(),
            Some(prev) => {
                let mut delta = phase - prev;
                let two_pi = R::two_pi();
                let pi = R::pi();
                while delta > pi {
                    delta = delta - two_pi;
                }
                while delta < -pi {
                    delta = delta + two_pi;
                }
                delta * self.sample_rate_hz / two_pi
            }
        };
        self.previous_phase = Some(phase);
        freq
    }

    pub fn reset(&mut self) {
        self.previous_phase = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn constant_frequency_tone_is_recovered() {
        let fs = 8000.0_f64;
        let tone_hz = 250.0;
        let mut freq: InstantFrequency<f64> = InstantFrequency::new(fs);

        let mut phase = 0.0_f64;
        let step = 2.0 * PI * tone_hz / fs;
        freq.push(Complex::new(phase.cos(), phase.sin()));
        let mut last = 0.0;
        for _ in 0..100 {
            phase += step;
            let z = Complex::new(phase.cos(), phase.sin());
            last = freq.push(z);
        }
        assert!((last - tone_hz).abs() < 1e-6, "last = {}", last);
    }
}
