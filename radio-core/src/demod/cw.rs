//! CW demodulator: mixes the incoming signal with a local oscillator at the
//! tone frequency and takes the real part.

use crate::math::Real;
use crate::signal::local_oscillator::LocalOscillator;
use num_complex::Complex;

pub struct CwDemodulator<R: Real> {
    lo: LocalOscillator<R>,
}

impl<R: Real> CwDemodulator<R> {
    pub fn new(tone_hz: R, sample_rate_hz: R) -> Self {
        Self {
            lo: LocalOscillator::new(tone_hz, sample_rate_hz),
        }
    }

    pub fn push(&mut self, c: Complex<R>) -> R {
        (c * self.lo.iq()).re
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixing_with_own_frequency_yields_a_dc_component() {
        let mut demod: CwDemodulator<f64> = CwDemodulator::new(600.0, 8000.0);
        let sum: f64 = (0..100).map(|_| demod.push(Complex::new(1.0, 0.0))).sum();
        assert!(sum.abs() > 0.0);
    }
}
