//! Frequency shifter: multiplies a stream by a complex exponential produced
//! by an internal local oscillator.

use crate::math::Real;
use crate::signal::local_oscillator::LocalOscillator;
use num_complex::Complex;

pub struct FrequencyShifter<R: Real> {
    lo: LocalOscillator<R>,
}

impl<R: Real> FrequencyShifter<R> {
    pub fn new(shift_hz: R, sample_rate_hz: R) -> Self {
        Self {
            lo: LocalOscillator::new(shift_hz, sample_rate_hz),
        }
    }

    pub fn set_shift(&mut self, shift_hz: R) {
        self.lo.set_frequency(shift_hz);
    }

    pub fn push(&mut self, x: Complex<R>) -> Complex<R> {
        x * self.lo.iq()
    }

    /// Shifts `input` into `output`, which may alias `input`.
    pub fn process(&mut self, input: &[Complex<R>], output: &mut [Complex<R>]) {
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = *x * self.lo.iq();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_by_zero_is_identity_in_magnitude() {
        let mut shifter: FrequencyShifter<f64> = FrequencyShifter::new(0.0, 48000.0);
        let x = Complex::new(1.0, 0.0);
        let y = shifter.push(x);
        assert!((y.norm() - 1.0).abs() < 1e-12);
    }
}
