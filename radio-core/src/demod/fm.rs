//! NFM/WFM frequency demodulator: instantaneous frequency scaled so that
//! full deviation maps to +-1.

use crate::math::Real;
use crate::signal::instant_frequency::InstantFrequency;
use num_complex::Complex;

pub struct FmDemodulator<R: Real> {
    freq: InstantFrequency<R>,
    deviation_hz: R,
}

impl<R: Real> FmDemodulator<R> {
    pub fn new(sample_rate_hz: R, deviation_hz: R) -> Self {
        Self {
            freq: InstantFrequency::new(sample_rate_hz),
            deviation_hz,
        }
    }

    pub fn push(&mut self, c: Complex<R>) -> R {
        self.freq.push(c) / self.deviation_hz
    }

    pub fn reset(&mut self) {
        self.freq.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn tone_at_deviation_maps_to_unity() {
        let fs = 48000.0;
        let deviation = 5000.0;
        let mut demod: FmDemodulator<f64> = FmDemodulator::new(fs, deviation);

        let mut phase = 0.0;
        let step = 2.0 * PI * deviation / fs;
        demod.push(Complex::new(phase.cos(), phase.sin()));
        let mut last = 0.0;
        for _ in 0..200 {
            phase += step;
            last = demod.push(Complex::new(phase.cos(), phase.sin()));
        }
        assert!((last - 1.0).abs() < 1e-6, "last = {}", last);
    }
}
