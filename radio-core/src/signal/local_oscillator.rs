//! Phase-accumulator local oscillator.
//!
//! Phase of sample `i` is `anchor + 2*pi*f*i/fs`. Whenever that would exceed
//! `2*pi`, the anchor is re-seated to the wrapped value and `i` reset to
//! zero, bounding float drift to at most one wrap per 2*pi of accumulated
//! phase.

use crate::math::Real;
use num_complex::Complex;

pub struct LocalOscillator<R: Real> {
    frequency_hz: R,
    sample_rate_hz: R,
    anchor: R,
    index: u64,
}

impl<R: Real> LocalOscillator<R> {
    pub fn new(frequency_hz: R, sample_rate_hz: R) -> Self {
        Self {
            frequency_hz,
            sample_rate_hz,
            anchor: R::zero(),
            index: 0,
        }
    }

    pub fn set_frequency(&mut self, frequency_hz: R) {
        self.frequency_hz = frequency_hz;
    }

    pub fn frequency(&self) -> R {
        self.frequency_hz
    }

    /// Phase of the current sample, re-seating the anchor if it has wrapped
    /// past `2*pi`.
    pub fn phase(&mut self) -> R {
        let two_pi = R::two_pi();
        let phase = self.anchor + two_pi * self.frequency_hz * R::from_usize(self.index as usize) / self.sample_rate_hz;
        if phase > two_pi {
            let cycles = (phase / two_pi).floor();
            self.anchor = phase - cycles * two_pi;
            self.index = 1;
            return phase;
        }
        self.index += 1;
        phase
    }

    pub fn sine(&mut self) -> R {
        self.phase().sin()
    }

    pub fn cosine(&mut self) -> R {
        self.phase().cos()
    }

    pub fn iq(&mut self) -> Complex<R> {
        let phase = self.phase();
        Complex::new(phase.cos(), phase.sin())
    }

    /// Shifts the anchor by `delta`, modulo pi.
    pub fn offset_phase(&mut self, delta: R) {
        let pi = R::pi();
        let mut anchor = self.anchor + delta;
        while anchor > pi {
            anchor = anchor - pi;
        }
        while anchor < -pi {
            anchor = anchor + pi;
        }
        self.anchor = anchor;
    }

    pub fn reset_phase(&mut self) {
        self.anchor = R::zero();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_zero_phase() {
        let mut lo: LocalOscillator<f64> = LocalOscillator::new(1000.0, 48000.0);
        let z = lo.iq();
        assert!((z.re - 1.0).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);
    }

    #[test]
    fn magnitude_stays_unity() {
        let mut lo: LocalOscillator<f64> = LocalOscillator::new(1234.0, 48000.0);
        for _ in 0..10000 {
            let z = lo.iq();
            assert!((z.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn phase_wraps_and_reseats_anchor() {
        let mut lo: LocalOscillator<f64> = LocalOscillator::new(48000.0 / 4.0, 48000.0);
        // frequency = fs/4 -> phase step of pi/2 per sample; after 4 samples
        // phase should have wrapped at least once.
        for _ in 0..4 {
            lo.phase();
        }
        assert!(lo.anchor.abs() < std::f64::consts::TAU);
    }
}
