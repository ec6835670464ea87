//! Single-tone correlator: mixes the input with a local sine/cosine pair at
//! a target frequency, low-passes each rail, and reports the resulting tone
//! magnitude.

use crate::math::Real;
use crate::signal::filter_design::design_low_pass_filter;
use crate::signal::fir_filter::FirFilter;
use crate::signal::local_oscillator::LocalOscillator;
use crate::signal::window::Window;

pub struct ToneCorrelator<R: Real> {
    lo: LocalOscillator<R>,
    lpf_i: FirFilter<'static, R>,
    lpf_q: FirFilter<'static, R>,
}

impl<R: Real> ToneCorrelator<R> {
    pub fn new(tone_hz: R, sample_rate_hz: R, baud: R) -> Self {
        let len = 31;
        let mut h = vec![R::zero(); len];
        design_low_pass_filter(&mut h, Window::Hamming, baud, sample_rate_hz);
        Self {
            lo: LocalOscillator::new(tone_hz, sample_rate_hz),
            lpf_i: FirFilter::owned(h.clone()),
            lpf_q: FirFilter::owned(h),
        }
    }

    pub fn push(&mut self, x: R) -> R {
        let phase = self.lo.phase();
        let i = self.lpf_i.push(x * phase.cos());
        let q = self.lpf_q.push(x * phase.sin());
        (i * i + q * q).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resonant_tone_has_higher_magnitude_than_off_tone() {
        let fs = 9600.0_f64;
        let baud = 1200.0;
        let mut mark_corr = ToneCorrelator::new(1200.0, fs, baud);
        let mut space_corr = ToneCorrelator::new(2200.0, fs, baud);

        let mut phase = 0.0_f64;
        let step = 2.0 * std::f64::consts::PI * 1200.0 / fs;
        let mut mark_mag = 0.0;
        let mut space_mag = 0.0;
        for _ in 0..2000 {
            phase += step;
            let x = phase.sin();
            mark_mag = mark_corr.push(x);
            space_mag = space_corr.push(x);
        }
        assert!(mark_mag > space_mag, "{} vs {}", mark_mag, space_mag);
    }
}
