//! Bell-202 FSK symbol demodulator.
//!
//! Per-symbol chain: mix with sine/cosine at the mark/space frequency,
//! low-pass, magnitude, RRC matched filter, asymmetric EMA AGC. The decoded
//! bit is `sign(mark_mag - space_mag)` after hysteresis, latched by the
//! digital PLL.

use crate::math::Real;
use crate::modem::tone_correlator::ToneCorrelator;
use crate::signal::agc::Agc;
use crate::signal::digital_pll::DigitalPll;
use crate::signal::fir_filter::FirFilter;
use crate::signal::hysteresis::Hysteresis;
use crate::signal::root_raised_cosine::design_root_raised_cosine_filter;

/// Number of symbol periods spanned by the RRC matched filter.
const RRC_SPAN_SYMBOLS: usize = 6;
const RRC_BETA: f64 = 0.5;

pub struct FskDemodulator<R: Real> {
    mark: ToneCorrelator<R>,
    space: ToneCorrelator<R>,
    mark_rrc: FirFilter<'static, R>,
    space_rrc: FirFilter<'static, R>,
    mark_agc: Agc<R>,
    space_agc: Agc<R>,
    hysteresis: Hysteresis<R>,
    pll: DigitalPll,
}

impl<R: Real> FskDemodulator<R> {
    pub fn new(sample_rate_hz: R, baud: R, mark_hz: R, space_hz: R) -> Self {
        let sps = sample_rate_hz / baud;
        let mut len = (sps.to_f64() * RRC_SPAN_SYMBOLS as f64).round() as usize;
        if len % 2 == 0 {
            len += 1;
        }
        len = len.max(3);

        let mut mark_h = vec![R::zero(); len];
        design_root_raised_cosine_filter(&mut mark_h, sps, R::from_f64(RRC_BETA));
        let space_h = mark_h.clone();

        Self {
            mark: ToneCorrelator::new(mark_hz, sample_rate_hz, baud),
            space: ToneCorrelator::new(space_hz, sample_rate_hz, baud),
            mark_rrc: FirFilter::owned(mark_h),
            space_rrc: FirFilter::owned(space_h),
            mark_agc: Agc::new(R::from_f64(0.1), R::from_f64(0.001)),
            space_agc: Agc::new(R::from_f64(0.1), R::from_f64(0.001)),
            hysteresis: Hysteresis::new(R::zero(), R::from_f64(0.05)),
            pll: DigitalPll::new(baud.to_f64(), sample_rate_hz.to_f64(), 0.5),
        }
    }

    /// Feeds one pre-filtered input sample. Returns `Some(bit)` exactly on
    /// the PLL-selected symbol-center sample.
    pub fn push(&mut self, x: R) -> Option<bool> {
        let mark_mag = self.mark_agc.push(self.mark_rrc.push(self.mark.push(x)));
        let space_mag = self.space_agc.push(self.space_rrc.push(self.space.push(x)));

        let diff = self.hysteresis.push(mark_mag - space_mag);
        let bit = diff > R::zero();

        if self.pll.push(bit) {
            Some(bit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_bits_from_a_steady_mark_tone() {
        let fs = 9600.0_f64;
        let baud = 1200.0;
        let mut demod: FskDemodulator<f64> = FskDemodulator::new(fs, baud, 1200.0, 2200.0);

        let mut phase = 0.0_f64;
        let step = 2.0 * std::f64::consts::PI * 1200.0 / fs;
        let mut bits = Vec::new();
        for _ in 0..(fs as usize * 2) {
            phase += step;
            if let Some(bit) = demod.push(phase.sin()) {
                bits.push(bit);
            }
        }
        assert!(!bits.is_empty());
        assert!(bits.iter().filter(|&&b| b).count() as f64 > bits.len() as f64 * 0.5);
    }
}
