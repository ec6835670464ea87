//! Peak detector: tracks the running maximum magnitude with exponential
//! decay, for level metering and squelch-style thresholds.

use crate::math::Real;

pub struct PeakDetector<R: Real> {
    peak: R,
    decay: R,
}

impl<R: Real> PeakDetector<R> {
    /// `decay` is a per-sample multiplicative falloff applied when the new
    /// sample does not exceed the current peak, in `(0, 1]`.
    pub fn new(decay: R) -> Self {
        Self {
            peak: R::zero(),
            decay,
        }
    }

    pub fn peak(&self) -> R {
        self.peak
    }

    pub fn reset(&mut self) {
        self.peak = R::zero();
    }

    pub fn push(&mut self, x: R) -> R {
        let mag = x.abs();
        self.peak = if mag > self.peak {
            mag
        } else {
            self.peak * self.decay
        };
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_new_peaks_immediately() {
        let mut pd: PeakDetector<f64> = PeakDetector::new(0.9);
        assert_eq!(pd.push(0.5), 0.5);
        assert_eq!(pd.push(1.0), 1.0);
    }

    #[test]
    fn decays_between_peaks() {
        let mut pd: PeakDetector<f64> = PeakDetector::new(0.5);
        pd.push(1.0);
        let decayed = pd.push(0.0);
        assert_eq!(decayed, 0.5);
    }
}
