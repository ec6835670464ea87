//! IF-stage receive filter: decimate, apply a Hamming low-pass, interpolate
//! back up, choosing the down-factor so the decimated rate still covers the
//! requested bandwidth.

use crate::math::Real;
use crate::signal::decimator::Decimator;
use crate::signal::filter_design::design_low_pass_filter;
use crate::signal::fir_filter::FirFilter;
use crate::signal::interpolator::Interpolator;
use crate::signal::window::Window;

const MAX_DOWN_FACTOR: usize = 25;

fn choose_down_factor<R: Real>(sample_rate_hz: R, bandwidth_hz: R) -> usize {
    let mut d = MAX_DOWN_FACTOR;
    while d > 1 {
        let decimated_rate = sample_rate_hz / R::from_usize(d);
        if decimated_rate >= bandwidth_hz * R::from_f64(2.0) {
            break;
        }
        d -= 1;
    }
    d
}

pub struct ReceiveFilter<R: Real> {
    sample_rate_hz: R,
    bandwidth_hz: R,
    transition_band_hz: R,
    down_factor: usize,
    decimator: Decimator<R>,
    lowpass: FirFilter<'static, R>,
    interpolator: Interpolator<R>,
    kernel_len: usize,
}

impl<R: Real> ReceiveFilter<R> {
    pub fn new(sample_rate_hz: R, bandwidth_hz: R, transition_band_hz: R) -> Self {
        let mut filter = Self {
            sample_rate_hz,
            bandwidth_hz: R::zero(),
            transition_band_hz: R::zero(),
            down_factor: 0,
            decimator: Decimator::new(1),
            lowpass: FirFilter::owned(vec![R::one()]),
            interpolator: Interpolator::new(1),
            kernel_len: 1,
        };
        filter.configure(bandwidth_hz, transition_band_hz);
        filter
    }

    /// Re-entrant: identical `(bandwidth, transition_band)` for the current
    /// sample rate is a no-op.
    pub fn configure(&mut self, bandwidth_hz: R, transition_band_hz: R) {
        if bandwidth_hz == self.bandwidth_hz && transition_band_hz == self.transition_band_hz {
            return;
        }
        self.bandwidth_hz = bandwidth_hz;
        self.transition_band_hz = transition_band_hz;
        self.down_factor = choose_down_factor(self.sample_rate_hz, bandwidth_hz);

        let decimated_rate = self.sample_rate_hz / R::from_usize(self.down_factor);
        let cutoff = (bandwidth_hz / R::from_f64(2.0)).min(
            self.sample_rate_hz / (R::from_f64(2.0) * R::from_usize(self.down_factor)),
        );

        let len = (R::from_f64(4.0) * self.sample_rate_hz
            / (R::from_usize(self.down_factor) * transition_band_hz))
            .to_f64()
            .max(3.0) as usize;
        let len = if len % 2 == 0 { len + 1 } else { len };
        self.kernel_len = len;

        let mut h = vec![R::zero(); len];
        design_low_pass_filter(&mut h, Window::Hamming, cutoff, decimated_rate);

        self.decimator = Decimator::new(self.down_factor);
        self.lowpass = FirFilter::owned(h);
        self.interpolator = Interpolator::new(self.down_factor);
    }

    pub fn bandwidth(&self) -> R {
        self.bandwidth_hz
    }

    pub fn transition_band(&self) -> R {
        self.transition_band_hz
    }

    pub fn kernel_len(&self) -> usize {
        self.kernel_len
    }

    pub fn down_factor(&self) -> usize {
        self.down_factor
    }

    pub fn push(&mut self, x: R, output: &mut Vec<R>) {
        if self.down_factor == 1 {
            output.push(self.lowpass.push(x));
            return;
        }
        if let Some(decimated) = self.decimator.push(x) {
            let filtered = self.lowpass.push(decimated);
            self.interpolator.push(filtered, output);
        }
    }

    pub fn process(&mut self, input: &[R], output: &mut Vec<R>) {
        for &x in input {
            self.push(x, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_reconfigure_is_a_no_op() {
        let mut rf: ReceiveFilter<f64> = ReceiveFilter::new(48000.0, 3000.0, 500.0);
        let d0 = rf.down_factor();
        let k0 = rf.kernel_len();
        rf.configure(3000.0, 500.0);
        assert_eq!(rf.down_factor(), d0);
        assert_eq!(rf.kernel_len(), k0);
    }

    #[test]
    fn down_factor_is_bounded() {
        let rf: ReceiveFilter<f64> = ReceiveFilter::new(48000.0, 100.0, 50.0);
        assert!(rf.down_factor() >= 1 && rf.down_factor() <= MAX_DOWN_FACTOR);
    }

    #[test]
    fn unity_down_factor_is_plain_fir() {
        let rf: ReceiveFilter<f64> = ReceiveFilter::new(8000.0, 3900.0, 200.0);
        assert_eq!(rf.down_factor(), 1);
    }
}
