//! Integer interpolator: polyphase upsampling.
//!
//! Decomposes the same `20*ratio + 1` Blackman low-pass kernel used by the
//! decimator into `ratio` polyphase subfilters (subfilter `m` holds every
//! `ratio`-th tap starting at offset `m`), each maintaining its own FIR
//! state. Every input sample produces `ratio` outputs, scaled by `ratio` to
//! restore unity DC gain.

use crate::math::Real;
use crate::signal::decimator::design_decimation_kernel;
use crate::signal::fir_filter::FirFilter;

pub struct Interpolator<R: Real> {
    ratio: usize,
    subfilters: Vec<FirFilter<'static, R>>,
}

impl<R: Real> Interpolator<R> {
    pub fn new(ratio: usize) -> Self {
        let ratio = ratio.max(1);
        let master = design_decimation_kernel::<R>(ratio);
        let subfilters = (0..ratio)
            .map(|m| {
                let taps: Vec<R> = master.iter().skip(m).step_by(ratio).copied().collect();
                FirFilter::owned(taps)
            })
            .collect();
        Self { ratio, subfilters }
    }

    pub fn ratio(&self) -> usize {
        self.ratio
    }

    pub fn required_output_len(&self, input_len: usize) -> usize {
        input_len * self.ratio + 1
    }

    /// Push one input sample, appending `ratio` outputs to `output`.
    pub fn push(&mut self, x: R, output: &mut Vec<R>) {
        if self.ratio == 1 {
            output.push(x);
            return;
        }
        let scale = R::from_usize(self.ratio);
        for sub in self.subfilters.iter_mut() {
            output.push(sub.push(x) * scale);
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
    fn emits_ratio_outputs_per_input() {
        let mut interp: Interpolator<f64> = Interpolator::new(3);
        let x = vec![1.0; 50];
        let mut out = Vec::new();
        interp.process(&x, &mut out);
        assert_eq!(out.len(), 150);
    }

    #[test]
    fn has_approximately_unity_dc_gain() {
        let mut interp: Interpolator<f64> = Interpolator::new(4);
        let x = vec![1.0; 4000];
        let mut out = Vec::new();
        interp.process(&x, &mut out);
        let tail_avg: f64 = out[out.len() - 100..].iter().sum::<f64>() / 100.0;
        assert!((tail_avg - 1.0).abs() < 0.05, "tail_avg = {}", tail_avg);
    }
}
