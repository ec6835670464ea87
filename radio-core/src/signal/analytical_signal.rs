//! Analytical signal: forms a complex signal whose imaginary part is the
//! Hilbert transform of the real input and whose real part is the same
//! input delayed to match the Hilbert filter's group delay.

use crate::math::Real;
use crate::signal::fir_filter::FirFilter;
use crate::signal::hilbert::design_hilbert_filter;
use crate::signal::window::Window;
use num_complex::Complex;
use std::collections::VecDeque;

pub struct AnalyticalSignal<R: Real> {
    hilbert: FirFilter<'static, R>,
    delay_line: VecDeque<R>,
    delay: usize,
}

impl<R: Real> AnalyticalSignal<R> {
    /// `kernel_length` must be odd; `window` is typically Kaiser or Hamming.
    pub fn new(kernel_length: usize, window: Window<R>) -> Self {
        debug_assert!(kernel_length % 2 == 1);
        let mut h = vec![R::zero(); kernel_length];
        design_hilbert_filter(&mut h, window);
        let delay = (kernel_length - 1) / 2;
        let mut delay_line = VecDeque::with_capacity(delay + 1);
        for _ in 0..delay {
            delay_line.push_back(R::zero());
        }
        Self {
            hilbert: FirFilter::owned(h),
            delay_line,
            delay,
        }
    }

    pub fn delay_samples(&self) -> usize {
        self.delay
    }

    pub fn push(&mut self, x: R) -> Complex<R> {
        let imag = self.hilbert.push(x);
        let real = if self.delay == 0 {
            x
        } else {
            self.delay_line.push_back(x);
            self.delay_line.pop_front().unwrap()
        };
        Complex::new(real, imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_matches_half_kernel_length() {
        let mut a: AnalyticalSignal<f64> = AnalyticalSignal::new(9, Window::Hamming);
        assert_eq!(a.delay_samples(), 4);
        // First 4 outputs' real parts should be 0 (delay line primed with zeros).
        for _ in 0..4 {
            let c = a.push(1.0);
            assert_eq!(c.re, 0.0);
        }
        let c = a.push(1.0);
        assert_eq!(c.re, 1.0);
    }
}
