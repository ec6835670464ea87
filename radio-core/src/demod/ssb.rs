//! SSB demodulator: `y = delay(real(c)) +- hilbert(-imag(c))`, sign `-` for
//! USB, `+` for LSB.

use crate::math::Real;
use crate::signal::fir_filter::FirFilter;
use crate::signal::hilbert::design_hilbert_filter;
use crate::signal::window::Window;
use num_complex::Complex;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sideband {
    Usb,
    Lsb,
}

pub struct SsbDemodulator<R: Real> {
    hilbert: FirFilter<'static, R>,
    delay_line: VecDeque<R>,
    delay: usize,
    sideband: Sideband,
}

impl<R: Real> SsbDemodulator<R> {
    /// `kernel_length` is caller-chosen; 121 taps with a Hamming window is
    /// a typical choice for audio-bandwidth SSB.
    pub fn new(kernel_length: usize, sideband: Sideband) -> Self {
        debug_assert!(kernel_length % 2 == 1);
        let mut h = vec![R::zero(); kernel_length];
        design_hilbert_filter(&mut h, Window::Hamming);
        let delay = (kernel_length - 1) / 2;
        let mut delay_line = VecDeque::with_capacity(delay + 1);
        for _ in 0..delay {
            delay_line.push_back(R::zero());
        }
        Self {
            hilbert: FirFilter::owned(h),
            delay_line,
            delay,
            sideband,
        }
    }

    pub fn push(&mut self, c: Complex<R>) -> R {
        let hilbert_of_neg_imag = self.hilbert.push(-c.im);
        let real = if self.delay == 0 {
            c.re
        } else {
            self.delay_line.push_back(c.re);
            self.delay_line.pop_front().unwrap()
        };
        match self.sideband {
            Sideband::Usb => real - hilbert_of_neg_imag,
            Sideband::Lsb => real + hilbert_of_neg_imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usb_and_lsb_diverge_on_nonzero_imaginary_input() {
        let mut usb = SsbDemodulator::<f64>::new(31, Sideband::Usb);
        let mut lsb = SsbDemodulator::<f64>::new(31, Sideband::Lsb);
        let mut diverged = false;
        for i in 0..200 {
            let c = Complex::new((i as f64).sin(), (i as f64 * 0.3).cos());
            if (usb.push(c) - lsb.push(c)).abs() > 1e-9 {
                diverged = true;
            }
        }
        assert!(diverged);
    }
}
