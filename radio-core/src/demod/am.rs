//! AM envelope demodulator: `output = |c| - dc`, where `dc` tracks the
//! long-time average envelope with a slow EMA so DC offset and slow fading
//! are removed but audio passes through.

use crate::math::{magnitude, Real};
use num_complex::Complex;

pub struct AmDemodulator<R: Real> {
    dc: R,
    w_dc: R,
}

impl<R: Real> AmDemodulator<R> {
    pub fn new(w_dc: R) -> Self {
        Self { dc: R::zero(), w_dc }
    }

    pub fn push(&mut self, c: Complex<R>) -> R {
        let env = magnitude(c);
        self.dc = self.dc + self.w_dc * (env - self.dc);
        env - self.dc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_envelope_settles_near_zero() {
        let mut demod: AmDemodulator<f64> = AmDemodulator::new(0.1);
        let mut last = 1.0;
        for _ in 0..200 {
            last = demod.push(Complex::new(2.0, 0.0));
        }
        assert!(last.abs() < 1e-3, "last = {}", last);
    }
}
