//! Raised-cosine (RC) pulse-shaping filter design.
//!
//! `T` from the canonical equations is `samples_per_symbol` here. The
//! designed filter has unity gain at DC.

use crate::math::{sinc, Real};
use crate::signal::filter_design::scale_to_unity_gain_at_frequency;

fn rc_weight<R: Real>(t: R, samples_per_symbol: R, beta: R) -> R {
    let pi = R::pi();
    let sps = samples_per_symbol;
    let sps_2beta = sps / (R::from_f64(2.0) * beta);

    if t == sps_2beta || t == -sps_2beta {
        return pi / (R::from_f64(4.0) * sps) * sinc(R::one() / (R::from_f64(2.0) * beta));
    }

    let beta_t_over_sps = beta * t / sps;
    (R::one() / sps)
        * sinc(t / sps)
        * ((pi * beta_t_over_sps).cos()
            / (R::one() - R::from_f64(4.0) * beta_t_over_sps * beta_t_over_sps))
}

/// Design a raised-cosine low-pass filter. `h.len()` must be odd.
pub fn design_raised_cosine_filter<R: Real>(h: &mut [R], samples_per_symbol: R, beta: R) {
    debug_assert!(h.len() % 2 == 1, "RC filter requires an odd tap count");
    let order = h.len() - 1;
    let half_order = R::from_usize(order) / R::from_f64(2.0);

    for (n, coeff) in h.iter_mut().enumerate() {
        let n_center = R::from_usize(n) - half_order;
        *coeff = rc_weight(n_center, samples_per_symbol, beta);
    }

    scale_to_unity_gain_at_frequency(h, R::zero());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_unity_dc_gain() {
        let mut h = vec![0.0_f64; 65];
        design_raised_cosine_filter(&mut h, 8.0, 0.35);
        let dc: f64 = h.iter().sum();
        assert!((dc - 1.0).abs() < 1e-9, "dc = {}", dc);
    }

    #[test]
    fn is_symmetric() {
        let mut h = vec![0.0_f64; 65];
        design_raised_cosine_filter(&mut h, 8.0, 0.35);
        for i in 0..h.len() / 2 {
            assert!((h[i] - h[h.len() - 1 - i]).abs() < 1e-9);
        }
    }
}
