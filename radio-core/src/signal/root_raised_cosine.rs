//! Root-raised-cosine (RRC) matched-filter design.
//!
//! `T` from the canonical equations is `samples_per_symbol` here. The
//! designed filter has unity gain at DC, matching GNU Radio's
//! `firdes.root_raised_cosine(gain=1, ...)`.

use crate::math::Real;
use crate::signal::filter_design::scale_to_unity_gain_at_frequency;

fn rrc_weight<R: Real>(t: R, samples_per_symbol: R, beta: R) -> R {
    let pi = R::pi();
    let sps = samples_per_symbol;
    let sps_inv = R::one() / sps;

    if t == R::zero() {
        return sps_inv * (R::one() + beta * (R::from_f64(4.0) / pi - R::one()));
    }

    let sps_4beta = sps / (R::from_f64(4.0) * beta);
    if t == sps_4beta || t == -sps_4beta {
        let pi_4beta = pi / (R::from_f64(4.0) * beta);
        let s = (R::one() + R::from_f64(2.0) / pi) * pi_4beta.sin();
        let c = (R::one() - R::from_f64(2.0) / pi) * pi_4beta.cos();
        return beta / (sps * R::from_f64(2.0).sqrt()) * (s + c);
    }

    let t_sps = t * sps_inv;
    let pi_t_sps = pi * t_sps;
    let t_sps_4_beta = R::from_f64(4.0) * beta * t_sps;

    let s = (pi_t_sps * (R::one() - beta)).sin();
    let c = (pi_t_sps * (R::one() + beta)).cos();

    let num = s + t_sps_4_beta * c;
    let den = pi_t_sps * (R::one() - t_sps_4_beta * t_sps_4_beta);

    sps_inv * num / den
}

/// Design a root-raised-cosine matched filter. `h.len()` must be odd.
pub fn design_root_raised_cosine_filter<R: Real>(h: &mut [R], samples_per_symbol: R, beta: R) {
    debug_assert!(h.len() % 2 == 1, "RRC filter requires an odd tap count");
    let order = h.len() - 1;
    let half_order = R::from_usize(order) / R::from_f64(2.0);

    for (n, coeff) in h.iter_mut().enumerate() {
        let n_center = R::from_usize(n) - half_order;
        *coeff = rrc_weight(n_center, samples_per_symbol, beta);
    }

    scale_to_unity_gain_at_frequency(h, R::zero());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_unity_dc_gain() {
        let mut h = vec![0.0_f64; 65];
        design_root_raised_cosine_filter(&mut h, 8.0, 0.35);
        let dc: f64 = h.iter().sum();
        assert!((dc - 1.0).abs() < 1e-9, "dc = {}", dc);
    }

    #[test]
    fn is_symmetric() {
        let mut h = vec![0.0_f64; 65];
        design_root_raised_cosine_filter(&mut h, 8.0, 0.35);
        for i in 0..h.len() / 2 {
            assert!((h[i] - h[h.len() - 1 - i]).abs() < 1e-9);
        }
    }
}
