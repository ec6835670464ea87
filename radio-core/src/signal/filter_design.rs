//! FIR filter design: low-pass, band-pass, fractional-delay, plus the
//! Kaiser-window size/beta heuristics used to pick a kernel length for a
//! target transition bandwidth and stopband attenuation.

use crate::math::{sinc, Real};
use crate::signal::window::{generate_window, Window};
use num_complex::Complex;

/// Scale `h` so its frequency response has unity magnitude at the given
/// normalized frequency (cycles/sample, i.e. already divided by the
/// sampling rate).
pub(crate) fn scale_to_unity_gain_at_frequency<R: Real>(h: &mut [R], normalized_frequency: R) {
    let mut response = Complex::new(R::zero(), R::zero());
    for (n, &coeff) in h.iter().enumerate() {
        let angle = -R::two_pi() * normalized_frequency * R::from_usize(n);
        response += Complex::new(coeff * angle.cos(), coeff * angle.sin());
    }
    let gain = (response.re * response.re + response.im * response.im).sqrt();
    if gain > R::from_f64(1e-12) {
        for coeff in h.iter_mut() {
            *coeff = *coeff / gain;
        }
    }
}

/// Design a low-pass FIR with `h.len()` taps, `window` applied, cutoff
/// frequency `cutoff_hz` and the given sampling rate. `cutoff_hz` must be
/// within `[0, sampling_rate_hz / 2]`.
pub fn design_low_pass_filter<R: Real>(
    h: &mut [R],
    window: Window<R>,
    cutoff_hz: R,
    sampling_rate_hz: R,
) {
    debug_assert!(cutoff_hz <= sampling_rate_hz / R::from_f64(2.0));

    let ft = cutoff_hz / sampling_rate_hz;
    let num_taps = h.len();
    let order = num_taps - 1;
    let half_order = R::from_usize(order) / R::from_f64(2.0);
    let half_order_int = order / 2;

    for n in 0..num_taps {
        if num_taps % 2 == 1 && n == half_order_int {
            h[n] = R::from_f64(2.0) * ft;
        } else {
            let pi_n_half_order = R::pi() * (R::from_usize(n) - half_order);
            h[n] = (pi_n_half_order * R::from_f64(2.0) * ft).sin() / pi_n_half_order;
        }
    }
    apply_window(h, window);

    scale_to_unity_gain_at_frequency(h, R::zero());
}

/// Design a band-pass FIR passing `[cutoff_start_hz, cutoff_end_hz]`.
/// `h.len()` must be odd (even filter order).
pub fn design_band_pass_filter<R: Real>(
    h: &mut [R],
    window: Window<R>,
    cutoff_start_hz: R,
    cutoff_end_hz: R,
    sampling_rate_hz: R,
) {
    debug_assert!(h.len() % 2 == 1, "band-pass filter length must be odd");

    let ft1 = cutoff_start_hz / sampling_rate_hz;
    let ft2 = cutoff_end_hz / sampling_rate_hz;

    let num_taps = h.len();
    let order = num_taps - 1;
    let half_order = R::from_usize(order) / R::from_f64(2.0);
    let half_order_int = order / 2;

    for n in 0..num_taps {
        if n == half_order_int {
            h[n] = R::from_f64(2.0) * (ft2 - ft1);
        } else {
            let pi_n_half_order = R::pi() * (R::from_usize(n) - half_order);
            let two_pi_n = pi_n_half_order * R::from_f64(2.0);
            h[n] = (two_pi_n * ft2).sin() / pi_n_half_order - (two_pi_n * ft1).sin() / pi_n_half_order;
        }
    }
    apply_window(h, window);

    let f_center = (ft1 + ft2) * R::from_f64(0.5);
    scale_to_unity_gain_at_frequency(h, f_center);
}

/// Design a filter that delays its input by `num_fractional_samples`
/// samples (not necessarily integral).
pub fn design_fractional_delay_filter<R: Real>(
    h: &mut [R],
    window: Window<R>,
    num_fractional_samples: R,
) {
    let num_taps = h.len();
    let order = num_taps - 1;
    let half_order = R::from_usize(order) / R::from_f64(2.0);

    for n in 0..num_taps {
        let n_center = R::from_usize(n) - half_order;
        h[n] = sinc(n_center - num_fractional_samples);
    }
    apply_window(h, window);

    scale_to_unity_gain_at_frequency(h, R::zero());
}

fn apply_window<R: Real>(h: &mut [R], window: Window<R>) {
    let mut buf = vec![R::zero(); h.len()];
    generate_window(&mut buf, window);
    for (coeff, w) in h.iter_mut().zip(buf.iter()) {
        *coeff = *coeff * *w;
    }
}

/// Estimate the normalized transition bandwidth achievable by a filter of
/// the given length (rule of thumb: `4 / filter_size`).
pub fn estimate_normalized_transition_bandwidth<R: Real>(filter_size: usize) -> R {
    R::from_f64(4.0) / R::from_usize(filter_size)
}

/// Estimate filter length needed for a normalized transition bandwidth.
pub fn estimate_filter_size_for_normalized_transition_bandwidth<R: Real>(
    transition_bandwidth: R,
) -> usize {
    (R::from_f64(4.0) / transition_bandwidth).to_f64().round() as usize
}

/// Estimate filter length for a transition band in Hz at the given sample rate.
pub fn estimate_filter_size_for_transition_bandwidth<R: Real>(
    transition_bandwidth_hz: R,
    sample_rate_hz: R,
) -> usize {
    let normalized_angular = R::two_pi() * transition_bandwidth_hz / sample_rate_hz;
    (R::from_f64(4.0) / normalized_angular).to_f64() as usize
}

/// Kaiser window beta for a target stopband attenuation `alpha_db`.
pub fn calculate_kaiser_beta<R: Real>(alpha_db: R) -> R {
    if alpha_db > R::from_f64(50.0) {
        R::from_f64(0.1102) * (alpha_db - R::from_f64(8.7))
    } else if alpha_db >= R::from_f64(21.0) {
        let a21 = alpha_db - R::from_f64(21.0);
        R::from_f64(0.5842) * a21.powf(R::from_f64(0.4)) + R::from_f64(0.07886) * a21
    } else {
        R::zero()
    }
}

/// Kaiser window length (number of taps) for stopband attenuation `alpha_db`
/// and normalized transition width `dw` (radians/sample).
pub fn calculate_kaiser_size<R: Real>(alpha_db: R, dw: R) -> usize {
    let size = (alpha_db - R::from_f64(8.0)) / (R::from_f64(2.285) * dw) + R::one();
    size.to_f64().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_pass_filter_has_unity_dc_gain() {
        let mut h = [0.0_f64; 21];
        design_low_pass_filter(&mut h, Window::Hamming, 1000.0, 8000.0);
        let dc_gain: f64 = h.iter().sum();
        assert!((dc_gain - 1.0).abs() < 1e-9);
    }

    #[test]
    fn low_pass_filter_is_symmetric() {
        let mut h = [0.0_f64; 21];
        design_low_pass_filter(&mut h, Window::Blackman, 500.0, 8000.0);
        for i in 0..h.len() / 2 {
            assert!((h[i] - h[h.len() - 1 - i]).abs() < 1e-9);
        }
    }

    #[test]
    fn kaiser_beta_follows_piecewise_rule() {
        assert_eq!(calculate_kaiser_beta(10.0_f64), 0.0);
        assert!(calculate_kaiser_beta(60.0_f64) > 0.0);
    }
}
