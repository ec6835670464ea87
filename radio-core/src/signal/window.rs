//! Window functions used by filter design (see [`crate::signal::filter_design`]).
//!
//! Filter order `M` is `num_taps - 1`; each window equation is evaluated at
//! `n in 0..=M`, matching the handbook convention the formulas are written
//! against rather than idiomatic zero-based "fraction of length".

use crate::math::{bessel_i0, Real};

/// Selects which window equation [`generate_window`] evaluates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window<R> {
    Boxcar,
    Triangular,
    Hann,
    /// Original Hamming, alpha = 0.54.
    Hamming,
    /// Equiripple-optimal Hamming, alpha = 0.53836.
    OptimalHamming,
    Blackman,
    Cosine,
    Kaiser { beta: R },
}

fn window_value<R: Real>(window: Window<R>, order: R, n: R) -> R {
    match window {
        Window::Boxcar => R::one(),
        Window::Triangular => {
            R::one() - R::from_f64(2.0) * ((n - order / R::from_f64(2.0)).abs()) / order
        }
        Window::Hann => {
            let s = (R::pi() * n / order).sin();
            s * s
        }
        Window::Hamming => {
            let a0 = R::from_f64(0.54);
            let a1 = R::from_f64(0.46);
            a0 - a1 * (R::two_pi() * n / order).cos()
        }
        Window::OptimalHamming => {
            let a0 = R::from_f64(0.53836);
            let a1 = R::from_f64(0.46164);
            a0 - a1 * (R::two_pi() * n / order).cos()
        }
        Window::Blackman => {
            let a0 = R::from_f64(0.42);
            let a1 = R::from_f64(0.5);
            let a2 = R::from_f64(0.08);
            let n_order = n / order;
            a0 - a1 * (R::two_pi() * n_order).cos() + a2 * (R::two_pi() * R::from_f64(2.0) * n_order).cos()
        }
        Window::Cosine => (R::pi() * (n + R::from_f64(0.5)) / (order + R::one())).sin(),
        Window::Kaiser { beta } => {
            let half_order = order / R::from_f64(2.0);
            let a = (n - half_order) / half_order;
            bessel_i0(beta * (R::one() - a * a).max(R::zero()).sqrt()) / bessel_i0(beta)
        }
    }
}

/// Fill `out` with the window's values, `out.len()` taps.
pub fn generate_window<R: Real>(out: &mut [R], window: Window<R>) {
    let num_taps = out.len();
    if num_taps == 0 {
        return;
    }
    let order = R::from_usize(num_taps - 1);
    for (n, slot) in out.iter_mut().enumerate() {
        *slot = window_value(window, order, R::from_usize(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxcar_is_all_ones() {
        let mut h = [0.0_f64; 5];
        generate_window(&mut h, Window::Boxcar);
        assert_eq!(h, [1.0; 5]);
    }

    #[test]
    fn hann_window_is_zero_at_edges() {
        let mut h = [0.0_f64; 9];
        generate_window(&mut h, Window::Hann);
        assert!(h[0].abs() < 1e-9);
        assert!(h[8].abs() < 1e-9);
        assert!(h[4] > 0.9);
    }

    #[test]
    fn hamming_window_is_symmetric() {
        let mut h = [0.0_f64; 11];
        generate_window(&mut h, Window::Hamming);
        for i in 0..h.len() / 2 {
            assert!((h[i] - h[h.len() - 1 - i]).abs() < 1e-9);
        }
    }

    #[test]
    fn kaiser_beta_zero_matches_boxcar_like_shape() {
        let mut h = [0.0_f64; 7];
        generate_window(&mut h, Window::Kaiser { beta: 0.0 });
        for v in h {
            assert!((v - 1.0).abs() < 1e-9);
        }
    }
}
