//! Hilbert transform FIR kernel design.

use crate::math::Real;
use crate::signal::window::{generate_window, Window};

/// Design a Hilbert-transform kernel of odd length `h.len()`.
///
/// `h[n] = (2 / (pi*m)) * sin^2(pi*m/2)` for `m = n - (K-1)/2, m != 0`,
/// multiplied by the window; `h[(K-1)/2] = 0`.
pub fn design_hilbert_filter<R: Real>(h: &mut [R], window: Window<R>) {
    let k = h.len();
    debug_assert!(k % 2 == 1, "Hilbert kernel length must be odd");
    let center = (k - 1) / 2;

    for n in 0..k {
        let m = n as isize - center as isize;
        if m == 0 {
            h[n] = R::zero();
        } else {
            let m = R::from_f64(m as f64);
            let half_pi_m = R::pi() * m / R::from_f64(2.0);
            let s = half_pi_m.sin();
            h[n] = (R::from_f64(2.0) / (R::pi() * m)) * (s * s);
        }
    }

    let mut win = vec![R::zero(); k];
    generate_window(&mut win, window);
    for (coeff, w) in h.iter_mut().zip(win.iter()) {
        *coeff = *coeff * *w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hilbert_kernel_center_tap_is_zero() {
        let mut h = [0.0_f64; 9];
        design_hilbert_filter(&mut h, Window::Hamming);
        assert_eq!(h[4], 0.0);
    }

    #[test]
    fn hilbert_kernel_is_antisymmetric() {
        let mut h = [0.0_f64; 9];
        design_hilbert_filter(&mut h, Window::Hamming);
        for i in 0..h.len() / 2 {
            assert!((h[i] + h[h.len() - 1 - i]).abs() < 1e-9);
        }
    }
}
