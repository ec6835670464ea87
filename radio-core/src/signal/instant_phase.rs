//! Instantaneous phase of a complex (analytical) signal.

use crate::math::Real;
use num_complex::Complex;

/// Returns the instantaneous phase of `z` in radians, in `(-pi, pi]`.
pub fn instant_phase<R: Real>(z: Complex<R>) -> R {
    z.im.atan2(z.re)
}

/// Unwraps a sequence of phase samples in place so that successive
/// differences never exceed `pi` in magnitude.
pub fn unwrap_phase<R: Real>(phase: &mut [R]) {
    let two_pi = R::two_pi();
    let pi = R::pi();
    let mut offset = R::zero();
    for i in 1..phase.len() {
        let mut delta = phase[i] + offset - phase[i - 1];
        while delta > pi {
            offset = offset - two_pi;
            delta = delta - two_pi;
        }
        while delta < -pi {
            offset = offset + two_pi;
            delta = delta + two_pi;
        }
        phase[i] = phase[i] + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_of_positive_real_is_zero() {
        let z = Complex::new(1.0_f64, 0.0);
        assert_eq!(instant_phase(z), 0.0);
    }

    #[test]
    fn phase_of_positive_imaginary_is_half_pi() {
        let z = Complex::new(0.0_f64, 1.0);
        assert!((instant_phase(z) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn unwrap_removes_2pi_jumps() {
        let mut phase = vec![3.0_f64, -3.1, 3.0, -3.1];
        unwrap_phase(&mut phase);
        for w in phase.windows(2) {
            assert!((w[1] - w[0]).abs() < std::f64::consts::PI + 1e-9);
        }
    }
}
