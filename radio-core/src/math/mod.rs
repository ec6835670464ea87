//! Elementary math wrappers and constants shared by the DSP toolkit.

mod real;

pub use real::Real;

use num_complex::Complex;

/// `2*pi`, spelled out because `std::f64::consts::TAU` reads less clearly
/// next to `PI` in the filter-design formulas below.
pub const TAU: f64 = std::f64::consts::PI * 2.0;

/// Clamp `value` to `[0, 1]`, matching the reference implementation's
/// `Saturate()` helper used by colour conversion and APT pixel writing.
pub fn saturate<R: Real>(value: R) -> R {
    value.max(R::zero()).min(R::one())
}

/// `sinc(x) = sin(pi*x) / (pi*x)`, with the removable singularity at 0
/// filled in by its limit.
pub fn sinc<R: Real>(x: R) -> R {
    if x == R::zero() {
        R::one()
    } else {
        let pix = R::pi() * x;
        pix.sin() / pix
    }
}

/// Zeroth-order modified Bessel function of the first kind, used by the
/// Kaiser window. Converges quickly for the beta range used in filter
/// design (beta < ~20) so a fixed number of series terms is sufficient.
pub fn bessel_i0<R: Real>(x: R) -> R {
    let mut sum = R::one();
    let mut term = R::one();
    let half_x = x * R::from_f64(0.5);
    for k in 1..32 {
        let kf = R::from_f64(k as f64);
        term = term * (half_x / kf) * (half_x / kf);
        sum = sum + term;
        if term < R::from_f64(1e-12) {
            break;
        }
    }
    sum
}

/// Magnitude of a complex sample, as a free function so call sites read the
/// same whether `c` is `Complex<f32>` or `Complex<f16>`-via-`f32` math.
pub fn magnitude<R: Real>(c: Complex<R>) -> R {
    (c.re * c.re + c.im * c.im).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinc_at_zero_is_one() {
        assert_eq!(sinc(0.0_f64), 1.0);
    }

    #[test]
    fn saturate_clamps() {
        assert_eq!(saturate(-0.5_f64), 0.0);
        assert_eq!(saturate(1.5_f64), 1.0);
        assert_eq!(saturate(0.3_f64), 0.3);
    }

    #[test]
    fn bessel_i0_at_zero_is_one() {
        assert!((bessel_i0(0.0_f64) - 1.0).abs() < 1e-9);
    }
}
