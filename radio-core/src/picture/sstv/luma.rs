//! Conversion between luma `[0, 1]` and the tone frequency that represents
//! it, linear between a mode's black and white frequencies.

use crate::math::{saturate, Real};
use crate::picture::sstv::mode_spec::ModeSpec;

pub fn frequency_to_luma<R: Real>(mode_spec: &ModeSpec<R>, frequency_hz: R) -> R {
    saturate(
        (frequency_hz - mode_spec.black_frequency_hz)
            / (mode_spec.white_frequency_hz - mode_spec.black_frequency_hz),
    )
}

pub fn luma_to_frequency<R: Real>(mode_spec: &ModeSpec<R>, luma: R) -> R {
    saturate(luma) * (mode_spec.white_frequency_hz - mode_spec.black_frequency_hz)
        + mode_spec.black_frequency_hz
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::sstv::mode::Mode;

    #[test]
    fn black_and_white_frequencies_round_trip_to_luma_extremes() {
        let spec = ModeSpec::<f64>::get(Mode::Pd290).unwrap();
        assert_eq!(frequency_to_luma(&spec, spec.black_frequency_hz), 0.0);
        assert_eq!(frequency_to_luma(&spec, spec.white_frequency_hz), 1.0);
        assert_eq!(luma_to_frequency(&spec, 0.0), spec.black_frequency_hz);
        assert_eq!(luma_to_frequency(&spec, 1.0), spec.white_frequency_hz);
    }
}
