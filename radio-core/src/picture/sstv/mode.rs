//! SSTV transmission modes. Each mode is identified by the byte transmitted
//! in the VIS header; [`ModeSpec`](crate::picture::sstv::mode_spec::ModeSpec)
//! carries the rest of its timing and image parameters.

/// A supported SSTV mode, or `Unknown` for an unrecognised VIS code.
///
/// Only the PD family is implemented (PD90 through PD290); other historic
/// modes (Scottie, Martin, Robot) are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Unknown,
    Pd90,
    Pd120,
    Pd160,
    Pd180,
    Pd240,
    Pd290,
}

/// The canonical abbreviated name of the mode, e.g. `"PD90"`.
pub fn name(mode: Mode) -> &'static str {
    match mode {
        Mode::Unknown => "Unknown",
        Mode::Pd90 => "PD90",
        Mode::Pd120 => "PD120",
        Mode::Pd160 => "PD160",
        Mode::Pd180 => "PD180",
        Mode::Pd240 => "PD240",
        Mode::Pd290 => "PD290",
    }
}

/// Converts the digital code carried by the VIS header into a [`Mode`].
/// An unrecognised code maps to `Mode::Unknown`.
pub fn mode_from_vis_code(vis_code: u8) -> Mode {
    match vis_code {
        0x63 => Mode::Pd90,
        0x5f => Mode::Pd120,
        0x62 => Mode::Pd160,
        0x60 => Mode::Pd180,
        0x61 => Mode::Pd240,
        0x5e => Mode::Pd290,
        _ => Mode::Unknown,
    }
}

/// Converts a [`Mode`] into the digital code transmitted in the VIS header.
pub fn vis_code_from_mode(mode: Mode) -> u8 {
    match mode {
        Mode::Unknown => 0,
        Mode::Pd90 => 0x63,
        Mode::Pd120 => 0x5f,
        Mode::Pd160 => 0x62,
        Mode::Pd180 => 0x60,
        Mode::Pd240 => 0x61,
        Mode::Pd290 => 0x5e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vis_code_round_trips_through_mode() {
        for mode in [
            Mode::Pd90,
            Mode::Pd120,
            Mode::Pd160,
            Mode::Pd180,
            Mode::Pd240,
            Mode::Pd290,
        ] {
            let code = vis_code_from_mode(mode);
            assert_eq!(mode_from_vis_code(code), mode);
        }
    }

    #[test]
    fn unknown_vis_code_maps_to_unknown_mode() {
        assert_eq!(mode_from_vis_code(0x00), Mode::Unknown);
    }
}
