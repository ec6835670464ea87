//! VOX tone sequence transmitted ahead of the VIS header, used by some
//! receivers to voice-activate their recording before the picture arrives.

use crate::base::FrequencyDuration;
use crate::math::Real;

const TONES_HZ_MS: [(f64, f64); 8] = [
    (1900.0, 100.0),
    (1500.0, 100.0),
    (1900.0, 100.0),
    (1500.0, 100.0),
    (2300.0, 100.0),
    (1500.0, 100.0),
    (2300.0, 100.0),
    (1500.0, 100.0),
];

pub fn tones<R: Real>() -> [FrequencyDuration<R>; 8] {
    TONES_HZ_MS.map(|(freq, dur)| FrequencyDuration::new(R::from_f64(freq), R::from_f64(dur)))
}
