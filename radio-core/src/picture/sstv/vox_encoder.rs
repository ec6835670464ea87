//! Renders the VOX tone sequence to samples via a shared [`Generator`].

use crate::math::Real;
use crate::picture::sstv::vox;
use crate::signal::generator::Generator;

pub struct VoxEncoder;

impl VoxEncoder {
    pub fn encode<R: Real>(generator: &mut Generator<R>, out: &mut Vec<R>) {
        for tone in vox::tones::<R>() {
            generator.set_segment(tone);
            while let Some(sample) = generator.next() {
                out.push(sample);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_eight_hundred_milliseconds_of_tones() {
        let sample_rate = 8000.0_f64;
        let mut generator = Generator::new(sample_rate);
        let mut out = Vec::new();
        VoxEncoder::encode(&mut generator, &mut out);
        let expected = (sample_rate * 0.8).round() as usize;
        assert!((out.len() as isize - expected as isize).unsigned_abs() <= 8);
    }
}
