//! Renders a VIS digital code -- leader/break/leader, start bit, 7 data
//! bits (LSB first), even parity, stop bit -- to samples via a shared
//! [`Generator`].

use crate::math::Real;
use crate::picture::sstv::vis;
use crate::signal::generator::Generator;

pub struct VisEncoder;

impl VisEncoder {
    /// Encodes `digital_code`'s low 7 bits (the MSB is ignored and replaced
    /// by the computed parity bit, per the VIS wire format).
    pub fn encode<R: Real>(digital_code: u8, generator: &mut Generator<R>, out: &mut Vec<R>) {
        let mut emit = |segment, out: &mut Vec<R>| {
            generator.set_segment(segment);
            while let Some(sample) = generator.next() {
                out.push(sample);
            }
        };

        for tone in vis::leader_sequence::<R>() {
            emit(tone, out);
        }

        emit(vis::start_bit::<R>(), out);

        let mut num_ones = 0u32;
        for i in 0..7 {
            if digital_code & (1 << i) != 0 {
                num_ones += 1;
                emit(vis::bit_value_one::<R>(), out);
            } else {
                emit(vis::bit_value_zero::<R>(), out);
            }
        }

        if num_ones % 2 == 1 {
            emit(vis::bit_value_one::<R>(), out);
        } else {
            emit(vis::bit_value_zero::<R>(), out);
        }

        emit(vis::stop_bit::<R>(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_expected_total_duration() {
        let sample_rate = 8000.0_f64;
        let mut generator = Generator::new(sample_rate);
        let mut out = Vec::new();
        VisEncoder::encode(0x5e, &mut generator, &mut out);

        // 300 + 10 + 300 (leader) + 10 * 30 (start/data/parity/stop) ms.
        let expected_ms = 300.0 + 10.0 + 300.0 + 10.0 * 30.0;
        let expected = (sample_rate * expected_ms / 1000.0).round() as usize;
        assert!((out.len() as isize - expected as isize).unsigned_abs() <= 12);
    }
}
