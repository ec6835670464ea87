//! APT encoding pipeline: for each image row, emits Sync A, Space A, Image
//! A, Telemetry A, Sync B, Space B, Image B, Telemetry B as AM-modulated
//! tone bursts at the sub-carrier frequency, one pixel-duration each.

use crate::base::FrequencyDuration;
use crate::math::Real;
use crate::picture::apt::info;
use crate::signal::generator::Generator;

pub struct AptEncoder<R: Real> {
    generator: Generator<R>,
    full_scale_bit: FrequencyDuration<R>,
}

impl<R: Real> AptEncoder<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            generator: Generator::new(sample_rate_hz),
            full_scale_bit: FrequencyDuration::new(
                R::from_f64(info::SUB_CARRIER_FREQUENCY_HZ),
                R::from_f64(1000.0) / R::from_f64(info::BAUD_RATE_HZ),
            ),
        }
    }

    /// Encodes one full line from channel A and channel B pixel rows
    /// (each [`info::NUM_IMAGE_PIXELS_PER_CHANNEL`] long), appending samples
    /// to `out`.
    pub fn encode_line(&mut self, image_a: &[u8], image_b: &[u8], out: &mut Vec<R>) {
        debug_assert_eq!(image_a.len(), info::NUM_IMAGE_PIXELS_PER_CHANNEL);
        debug_assert_eq!(image_b.len(), info::NUM_IMAGE_PIXELS_PER_CHANNEL);

        self.encode_sync(&info::SYNC_A, out);
        self.encode_constant(info::SPACE_WIDTH, 255, out);
        self.encode_image_row(image_a, out);
        self.encode_constant(info::TELEMETRY_WIDTH, 255, out);

        self.encode_sync(&info::SYNC_B, out);
        self.encode_constant(info::SPACE_WIDTH, 255, out);
        self.encode_image_row(image_b, out);
        self.encode_constant(info::TELEMETRY_WIDTH, 255, out);
    }

    /// Fades the sub-carrier out after the final line of a transmission.
    pub fn finish(&mut self, out: &mut Vec<R>) {
        self.generator.fade_to_zero(out);
    }

    fn encode_sync(&mut self, sync: &[bool], out: &mut Vec<R>) {
        for &bit in sync {
            self.encode_value(if bit { 255 } else { 0 }, out);
        }
    }

    fn encode_constant(&mut self, width: usize, value: u8, out: &mut Vec<R>) {
        for _ in 0..width {
            self.encode_value(value, out);
        }
    }

    fn encode_image_row(&mut self, pixels: &[u8], out: &mut Vec<R>) {
        for &pixel in pixels {
            self.encode_value(pixel, out);
        }
    }

    fn encode_value(&mut self, value: u8, out: &mut Vec<R>) {
        let amplitude = R::from_f64(value as f64) / R::from_f64(255.0);
        self.generator.set_segment(self.full_scale_bit);
        while let Some(sample) = self.generator.next() {
            out.push(sample * amplitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_a_full_line_with_expected_sample_count() {
        let sample_rate = 11_025.0_f64;
        let mut encoder = AptEncoder::new(sample_rate);
        let image_a = vec![128u8; info::NUM_IMAGE_PIXELS_PER_CHANNEL];
        let image_b = vec![64u8; info::NUM_IMAGE_PIXELS_PER_CHANNEL];

        let mut out = Vec::new();
        encoder.encode_line(&image_a, &image_b, &mut out);

        let samples_per_pixel = sample_rate / info::BAUD_RATE_HZ;
        let expected = (samples_per_pixel * info::NUM_PIXELS_PER_LINE as f64).round() as usize;
        assert!((out.len() as isize - expected as isize).unsigned_abs() <= info::NUM_PIXELS_PER_LINE);
    }

    #[test]
    fn finish_fades_to_a_zero_sample() {
        let mut encoder = AptEncoder::new(11_025.0_f64);
        let image_a = vec![0u8; info::NUM_IMAGE_PIXELS_PER_CHANNEL];
        let image_b = vec![0u8; info::NUM_IMAGE_PIXELS_PER_CHANNEL];
        let mut out = Vec::new();
        encoder.encode_line(&image_a, &image_b, &mut out);
        encoder.finish(&mut out);
        assert_eq!(*out.last().unwrap(), 0.0);
    }
}
