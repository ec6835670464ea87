//! Renders a picture message's scanlines to tone segments, per the mode's
//! line encoding. Only `YccAverageCrCb` (the PD family's encoding) is
//! implemented, matching the modes this crate supports.

use crate::color::{rgb_to_ycbcr, Color3};
use crate::math::Real;
use crate::picture::sstv::line_encoding::LineEncoding;
use crate::picture::sstv::luma::luma_to_frequency;
use crate::picture::sstv::message::Message;
use crate::picture::sstv::mode_spec::ModeSpec;
use crate::signal::generator::Generator;

pub struct PictureEncoder;

impl PictureEncoder {
    /// Encodes `message`'s pixels as tone segments via `generator`, written
    /// into `out` as samples. Silently does nothing if the message's pixel
    /// buffer doesn't cover the mode's full image, mirroring the reference
    /// encoder's validation.
    pub fn encode<R: Real>(message: &Message, generator: &mut Generator<R>, out: &mut Vec<R>) {
        let Some(mode_spec) = ModeSpec::<R>::get(message.mode) else {
            return;
        };
        if message.pixels.len() < mode_spec.image_width * mode_spec.image_height {
            return;
        }

        match mode_spec.line_encoding {
            LineEncoding::YccAverageCrCb => {
                Self::encode_ycbcr_average_cr_cb(&mode_spec, message, generator, out)
            }
        }
    }

    fn encode_ycbcr_average_cr_cb<R: Real>(
        mode_spec: &ModeSpec<R>,
        message: &Message,
        generator: &mut Generator<R>,
        out: &mut Vec<R>,
    ) {
        let width = mode_spec.image_width;
        let mut emit = |segment, out: &mut Vec<R>| {
            generator.set_segment(segment);
            while let Some(sample) = generator.next() {
                out.push(sample);
            }
        };

        let mut y = 0;
        while y + 1 < mode_spec.image_height {
            emit(mode_spec.line_sync, out);
            emit(mode_spec.line_porch, out);

            let row0 = &message.pixels[y * width..(y + 1) * width];
            let row1 = &message.pixels[(y + 1) * width..(y + 2) * width];

            let mut ycc0 = Vec::with_capacity(width);
            let mut ycc1 = Vec::with_capacity(width);
            for pixel in row0 {
                ycc0.push(to_ycc(*pixel));
            }
            for pixel in row1 {
                ycc1.push(to_ycc(*pixel));
            }

            for ycc in &ycc0 {
                let frequency = luma_to_frequency(mode_spec, ycc.0);
                emit(
                    crate::base::FrequencyDuration::new(frequency, mode_spec.pixel_duration_ms),
                    out,
                );
            }
            for x in 0..width {
                let cr_avg = (ycc0[x].2 + ycc1[x].2) / R::from_f64(2.0);
                let frequency = luma_to_frequency(mode_spec, cr_avg);
                emit(
                    crate::base::FrequencyDuration::new(frequency, mode_spec.pixel_duration_ms),
                    out,
                );
            }
            for x in 0..width {
                let cb_avg = (ycc0[x].1 + ycc1[x].1) / R::from_f64(2.0);
                let frequency = luma_to_frequency(mode_spec, cb_avg);
                emit(
                    crate::base::FrequencyDuration::new(frequency, mode_spec.pixel_duration_ms),
                    out,
                );
            }
            for ycc in &ycc1 {
                let frequency = luma_to_frequency(mode_spec, ycc.0);
                emit(
                    crate::base::FrequencyDuration::new(frequency, mode_spec.pixel_duration_ms),
                    out,
                );
            }

            y += 2;
        }
    }
}

/// Returns `(y, cb, cr)`, each in `[0, 1]`.
fn to_ycc<R: Real>(pixel: Color3<u8>) -> (R, R, R) {
    let to_unit = |v: u8| R::from_f64(v as f64 / 255.0);
    rgb_to_ycbcr(to_unit(pixel.channel0), to_unit(pixel.channel1), to_unit(pixel.channel2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::sstv::mode::Mode;

    #[test]
    fn encodes_four_pixels_worth_of_tones_per_two_rows() {
        let mode_spec = ModeSpec::<f64>::get(Mode::Pd290).unwrap();
        let pixels = vec![Color3::new(128u8, 128, 128); mode_spec.image_width * mode_spec.image_height];
        let message = Message {
            mode: Mode::Pd290,
            pixels: &pixels,
        };

        let mut generator = Generator::new(8000.0);
        let mut out = Vec::new();
        PictureEncoder::encode(&message, &mut generator, &mut out);

        assert!(!out.is_empty());
    }

    #[test]
    fn rejects_pixel_buffer_smaller_than_the_mode_image() {
        let pixels = vec![Color3::new(0u8, 0, 0); 4];
        let message = Message {
            mode: Mode::Pd290,
            pixels: &pixels,
        };
        let mut generator = Generator::new(8000.0);
        let mut out = Vec::new();
        PictureEncoder::encode(&message, &mut generator, &mut out);
        assert!(out.is_empty());
    }
}
