//! Top-level SSTV encoder: optional VOX tones, then the VIS header, then
//! the picture itself.

use crate::math::Real;
use crate::picture::sstv::message::Message;
use crate::picture::sstv::mode::{vis_code_from_mode, Mode};
use crate::picture::sstv::mode_spec::ModeSpec;
use crate::picture::sstv::picture_encoder::PictureEncoder;
use crate::picture::sstv::vis_encoder::VisEncoder;
use crate::picture::sstv::vox_encoder::VoxEncoder;
use crate::signal::generator::Generator;

#[derive(Debug, Clone, Copy)]
pub struct EncoderOptions {
    pub generate_vox: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { generate_vox: true }
    }
}

pub struct Encoder<R: Real> {
    options: EncoderOptions,
    generator: Generator<R>,
}

impl<R: Real> Encoder<R> {
    pub fn new(sample_rate_hz: R, options: EncoderOptions) -> Self {
        Self {
            options,
            generator: Generator::new(sample_rate_hz),
        }
    }

    /// Encodes `message` to `out` as samples. Does nothing if the mode is
    /// unknown or the message has no usable pixel buffer for it.
    ///
    /// TODO: EOF, FSKID, and CWID trailers are not implemented.
    pub fn encode(&mut self, message: &Message, out: &mut Vec<R>) {
        if message.mode == Mode::Unknown {
            return;
        }
        if ModeSpec::<R>::get(message.mode).is_none() {
            return;
        }

        if self.options.generate_vox {
            VoxEncoder::encode(&mut self.generator, out);
        }

        let vis_code = vis_code_from_mode(message.mode);
        VisEncoder::encode(vis_code, &mut self.generator, out);

        PictureEncoder::encode(message, &mut self.generator, out);
    }

    pub fn finish(&mut self, out: &mut Vec<R>) {
        self.generator.fade_to_zero(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color3;

    #[test]
    fn unknown_mode_emits_nothing() {
        let mut encoder: Encoder<f64> = Encoder::new(8000.0, EncoderOptions::default());
        let pixels: Vec<Color3<u8>> = Vec::new();
        let message = Message {
            mode: Mode::Unknown,
            pixels: &pixels,
        };
        let mut out = Vec::new();
        encoder.encode(&message, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn known_mode_emits_vox_vis_and_picture_tones() {
        let mode_spec = ModeSpec::<f64>::get(Mode::Pd290).unwrap();
        let pixels = vec![Color3::new(10u8, 20, 30); mode_spec.image_width * mode_spec.image_height];
        let message = Message {
            mode: Mode::Pd290,
            pixels: &pixels,
        };
        let mut encoder: Encoder<f64> = Encoder::new(8000.0, EncoderOptions::default());
        let mut out = Vec::new();
        encoder.encode(&message, &mut out);
        encoder.finish(&mut out);
        assert!(!out.is_empty());
    }
}
