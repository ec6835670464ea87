//! Top-level SSTV decoder: amplitude samples in, protocol events out.
//!
//! A shared [`Prefilter`] turns audio samples into an instantaneous
//! frequency track, which feeds both the [`VisDecoder`] (mode header) and
//! the [`PictureDecoder`] (line sync + scanlines) independently. A decoded
//! VIS code re-synchronizes the picture decoder to the mode and line time
//! it implies; the picture decoder keeps running regardless of whether a
//! VIS code has ever been seen, so a receiver that joins mid-picture can
//! still lock on via line sync alone.

use crate::math::Real;
use crate::picture::sstv::mode::Mode;
use crate::picture::sstv::picture_decoder::PictureDecoder;
use crate::picture::sstv::prefilter::{Prefilter, PrefilterOptions};
use crate::picture::sstv::result::{self, DecodedVisCode, DecodedVariant, Result};
use crate::picture::sstv::vis_decoder::{VisDecoder, VisDecoderOptions};

pub struct Decoder<R: Real> {
    sample_rate_hz: R,
    prefilter: Prefilter<R>,
    vis_decoder: VisDecoder<R>,
    picture_decoder: PictureDecoder<R>,
}

impl<R: Real> Decoder<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            prefilter: Prefilter::new(PrefilterOptions::new(sample_rate_hz)),
            vis_decoder: VisDecoder::new(VisDecoderOptions::new(sample_rate_hz)),
            picture_decoder: PictureDecoder::new(sample_rate_hz, Mode::Unknown),
        }
    }

    pub fn push(&mut self, sample: R) -> Result {
        let frequency = self.prefilter.push(sample);

        let mut vis_result = result::empty_result()?;
        if let Some(vis_code) = self.vis_decoder.push(frequency) {
            self.picture_decoder
                .on_vertical_sync(vis_code, self.vis_decoder.delay_ms());
            let _ = vis_result.try_push(DecodedVariant::DecodedVisCode(DecodedVisCode {
                vis_code,
            }));
        }

        let picture_result = self.picture_decoder.push(frequency);
        let picture_result = match picture_result {
            Err(e) => return Err(e),
            Ok(value) => Ok(value),
        };

        result::combine(Ok(vis_result), picture_result)
    }

    pub fn sample_rate_hz(&self) -> R {
        self.sample_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_produces_no_events() {
        let mut decoder: Decoder<f64> = Decoder::new(8000.0);
        for _ in 0..2000 {
            let result = decoder.push(0.0).unwrap();
            assert!(result.is_empty());
        }
    }
}
