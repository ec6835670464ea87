//! Composes horizontal line synchronization with the scanline decoder,
//! combining both stages' results for each frequency sample.

use crate::math::Real;
use crate::picture::sstv::line_decoder::LineDecoder;
use crate::picture::sstv::line_sync::LineSync;
use crate::picture::sstv::mode::Mode;
use crate::picture::sstv::result::{self, DecodedVariant, LineSynchronization, Result};

pub struct PictureDecoder<R: Real> {
    line_sync: LineSync<R>,
    line_decoder: LineDecoder<R>,
}

impl<R: Real> PictureDecoder<R> {
    pub fn new(sample_rate_hz: R, mode: Mode) -> Self {
        Self {
            line_sync: LineSync::new(sample_rate_hz, mode),
            line_decoder: LineDecoder::new(sample_rate_hz, mode),
        }
    }

    /// Forwards a decoded VIS code to the line decoder so it can select the
    /// mode and synchronize to the vertical sync's line time offset.
    pub fn on_vertical_sync(&mut self, vis_code: u8, line_time_offset_ms: R) {
        self.line_decoder
            .on_vertical_sync(vis_code, line_time_offset_ms);
    }

    pub fn push(&mut self, frequency: R) -> Result {
        let mut sync_result = result::empty_result()?;
        if self.line_sync.push(frequency) {
            self.line_decoder.on_line_sync();
            let _ = sync_result.try_push(DecodedVariant::LineSynchronization(
                LineSynchronization,
            ));
        }

        let line_result = self.line_decoder.push(frequency);
        result::combine(Ok(sync_result), line_result)
    }
}
