//! Scanline decoder: samples pixel luma on a line clock derived from
//! either vertical (VIS) or horizontal (line tone) synchronization, and
//! decodes completed lines into RGB rows per the mode's line encoding.

use crate::color::Color3;
use crate::math::{ycbcr_to_rgb, Real};
use crate::picture::sstv::luma::frequency_to_luma;
use crate::picture::sstv::mode::{mode_from_vis_code, Mode};
use crate::picture::sstv::mode_limits::MAX_NUM_PIXELS_PER_LINE;
use crate::picture::sstv::mode_spec::ModeSpec;
use crate::picture::sstv::result::{
    self, DecodedVariant, ImagePixelsBegin, ImagePixelsEnd, ImagePixelsRow, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    WaitForSyncEvent,
    DecodeLine,
}

pub struct LineDecoder<R: Real> {
    mode_spec: ModeSpec<R>,
    time_ms_per_sample: R,
    pixel_sample_average_weight: R,
    total_synchronization_time_ms: R,
    total_line_time_ms: R,

    state: State,
    num_line_samples: usize,
    line_start_offset_ms: R,
    num_decoded_lines: usize,
    pixels_decode_started: bool,
    num_decoded_pixels_in_line: usize,
    line_pixels_luma: Vec<R>,
    pixel_freq_average: R,
    next_pixel_sample_time_ms: R,
}

impl<R: Real> LineDecoder<R> {
    pub fn new(sample_rate_hz: R, mode: Mode) -> Self {
        let mode = if mode == Mode::Unknown {
            Mode::Pd290
        } else {
            mode
        };
        let mode_spec = ModeSpec::<R>::get(mode).expect("a known SSTV mode always has a spec");

        let total_synchronization_time_ms =
            mode_spec.line_sync.duration_ms + mode_spec.line_porch.duration_ms;
        let total_line_time_ms = total_synchronization_time_ms + mode_spec.line_pixels_duration_ms;

        Self {
            time_ms_per_sample: R::from_f64(1000.0) / sample_rate_hz,
            pixel_sample_average_weight: R::from_f64(0.85),
            total_synchronization_time_ms,
            total_line_time_ms,
            mode_spec,
            state: State::WaitForSyncEvent,
            num_line_samples: 0,
            line_start_offset_ms: R::zero(),
            num_decoded_lines: 0,
            pixels_decode_started: false,
            num_decoded_pixels_in_line: 0,
            line_pixels_luma: vec![R::zero(); MAX_NUM_PIXELS_PER_LINE],
            pixel_freq_average: R::zero(),
            next_pixel_sample_time_ms: R::zero(),
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        let mode_spec = ModeSpec::<R>::get(mode).expect("OnVerticalSync only passes known modes");
        self.total_synchronization_time_ms =
            mode_spec.line_sync.duration_ms + mode_spec.line_porch.duration_ms;
        self.total_line_time_ms =
            self.total_synchronization_time_ms + mode_spec.line_pixels_duration_ms;
        self.mode_spec = mode_spec;
    }

    /// Informs the decoder that a VIS code was decoded, selecting the mode
    /// and (re-)synchronizing to the line time offset the VIS decoder's
    /// processing delay implies.
    pub fn on_vertical_sync(&mut self, vis_code: u8, line_time_offset_ms: R) {
        let mode = mode_from_vis_code(vis_code);
        if mode == Mode::Unknown {
            return;
        }
        self.set_mode(mode);
        self.state = State::WaitForSyncEvent;
        self.switch_or_sync_to_decode_line(line_time_offset_ms);
    }

    /// Informs the decoder that horizontal line synchronization was
    /// detected at the current sample.
    pub fn on_line_sync(&mut self) {
        let offset = self.mode_spec.line_sync.duration_ms;
        self.switch_or_sync_to_decode_line(offset);
    }

    fn switch_or_sync_to_decode_line(&mut self, line_time_offset_ms: R) {
        if self.state == State::WaitForSyncEvent {
            self.state = State::DecodeLine;
            self.num_decoded_lines = 0;
        }
        self.line_start_offset_ms = line_time_offset_ms;
        self.num_line_samples = 0;
        self.pixels_decode_started = false;
    }

    fn reset(&mut self) {
        self.state = State::WaitForSyncEvent;
    }

    pub fn push(&mut self, frequency: R) -> Result {
        match self.state {
            State::WaitForSyncEvent => result::empty_result(),
            State::DecodeLine => self.handle_decode_line(frequency),
        }
    }

    fn handle_decode_line(&mut self, frequency: R) -> Result {
        let mut out = result::empty_result()?;

        self.num_line_samples += 1;
        let current_line_time_ms = self.line_start_offset_ms
            + self.time_ms_per_sample * R::from_usize(self.num_line_samples);

        self.pixel_freq_average = self.pixel_freq_average
            + self.pixel_sample_average_weight * (frequency - self.pixel_freq_average);

        if self.pixels_decode_started {
            if self.num_decoded_pixels_in_line < self.mode_spec.num_pixels_per_line
                && current_line_time_ms >= self.next_pixel_sample_time_ms
            {
                self.line_pixels_luma[self.num_decoded_pixels_in_line] =
                    frequency_to_luma(&self.mode_spec, self.pixel_freq_average);
                self.num_decoded_pixels_in_line += 1;
                self.next_pixel_sample_time_ms = self.total_synchronization_time_ms
                    + R::from_usize(self.num_decoded_pixels_in_line + 1)
                        * self.mode_spec.pixel_duration_ms;
            }
        } else if current_line_time_ms >= self.total_synchronization_time_ms {
            self.pixels_decode_started = true;
            self.num_decoded_pixels_in_line = 0;
            // Sample at the pixel's trailing edge: by then the averaging
            // has had a full pixel period to settle.
            self.next_pixel_sample_time_ms =
                self.total_synchronization_time_ms + self.mode_spec.pixel_duration_ms;
            self.pixel_freq_average = frequency;
        }

        if current_line_time_ms > self.total_line_time_ms {
            if self.num_decoded_lines == 0 {
                let _ = out.try_push(DecodedVariant::ImagePixelsBegin(ImagePixelsBegin {
                    mode: self.mode_spec.mode,
                }));
            }

            let pixels_result = self.decode_pixel_luma();
            let pixels_result = match pixels_result {
                Ok(rows) => rows,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            out.extend(pixels_result);
            self.num_decoded_lines += 1;

            if self.num_decoded_lines == self.mode_spec.num_lines {
                let _ = out.try_push(DecodedVariant::ImagePixelsEnd(ImagePixelsEnd));
                self.reset();
                return Ok(out);
            }

            self.num_line_samples = 0;
            self.line_start_offset_ms = current_line_time_ms - self.total_line_time_ms;
            self.pixels_decode_started = false;
        }

        Ok(out)
    }

    fn decode_pixel_luma(
        &self,
    ) -> std::result::Result<crate::base::StaticVec<DecodedVariant, 4>, result::Error> {
        use crate::picture::sstv::line_encoding::LineEncoding;

        match self.mode_spec.line_encoding {
            LineEncoding::YccAverageCrCb => Ok(self.decode_ycbcr_average_cr_cb()),
        }
    }

    fn decode_ycbcr_average_cr_cb(&self) -> crate::base::StaticVec<DecodedVariant, 4> {
        let width = self.mode_spec.image_width;
        let mut out = crate::base::StaticVec::new();

        let mut row1 = Vec::with_capacity(width);
        for x in 0..width {
            let y = self.line_pixels_luma[x];
            let cr_avg = self.line_pixels_luma[x + width * 2];
            let cb_avg = self.line_pixels_luma[x + width];
            let (r, g, b) = ycbcr_to_rgb(y, cb_avg, cr_avg);
            row1.push(to_color3_u8(r, g, b));
        }
        let _ = out.try_push(DecodedVariant::ImagePixelsRow(ImagePixelsRow {
            pixels: row1,
        }));

        let mut row2 = Vec::with_capacity(width);
        for x in 0..width {
            let y = self.line_pixels_luma[x + width * 3];
            let cr_avg = self.line_pixels_luma[x + width * 2];
            let cb_avg = self.line_pixels_luma[x + width];
            let (r, g, b) = ycbcr_to_rgb(y, cb_avg, cr_avg);
            row2.push(to_color3_u8(r, g, b));
        }
        let _ = out.try_push(DecodedVariant::ImagePixelsRow(ImagePixelsRow {
            pixels: row2,
        }));

        out
    }
}

fn to_color3_u8<R: Real>(r: R, g: R, b: R) -> Color3<u8> {
    let to_u8 = |v: R| (v.to_f64() * 255.0).round().clamp(0.0, 255.0) as u8;
    Color3::new(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_picture_of_constant_mid_gray_frequency() {
        let sample_rate = 8000.0_f64;
        let mut decoder = LineDecoder::new(sample_rate, Mode::Pd290);
        decoder.on_line_sync();

        let mid_frequency = 1900.0; // halfway between black (1500) and white (2300).
        let mut saw_begin = false;
        let mut saw_end = false;
        let mut num_rows = 0;

        // Run well past one full picture's worth of samples.
        let mode_spec = ModeSpec::<f64>::get(Mode::Pd290).unwrap();
        let total_line_samples =
            ((mode_spec.line_sync.duration_ms + mode_spec.line_porch.duration_ms
                + mode_spec.line_pixels_duration_ms)
                / 1000.0
                * sample_rate) as usize;
        let total_samples = total_line_samples * (mode_spec.num_lines + 2);

        for i in 0..total_samples {
            if i > 0 && i % (total_line_samples * 40) == 0 {
                decoder.on_line_sync();
            }
            let result = decoder.push(mid_frequency).unwrap();
            for v in result {
                match v {
                    DecodedVariant::ImagePixelsBegin(_) => saw_begin = true,
                    DecodedVariant::ImagePixelsEnd(_) => saw_end = true,
                    DecodedVariant::ImagePixelsRow(_) => num_rows += 1,
                    _ => {}
                }
            }
        }

        assert!(saw_begin);
        assert!(saw_end);
        assert_eq!(num_rows, mode_spec.num_lines * 2);
    }
}
