//! APT decoding pipeline: an AM demodulator centered on the sub-carrier,
//! followed by pixel sampling and Sync A line detection.
//!
//! Per input audio sample: band-pass prefilter around the sub-carrier,
//! AGC, analytical signal, `|.|`, saturate to `[0, 1]`, scale to `u8`. One
//! pixel is emitted every `1/baud` seconds (`baud == 4160 Hz`, matching the
//! per-pixel bit rate of the transmission). Two ring buffers the length of
//! [`info::SYNC_A`] track the last decoded bits and raw pixels; when the bit
//! ring matches `SYNC_A`, the current line is resynchronized.

use crate::base::RingBuffer;
use crate::math::{magnitude, saturate, Real};
use crate::picture::apt::info;
use crate::picture::apt::result::{DecodedVariant, Line, LineSynchronization, Result};
use crate::signal::agc::Agc;
use crate::signal::analytical_signal::AnalyticalSignal;
use crate::signal::digital_hysteresis::DigitalHysteresis;
use crate::signal::filter_design::{
    calculate_kaiser_beta, calculate_kaiser_size, design_band_pass_filter,
    estimate_filter_size_for_transition_bandwidth,
};
use crate::signal::fir_filter::FirFilter;
use crate::signal::window::Window;

/// Configuration of the APT decoding pipeline. Mirrors the reference
/// decoder's `Options` struct field-for-field.
#[derive(Debug, Clone, Copy)]
pub struct AptDecoderOptions<R> {
    pub sample_rate_hz: R,
    pub prefilter_transition_bandwidth_hz: R,
    pub hilbert_attenuation_db: R,
    pub hilbert_transition_frequency_hz: R,
    pub agc_charge_num_lines: R,
    pub agc_discharge_num_lines: R,
    pub hysteresis_threshold: R,
    pub hysteresis_window: R,
}

impl<R: Real> AptDecoderOptions<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            prefilter_transition_bandwidth_hz: R::from_f64(70.0),
            hilbert_attenuation_db: R::from_f64(90.0),
            hilbert_transition_frequency_hz: R::from_f64(info::BAUD_RATE_HZ),
            agc_charge_num_lines: R::from_f64(0.0005),
            agc_discharge_num_lines: R::from_f64(64.0),
            hysteresis_threshold: R::from_f64(0.5),
            hysteresis_window: R::from_f64(0.1),
        }
    }
}

pub struct AptDecoder<R: Real> {
    time_per_sample_hz: R,
    time_per_pixel_hz: R,
    current_time_within_pixel: R,

    prefilter: FirFilter<'static, R>,
    agc: Agc<R>,
    analytical_signal: AnalyticalSignal<R>,
    hysteresis: DigitalHysteresis<R>,

    line_pixels: Vec<u8>,
    num_line_pixels: usize,

    sync_bit_buffer: RingBuffer<u8>,
    sync_pixel_buffer: RingBuffer<u8>,
}

impl<R: Real> AptDecoder<R> {
    pub fn new(options: AptDecoderOptions<R>) -> Self {
        let prefilter_num_taps =
            estimate_filter_size_for_transition_bandwidth::<R>(
                options.prefilter_transition_bandwidth_hz,
                options.sample_rate_hz,
            ) | 1;
        let mut prefilter_h = vec![R::zero(); prefilter_num_taps.max(3)];
        let baud = R::from_f64(info::BAUD_RATE_HZ);
        let sub_carrier = R::from_f64(info::SUB_CARRIER_FREQUENCY_HZ);
        design_band_pass_filter(
            &mut prefilter_h,
            Window::Hamming,
            sub_carrier - baud / R::from_f64(2.0),
            sub_carrier + baud / R::from_f64(2.0),
            options.sample_rate_hz,
        );

        let beta = calculate_kaiser_beta(options.hilbert_attenuation_db);
        let dw = R::two_pi() * options.hilbert_transition_frequency_hz / options.sample_rate_hz;
        let kaiser_size = calculate_kaiser_size(options.hilbert_attenuation_db, dw) | 1;

        let time_per_pixel_hz = R::one() / baud;
        let num_samples_per_line =
            (options.sample_rate_hz * time_per_pixel_hz * R::from_usize(info::NUM_PIXELS_PER_LINE))
                .to_f64();
        let agc_charge_rate = R::from_f64(2.0)
            / (R::from_f64(num_samples_per_line) * options.agc_charge_num_lines + R::one());
        let agc_discharge_rate = R::from_f64(2.0)
            / (R::from_f64(num_samples_per_line) * options.agc_discharge_num_lines + R::one());

        Self {
            time_per_sample_hz: R::one() / options.sample_rate_hz,
            time_per_pixel_hz,
            current_time_within_pixel: R::zero(),
            prefilter: FirFilter::owned(prefilter_h),
            agc: Agc::new(agc_charge_rate, agc_discharge_rate),
            analytical_signal: AnalyticalSignal::new(kaiser_size.max(3), Window::Kaiser { beta }),
            hysteresis: DigitalHysteresis::new(
                options.hysteresis_threshold,
                options.hysteresis_window,
            ),
            line_pixels: vec![0u8; info::NUM_PIXELS_PER_LINE],
            num_line_pixels: 0,
            sync_bit_buffer: RingBuffer::new(info::SYNC_A.len()),
            sync_pixel_buffer: RingBuffer::new(info::SYNC_A.len()),
        }
    }

    pub fn push(&mut self, audio_sample: R) -> Result {
        let mut out = crate::picture::apt::result::DecodedData::new();

        let prefiltered = self.prefilter.push(audio_sample);
        let agced = self.agc.push(prefiltered);
        let analytical = self.analytical_signal.push(agced);

        self.current_time_within_pixel = self.current_time_within_pixel + self.time_per_sample_hz;
        if self.current_time_within_pixel < self.time_per_pixel_hz {
            return Ok(out);
        }

        let amplitude = magnitude(analytical);
        let pixel_float = saturate(amplitude);
        let pixel_int = (pixel_float.to_f64() * 255.0) as u8;

        self.line_pixels[self.num_line_pixels] = pixel_int;
        self.num_line_pixels += 1;

        let bit = self.hysteresis.push(pixel_float);
        self.sync_bit_buffer.push_back(bit as u8);
        self.sync_pixel_buffer.push_back(pixel_int);

        if self.is_line_sync_detected() {
            self.resynchronize_current_line();
            let _ = out.try_push(DecodedVariant::LineSynchronization(LineSynchronization));
        }

        if self.num_line_pixels == info::NUM_PIXELS_PER_LINE {
            let _ = out.try_push(DecodedVariant::Line(Line {
                pixels: self.line_pixels.clone(),
            }));
            self.num_line_pixels = 0;
        }

        self.current_time_within_pixel = self.current_time_within_pixel - self.time_per_pixel_hz;

        Ok(out)
    }

    /// True when the latest `SYNC_A.len()` demodulated bits equal Sync A —
    /// it is what every line starts with.
    fn is_line_sync_detected(&self) -> bool {
        if self.sync_bit_buffer.len() < info::SYNC_A.len() {
            return false;
        }
        self.sync_bit_buffer
            .iter()
            .zip(info::SYNC_A.iter())
            .all(|(&bit, &expected)| (bit != 0) == expected)
    }

    /// Shuffles pixels of the currently decoding line so it starts with the
    /// synchronization sequence.
    fn resynchronize_current_line(&mut self) {
        let num_sync_pixels = info::SYNC_A.len();
        for (i, &pixel) in self.sync_pixel_buffer.iter().enumerate() {
            self.line_pixels[i] = pixel;
        }
        self.num_line_pixels = num_sync_pixels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_default_options() {
        let options = AptDecoderOptions::<f64>::new(11_025.0);
        let _decoder = AptDecoder::new(options);
    }

    #[test]
    fn emits_no_variants_for_silence() {
        let mut decoder = AptDecoder::new(AptDecoderOptions::<f64>::new(11_025.0));
        let mut saw_any = false;
        for _ in 0..2000 {
            let result = decoder.push(0.0).unwrap();
            saw_any |= !result.is_empty();
        }
        assert!(!saw_any);
    }

    #[test]
    fn pixel_timing_eventually_emits_a_full_line() {
        let sample_rate = 11_025.0_f64;
        let mut decoder = AptDecoder::new(AptDecoderOptions::<f64>::new(sample_rate));

        let carrier = 2400.0_f64;
        let mut phase = 0.0_f64;
        let step = std::f64::consts::TAU * carrier / sample_rate;

        let samples_per_line =
            (sample_rate / info::BAUD_RATE_HZ * info::NUM_PIXELS_PER_LINE as f64) as usize;

        let mut saw_line = false;
        for _ in 0..(samples_per_line * 3) {
            phase += step;
            let sample = phase.sin();
            let result = decoder.push(sample).unwrap();
            for variant in result.iter() {
                if matches!(variant, DecodedVariant::Line(_)) {
                    saw_line = true;
                }
            }
        }
        assert!(saw_line);
    }
}
