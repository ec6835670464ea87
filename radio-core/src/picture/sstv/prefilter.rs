//! Amplitude-to-instantaneous-frequency front end shared by the VIS decoder
//! and the picture decoder.
//!
//! Pipeline: band-pass FIR around the tone range, analytical signal
//! (Hilbert transform via a Kaiser-windowed filter), instantaneous
//! frequency, then a low-pass FIR to smooth the ringing a hard frequency
//! transition leaves behind.

use crate::math::Real;
use crate::picture::sstv::mode_limits;
use crate::signal::analytical_signal::AnalyticalSignal;
use crate::signal::filter_design::{
    calculate_kaiser_beta, calculate_kaiser_size, design_band_pass_filter, design_low_pass_filter,
    estimate_filter_size_for_transition_bandwidth,
};
use crate::signal::fir_filter::FirFilter;
use crate::signal::instant_frequency::InstantFrequency;
use crate::signal::window::Window;
use num_complex::Complex;

#[derive(Debug, Clone, Copy)]
pub struct PrefilterOptions<R> {
    pub sample_rate_hz: R,
    pub frequency_extent_hz: R,
    pub transition_bandwidth_hz: R,
    pub hilbert_attenuation_db: R,
    pub frequency_filter_transition_bandwidth_hz: R,
    pub frequency_filter_cutoff_hz: R,
}

impl<R: Real> PrefilterOptions<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            frequency_extent_hz: R::from_f64(50.0),
            transition_bandwidth_hz: R::from_f64(412.0),
            hilbert_attenuation_db: R::from_f64(90.0),
            frequency_filter_transition_bandwidth_hz: R::from_f64(334.0),
            frequency_filter_cutoff_hz: R::from_f64(1200.0),
        }
    }
}

pub struct Prefilter<R: Real> {
    band_pass: FirFilter<'static, R>,
    analytical_signal: AnalyticalSignal<R>,
    instant_frequency: InstantFrequency<R>,
    smoothing: FirFilter<'static, R>,
}

impl<R: Real> Prefilter<R> {
    pub fn new(options: PrefilterOptions<R>) -> Self {
        let band_pass_num_taps = (estimate_filter_size_for_transition_bandwidth::<R>(
            options.transition_bandwidth_hz,
            options.sample_rate_hz,
        ) | 1)
            .max(3);
        let mut band_pass_h = vec![R::zero(); band_pass_num_taps];
        design_band_pass_filter(
            &mut band_pass_h,
            Window::Hamming,
            R::from_f64(mode_limits::FREQUENCY_INTERVAL_LOWER_HZ) - options.frequency_extent_hz,
            R::from_f64(mode_limits::FREQUENCY_INTERVAL_UPPER_HZ) + options.frequency_extent_hz,
            options.sample_rate_hz,
        );

        let hilbert_transition_frequency =
            R::from_f64(mode_limits::MAX_LUMA_FREQUENCY_HZ + 100.0);
        let beta = calculate_kaiser_beta(options.hilbert_attenuation_db);
        let dw = R::two_pi() * hilbert_transition_frequency / options.sample_rate_hz;
        let kaiser_size = (calculate_kaiser_size(options.hilbert_attenuation_db, dw) | 1).max(3);

        let smoothing_num_taps = (estimate_filter_size_for_transition_bandwidth::<R>(
            options.frequency_filter_transition_bandwidth_hz,
            options.sample_rate_hz,
        ) | 1)
            .max(3);
        let mut smoothing_h = vec![R::zero(); smoothing_num_taps];
        design_low_pass_filter(
            &mut smoothing_h,
            Window::Hamming,
            options.frequency_filter_cutoff_hz,
            options.sample_rate_hz,
        );

        Self {
            band_pass: FirFilter::owned(band_pass_h),
            analytical_signal: AnalyticalSignal::new(kaiser_size, Window::Kaiser { beta }),
            instant_frequency: InstantFrequency::new(options.sample_rate_hz),
            smoothing: FirFilter::owned(smoothing_h),
        }
    }

    /// Group delay of the prefilter chain, in milliseconds, used to offset
    /// the line decoder's clock to account for the time it takes a sample
    /// to travel through this pipeline.
    pub fn delay_ms(&self, sample_rate_hz: R) -> R {
        let band_pass_delay = R::from_usize((self.band_pass.len() - 1) / 2);
        let hilbert_delay = R::from_usize(self.analytical_signal.delay_samples());
        let smoothing_delay = R::from_usize((self.smoothing.len() - 1) / 2);
        let total_samples = band_pass_delay + hilbert_delay + smoothing_delay;
        R::from_f64(1000.0) * total_samples / sample_rate_hz
    }

    pub fn push(&mut self, sample: R) -> R {
        let band_passed = self.band_pass.push(sample);
        let analytical: Complex<R> = self.analytical_signal.push(band_passed);
        let frequency = self.instant_frequency.push(analytical);
        self.smoothing.push(frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_tone_settles_to_its_own_frequency() {
        let sample_rate = 8000.0_f64;
        let mut prefilter = Prefilter::new(PrefilterOptions::new(sample_rate));

        let tone_hz = 1500.0;
        let mut phase = 0.0;
        let step = std::f64::consts::TAU * tone_hz / sample_rate;
        let mut last = 0.0;
        for _ in 0..4000 {
            last = prefilter.push(phase.sin());
            phase += step;
        }
        assert!((last - tone_hz).abs() < 50.0, "last = {}", last);
    }
}
