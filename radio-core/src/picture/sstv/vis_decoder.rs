//! Decoder of the Vertical Interval Signaling (VIS) header.
//!
//! Pattern-matches frequency samples against the VIS tone intervals with
//! tolerance in both frequency and timing, internally low-pass prefiltered
//! to help lock onto a noisy signal. Once the second leader tone's falling
//! edge is found, a [`DigitalPll`] tracks the 33.3 baud bit clock (tricked
//! into integer-friendly arithmetic by treating the sample rate and baud as
//! 3x their real value) to sample the 10 bits of the digital code.

use crate::base::{FrequencyDuration, Interval};
use crate::math::Real;
use crate::picture::sstv::vis;
use crate::signal::digital_pll::DigitalPll;
use crate::signal::edge_detector::{Edge, EdgeDetector};
use crate::signal::filter_design::{
    design_low_pass_filter, estimate_filter_size_for_transition_bandwidth,
};
use crate::signal::fir_filter::FirFilter;
use crate::signal::window::Window;

#[derive(Debug, Clone, Copy)]
pub struct VisDecoderOptions<R> {
    pub sample_rate_hz: R,
    pub prefilter_transition_bandwidth_hz: R,
    pub prefilter_frequency_cutoff_hz: R,
    pub frequency_tolerance_hz: R,
    pub transition_ms: R,
    pub pll_inertia: f64,
    pub edge_sample_weight: R,
    pub edge_sample_slow_weight: R,
    pub edge_threshold: R,
}

impl<R: Real> VisDecoderOptions<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            prefilter_transition_bandwidth_hz: R::from_f64(280.0),
            prefilter_frequency_cutoff_hz: R::from_f64(300.0),
            frequency_tolerance_hz: R::from_f64(50.0),
            transition_ms: R::from_f64(4.0),
            pll_inertia: 0.75,
            edge_sample_weight: R::from_f64(0.25),
            edge_sample_slow_weight: R::from_f64(0.025),
            edge_threshold: R::from_f64(180.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    WaitLeaderAfterReset,
    WaitLeaderAfterBreak,
    SampleLeader,
    WaitBreak,
    SampleBreak,
    WaitLeaderEdge,
    SampleCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitValue {
    Unknown,
    Zero,
    One,
    StartStop,
}

fn tone_interval<R: Real>(frequency_hz: R, tolerance_hz: R) -> Interval<R> {
    Interval::new(frequency_hz - tolerance_hz, frequency_hz + tolerance_hz)
}

fn ms_to_num_samples<R: Real>(sample_rate_hz: R, ms: R) -> usize {
    (sample_rate_hz * ms / R::from_f64(1000.0))
        .to_f64()
        .round()
        .max(0.0) as usize
}

pub struct VisDecoder<R: Real> {
    state: State,
    num_samples_in_state: usize,
    num_decoded_leader_tones: u32,

    averaged_frequency: R,
    num_decoded_code_bits: u32,
    decoded_code: u8,
    num_ones_in_decoded_code: u32,
    code_skip_next_bit: bool,

    leader_tone_interval: Interval<R>,
    break_tone_interval: Interval<R>,
    start_bit_interval: Interval<R>,
    bit_zero_interval: Interval<R>,
    bit_one_interval: Interval<R>,
    stop_bit_interval: Interval<R>,

    num_expected_leader_tone_samples: usize,
    num_expected_break_tone_samples: usize,
    num_transition_samples: usize,

    code_sample_weight: R,

    prefilter: FirFilter<'static, R>,
    edge_detector: EdgeDetector<R>,
    detected_edge: Edge,

    pll: DigitalPll,
    delay_ms: R,
}

impl<R: Real> VisDecoder<R> {
    pub fn new(options: VisDecoderOptions<R>) -> Self {
        let prefilter_num_taps = estimate_filter_size_for_transition_bandwidth::<R>(
            options.prefilter_transition_bandwidth_hz,
            options.sample_rate_hz,
        ) | 1;
        let mut h = vec![R::zero(); prefilter_num_taps.max(3)];
        design_low_pass_filter(
            &mut h,
            Window::Hamming,
            options.prefilter_frequency_cutoff_hz,
            options.sample_rate_hz,
        );
        let delay_samples = (h.len() - 1) / 2;
        let delay_ms =
            R::from_f64(1000.0) * R::from_usize(delay_samples) / options.sample_rate_hz;

        let tol = options.frequency_tolerance_hz;
        let leader: FrequencyDuration<R> = vis::leader_tone();
        let brk: FrequencyDuration<R> = vis::break_tone();
        let start_bit: FrequencyDuration<R> = vis::start_bit();
        let bit_zero: FrequencyDuration<R> = vis::bit_value_zero();
        let bit_one: FrequencyDuration<R> = vis::bit_value_one();
        let stop_bit: FrequencyDuration<R> = vis::stop_bit();

        let num_expected_leader_tone_samples = ms_to_num_samples(
            options.sample_rate_hz,
            leader.duration_ms - options.transition_ms,
        );
        let num_expected_break_tone_samples = ms_to_num_samples(
            options.sample_rate_hz,
            brk.duration_ms - options.transition_ms,
        );
        let num_transition_samples = ms_to_num_samples(
            options.sample_rate_hz,
            options.transition_ms * R::from_f64(2.0),
        );

        let bit_duration_in_samples =
            R::from_f64(vis::BIT_DURATION_MS) / R::from_f64(1000.0) * options.sample_rate_hz;
        let code_sample_weight = R::from_f64(100.0) / bit_duration_in_samples;

        Self {
            state: State::WaitLeaderAfterReset,
            num_samples_in_state: 0,
            num_decoded_leader_tones: 0,
            averaged_frequency: R::zero(),
            num_decoded_code_bits: 0,
            decoded_code: 0,
            num_ones_in_decoded_code: 0,
            code_skip_next_bit: false,
            leader_tone_interval: tone_interval(leader.frequency_hz, tol),
            break_tone_interval: tone_interval(brk.frequency_hz, tol),
            start_bit_interval: tone_interval(start_bit.frequency_hz, tol),
            bit_zero_interval: tone_interval(bit_zero.frequency_hz, tol),
            bit_one_interval: tone_interval(bit_one.frequency_hz, tol),
            stop_bit_interval: tone_interval(stop_bit.frequency_hz, tol),
            num_expected_leader_tone_samples,
            num_expected_break_tone_samples,
            num_transition_samples,
            code_sample_weight,
            prefilter: FirFilter::owned(h),
            edge_detector: EdgeDetector::new(
                options.edge_sample_weight,
                options.edge_sample_slow_weight,
                R::from_f64(1.0e9),
                options.edge_threshold,
            ),
            detected_edge: Edge::None,
            pll: DigitalPll::new(
                100.0,
                options.sample_rate_hz.to_f64() * 3.0,
                options.pll_inertia,
            ),
            delay_ms,
        }
    }

    /// Delay of this decoder, in milliseconds, between the sample that
    /// completed the code and the moment it is reported -- used by the
    /// caller to retroactively place the picture's vertical sync.
    pub fn delay_ms(&self) -> R {
        self.delay_ms
    }

    fn reset(&mut self) {
        self.state = State::WaitLeaderAfterReset;
        self.num_decoded_leader_tones = 0;
    }

    pub fn push(&mut self, sample: R) -> Option<u8> {
        let frequency = self.prefilter.push(sample);
        self.detected_edge = self.edge_detector.push(frequency);

        match self.state {
            State::WaitLeaderAfterReset => self.handle_wait_leader_after_reset(frequency),
            State::WaitLeaderAfterBreak => self.handle_wait_leader_after_break(frequency),
            State::SampleLeader => self.handle_sample_leader(frequency),
            State::WaitBreak => self.handle_wait_break(frequency),
            State::SampleBreak => self.handle_sample_break(frequency),
            State::WaitLeaderEdge => self.handle_wait_leader_edge(),
            State::SampleCode => self.handle_sample_code(frequency),
        }
    }

    fn handle_wait_leader_after_reset(&mut self, frequency: R) -> Option<u8> {
        if !self.leader_tone_interval.contains(frequency) {
            self.reset();
            return None;
        }
        self.switch_to_sample_leader();
        None
    }

    fn switch_to_wait_leader_after_break(&mut self) {
        self.state = State::WaitLeaderAfterBreak;
        self.num_samples_in_state = 0;
    }

    fn handle_wait_leader_after_break(&mut self, frequency: R) -> Option<u8> {
        if self.leader_tone_interval.contains(frequency) {
            self.switch_to_sample_leader();
            return None;
        }
        self.num_samples_in_state += 1;
        if self.num_samples_in_state > self.num_transition_samples {
            self.reset();
        }
        None
    }

    fn switch_to_sample_leader(&mut self) {
        self.state = State::SampleLeader;
        self.num_samples_in_state = 0;
    }

    fn handle_sample_leader(&mut self, frequency: R) -> Option<u8> {
        if !self.leader_tone_interval.contains(frequency) {
            self.reset();
            return None;
        }
        self.num_samples_in_state += 1;
        if self.num_samples_in_state < self.num_expected_leader_tone_samples {
            return None;
        }
        self.num_decoded_leader_tones += 1;
        match self.num_decoded_leader_tones {
            1 => self.switch_to_wait_break(),
            2 => self.switch_to_wait_leader_edge(),
            _ => {}
        }
        None
    }

    fn switch_to_wait_break(&mut self) {
        self.state = State::WaitBreak;
        self.num_samples_in_state = 0;
    }

    fn handle_wait_break(&mut self, frequency: R) -> Option<u8> {
        if self.break_tone_interval.contains(frequency) {
            self.switch_to_sample_break();
            return None;
        }
        self.num_samples_in_state += 1;
        if self.num_samples_in_state > self.num_transition_samples {
            self.reset();
        }
        None
    }

    fn switch_to_sample_break(&mut self) {
        self.state = State::SampleBreak;
        self.num_samples_in_state = 0;
    }

    fn handle_sample_break(&mut self, frequency: R) -> Option<u8> {
        if !self.break_tone_interval.contains(frequency) {
            self.reset();
            return None;
        }
        self.num_samples_in_state += 1;
        if self.num_samples_in_state < self.num_expected_break_tone_samples {
            return None;
        }
        self.switch_to_wait_leader_after_break();
        None
    }

    fn switch_to_wait_leader_edge(&mut self) {
        self.state = State::WaitLeaderEdge;
        self.num_samples_in_state = 0;
    }

    fn handle_wait_leader_edge(&mut self) -> Option<u8> {
        if self.detected_edge == Edge::Falling {
            self.switch_to_sample_code();
            return None;
        }
        self.num_samples_in_state += 1;
        if self.num_samples_in_state > self.num_transition_samples {
            self.reset();
        }
        None
    }

    fn switch_to_sample_code(&mut self) {
        self.state = State::SampleCode;
        self.num_samples_in_state = 0;
        self.code_skip_next_bit = false;
        self.num_decoded_code_bits = 0;
        self.decoded_code = 0;
        self.num_ones_in_decoded_code = 0;
        self.averaged_frequency = vis::start_bit::<R>().frequency_hz;
        self.pll.reset();
    }

    fn handle_sample_code(&mut self, frequency: R) -> Option<u8> {
        self.averaged_frequency = self.averaged_frequency
            + self.code_sample_weight * (frequency - self.averaged_frequency);

        if !self.pll.push(false) {
            return None;
        }

        if self.code_skip_next_bit {
            let code = self.decoded_code;
            self.reset();
            return Some(code);
        }

        let bit_value = if self.bit_zero_interval.contains(self.averaged_frequency) {
            BitValue::Zero
        } else if self.bit_one_interval.contains(self.averaged_frequency) {
            BitValue::One
        } else if self.start_bit_interval.contains(self.averaged_frequency)
            || self.stop_bit_interval.contains(self.averaged_frequency)
        {
            BitValue::StartStop
        } else {
            BitValue::Unknown
        };

        self.num_decoded_code_bits += 1;

        if self.num_decoded_code_bits == 1 {
            // Start bit: verify and move on, it is not part of the code.
            if bit_value != BitValue::StartStop {
                self.reset();
            }
            return None;
        }

        // 10 = 1 start bit, 7 code bits, 1 parity bit, 1 stop bit.
        if self.num_decoded_code_bits == 10 {
            if bit_value != BitValue::StartStop {
                self.reset();
                return None;
            }
            self.code_skip_next_bit = true;
            self.pll.reset();
            return None;
        }

        if bit_value != BitValue::Zero && bit_value != BitValue::One {
            return None;
        }

        let int_bit_value: u32 = if bit_value == BitValue::One { 1 } else { 0 };

        // 9 = 1 start bit, 7 code bits, parity bit. Even parity: the
        // transmitted parity bit must match the running ones count's LSB.
        if self.num_decoded_code_bits == 9 {
            if (self.num_ones_in_decoded_code & 1) != int_bit_value {
                self.reset();
            }
            return None;
        }

        self.decoded_code |= (int_bit_value as u8) << (self.num_decoded_code_bits - 2);
        self.num_ones_in_decoded_code += int_bit_value;

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_tone(decoder: &mut VisDecoder<f64>, tone: FrequencyDuration<f64>, sample_rate: f64) {
        let num_samples = (tone.duration_ms / 1000.0 * sample_rate).round() as usize;
        for _ in 0..num_samples {
            decoder.push(tone.frequency_hz);
        }
    }

    #[test]
    fn decodes_a_clean_pd290_vis_code() {
        let sample_rate = 8000.0_f64;
        let mut decoder = VisDecoder::new(VisDecoderOptions::new(sample_rate));

        for tone in vis::leader_sequence::<f64>() {
            push_tone(&mut decoder, tone, sample_rate);
        }
        push_tone(&mut decoder, vis::start_bit(), sample_rate);

        let code = 0x5e_u8; // PD290.
        let mut num_ones = 0;
        for i in 0..7 {
            let bit_tone = if code & (1 << i) != 0 {
                num_ones += 1;
                vis::bit_value_one()
            } else {
                vis::bit_value_zero()
            };
            push_tone(&mut decoder, bit_tone, sample_rate);
        }
        let parity_tone = if num_ones % 2 == 1 {
            vis::bit_value_one()
        } else {
            vis::bit_value_zero()
        };
        push_tone(&mut decoder, parity_tone, sample_rate);
        push_tone(&mut decoder, vis::stop_bit(), sample_rate);

        let mut decoded = None;
        for _ in 0..200 {
            if let Some(c) = decoder.push(1200.0) {
                decoded = Some(c);
                break;
            }
        }
        assert_eq!(decoded, Some(code));
    }

    #[test]
    fn silence_never_decodes() {
        let mut decoder = VisDecoder::new(VisDecoderOptions::new(8000.0_f64));
        for _ in 0..5000 {
            assert_eq!(decoder.push(0.0), None);
        }
    }
}
