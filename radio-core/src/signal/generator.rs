//! Tone generator: emits real samples for a sequence of
//! `(frequency_hz, duration_ms)` segments with phase continuity across
//! segment boundaries.

use crate::base::FrequencyDuration;
use crate::math::Real;

pub struct Generator<R: Real> {
    sample_rate_hz: R,
    phase: R,
    frequency_hz: R,
    remaining_samples: i64,
    carry_ns: R,
}

impl<R: Real> Generator<R> {
    pub fn new(sample_rate_hz: R) -> Self {
        Self {
            sample_rate_hz,
            phase: R::zero(),
            frequency_hz: R::zero(),
            remaining_samples: 0,
            carry_ns: R::zero(),
        }
    }

    /// Queues a new segment. Any timing overshoot from a previous segment
    /// (duration not a whole number of sample periods) is already folded
    /// into `remaining_samples` via `carry_ns`.
    pub fn set_segment(&mut self, segment: FrequencyDuration<R>) {
        self.frequency_hz = segment.frequency_hz;
        let exact_samples = segment.num_samples(self.sample_rate_hz) + self.carry_ns;
        let whole = exact_samples.floor();
        self.carry_ns = exact_samples - whole;
        self.remaining_samples = whole.to_f64() as i64;
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining_samples > 0
    }

    /// Emits one sample of the current segment, or `None` if the segment is
    /// exhausted.
    pub fn next(&mut self) -> Option<R> {
        if self.remaining_samples <= 0 {
            return None;
        }
        let sample = self.phase.sin();
        let step = R::two_pi() * self.frequency_hz / self.sample_rate_hz;
        self.phase = self.phase + step;
        let two_pi = R::two_pi();
        while self.phase > two_pi {
            self.phase = self.phase - two_pi;
        }
        self.remaining_samples -= 1;
        Some(sample)
    }

    /// Continues the current frequency until the output crosses zero
    /// (search bounded to `fs/2` samples), emits a single 0 sample, and
    /// resets the phase anchor so the next segment starts cleanly.
    pub fn fade_to_zero(&mut self, output: &mut Vec<R>) {
        let bound = (self.sample_rate_hz.to_f64() / 2.0) as usize;
        let mut previous = self.phase.sin();
        for _ in 0..bound {
            let step = R::two_pi() * self.frequency_hz / self.sample_rate_hz;
            self.phase = self.phase + step;
            let sample = self.phase.sin();
            let crossed = (previous <= R::zero() && sample > R::zero())
                || (previous >= R::zero() && sample < R::zero());
            output.push(sample);
            if crossed {
                break;
            }
            previous = sample;
        }
        output.push(R::zero());
        self.phase = R::zero();
        self.carry_ns = R::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_requested_sample_count() {
        let mut gen: Generator<f64> = Generator::new(8000.0);
        gen.set_segment(FrequencyDuration::new(1000.0, 10.0));
        let mut count = 0;
        while gen.next().is_some() {
            count += 1;
        }
        assert_eq!(count, 80);
    }

    #[test]
    fn fade_to_zero_ends_in_a_zero_sample() {
        let mut gen: Generator<f64> = Generator::new(8000.0);
        gen.set_segment(FrequencyDuration::new(1000.0, 5.0));
        while gen.next().is_some() {}
        let mut out = Vec::new();
        gen.fade_to_zero(&mut out);
        assert_eq!(*out.last().unwrap(), 0.0);
    }

    #[test]
    fn carries_fractional_sample_overshoot_into_next_segment() {
        let mut gen: Generator<f64> = Generator::new(8000.0);
        // 1.0 ms at 8kHz = 8 samples exactly; 1.1ms = 8.8 samples.
        gen.set_segment(FrequencyDuration::new(1000.0, 1.1));
        assert_eq!(gen.remaining_samples, 8);
        let mut count = 0;
        while gen.next().is_some() {
            count += 1;
        }
        assert_eq!(count, 8);
        gen.set_segment(FrequencyDuration::new(1000.0, 1.1));
        // carried 0.8 + 8.8 = 9.6 -> 9 whole samples
        assert_eq!(gen.remaining_samples, 9);
    }
}
