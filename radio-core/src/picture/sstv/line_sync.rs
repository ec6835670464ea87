//! Horizontal line synchronization detector.
//!
//! Waits for the mode's line-sync tone, requires it to be sustained for
//! (almost) its full nominal duration, then watches for the edge out of
//! it: a **rising** edge (sync tone to the higher black-level tone) fires
//! the callback and re-arms for the next line. A **falling** edge seen
//! while waiting for that rising edge is a cancellation signal -- it means
//! a VIS data bit (which can share the sync tone's frequency) was mistaken
//! for line sync, so the wait is abandoned instead of firing spuriously.

use crate::base::Interval;
use crate::math::Real;
use crate::picture::sstv::mode::Mode;
use crate::picture::sstv::mode_spec::ModeSpec;
use crate::signal::edge_detector::{Edge, EdgeDetector};

const FREQUENCY_TOLERANCE_HZ: f64 = 50.0;
const TRANSITION_MS: f64 = 4.0;

const EDGE_SAMPLE_WEIGHT: f64 = 0.25;
const EDGE_SAMPLE_SLOW_WEIGHT: f64 = 0.025;
// Lower threshold for the falling (cancellation) edge than for the rising
// (trigger) edge, so a VIS start bit transitioning out of the sync
// frequency is caught reliably.
const RISING_THRESHOLD: f64 = 80.0;
const FALLING_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    WaitForTone,
    SampleTone,
    WaitForEdge,
}

pub struct LineSync<R: Real> {
    state: State,
    num_samples_in_state: usize,

    line_sync_interval: Interval<R>,
    num_expected_sync_samples: usize,

    edge_detector: EdgeDetector<R>,
    detected_edge: Edge,
}

impl<R: Real> LineSync<R> {
    pub fn new(sample_rate_hz: R, mode: Mode) -> Self {
        let mode_spec = ModeSpec::<R>::get(mode).unwrap_or_else(|| {
            ModeSpec::<R>::get(crate::picture::sstv::mode::Mode::Pd290)
                .expect("PD290 mode spec always resolves")
        });

        let tolerance = R::from_f64(FREQUENCY_TOLERANCE_HZ);
        let line_sync_interval = Interval::new(
            mode_spec.line_sync.frequency_hz - tolerance,
            mode_spec.line_sync.frequency_hz + tolerance,
        );

        let num_expected_sync_samples = ((mode_spec.line_sync.duration_ms
            - R::from_f64(TRANSITION_MS))
            * sample_rate_hz
            / R::from_f64(1000.0))
        .to_f64()
        .round()
        .max(0.0) as usize;

        Self {
            state: State::WaitForTone,
            num_samples_in_state: 0,
            line_sync_interval,
            num_expected_sync_samples,
            edge_detector: EdgeDetector::new(
                R::from_f64(EDGE_SAMPLE_WEIGHT),
                R::from_f64(EDGE_SAMPLE_SLOW_WEIGHT),
                R::from_f64(RISING_THRESHOLD),
                R::from_f64(FALLING_THRESHOLD),
            ),
            detected_edge: Edge::None,
        }
    }

    pub fn reset(&mut self) {
        self.state = State::WaitForTone;
    }

    /// Feeds one frequency sample. Returns `true` exactly on the sample
    /// where a new line begins.
    pub fn push(&mut self, frequency: R) -> bool {
        self.detected_edge = self.edge_detector.push(frequency);

        match self.state {
            State::WaitForTone => {
                if self.line_sync_interval.contains(frequency) {
                    self.state = State::SampleTone;
                    self.num_samples_in_state = 0;
                }
                false
            }
            State::SampleTone => {
                if !self.line_sync_interval.contains(frequency) {
                    self.reset();
                    return false;
                }
                if self.num_samples_in_state < self.num_expected_sync_samples {
                    self.num_samples_in_state += 1;
                    return false;
                }
                // No upper bound on sync length: a missed VIS can leave the
                // line sync tone running longer than nominal.
                self.state = State::WaitForEdge;
                false
            }
            State::WaitForEdge => {
                if self.detected_edge == Edge::Falling {
                    self.reset();
                    return false;
                }
                if self.detected_edge == Edge::Rising {
                    self.reset();
                    return true;
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_a_sustained_sync_tone_followed_by_black_level() {
        let sample_rate = 8000.0_f64;
        let mut sync = LineSync::new(sample_rate, Mode::Pd290);

        // 20ms of 1200Hz sync tone.
        let num_sync_samples = (0.020 * sample_rate) as usize;
        let mut fired = false;
        for _ in 0..num_sync_samples {
            fired |= sync.push(1200.0);
        }
        assert!(!fired);

        // Transition to black level (1500Hz): should fire once.
        let mut fires = 0;
        for _ in 0..200 {
            if sync.push(1500.0) {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn never_fires_on_silence() {
        let mut sync = LineSync::new(8000.0_f64, Mode::Pd290);
        for _ in 0..5000 {
            assert!(!sync.push(0.0));
        }
    }
}
