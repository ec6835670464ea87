//! Rising/falling edge detector over a dual exponential moving average.

use crate::math::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    None,
    Rising,
    Falling,
}

pub struct EdgeDetector<R: Real> {
    fast: R,
    slow: R,
    w_fast: R,
    w_slow: R,
    threshold_rising: R,
    threshold_falling: R,
    latched_high: bool,
}

impl<R: Real> EdgeDetector<R> {
    pub fn new(w_fast: R, w_slow: R, threshold_rising: R, threshold_falling: R) -> Self {
        Self {
            fast: R::zero(),
            slow: R::zero(),
            w_fast,
            w_slow,
            threshold_rising,
            threshold_falling,
            latched_high: false,
        }
    }

    pub fn push(&mut self, x: R) -> Edge {
        self.fast = self.fast + self.w_fast * (x - self.fast);
        self.slow = self.slow + self.w_slow * (x - self.slow);

        let diff = self.fast - self.slow;
        if !self.latched_high && diff > self.threshold_rising {
            self.latched_high = true;
            Edge::Rising
        } else if self.latched_high && -diff > self.threshold_falling {
            self.latched_high = false;
            Edge::Falling
        } else {
            Edge::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_rising_once_per_step_crossing() {
        let mut ed: EdgeDetector<f64> = EdgeDetector::new(0.5, 0.01, 0.1, 0.1);
        let mut edges = Vec::new();
        for _ in 0..50 {
            edges.push(ed.push(1.0));
        }
        assert_eq!(edges.iter().filter(|e| **e == Edge::Rising).count(), 1);
    }

    #[test]
    fn fires_falling_after_rising_on_return_to_zero() {
        let mut ed: EdgeDetector<f64> = EdgeDetector::new(0.5, 0.01, 0.1, 0.1);
        for _ in 0..50 {
            ed.push(1.0);
        }
        let mut saw_falling = false;
        for _ in 0..200 {
            if ed.push(0.0) == Edge::Falling {
                saw_falling = true;
            }
        }
        assert!(saw_falling);
    }
}
