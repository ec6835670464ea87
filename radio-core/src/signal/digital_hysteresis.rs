//! Digital hysteresis: a boolean decision from the analog hysteresis output.

use crate::math::Real;
use crate::signal::hysteresis::Hysteresis;

pub struct DigitalHysteresis<R: Real> {
    inner: Hysteresis<R>,
    level: R,
}

impl<R: Real> DigitalHysteresis<R> {
    pub fn new(level: R, width: R) -> Self {
        Self {
            inner: Hysteresis::new(level, width),
            level,
        }
    }

    pub fn push(&mut self, x: R) -> bool {
        self.inner.push(x) > self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_above_and_below_level() {
        let mut h: DigitalHysteresis<f64> = DigitalHysteresis::new(0.0, 0.2);
        assert!(!h.push(0.05));
        assert!(h.push(1.0));
        assert!(h.push(0.95));
    }
}
