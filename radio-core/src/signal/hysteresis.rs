//! Analog hysteresis: holds the last input whose magnitude left the window
//! `[level - width/2, level + width/2]`.

use crate::math::Real;

pub struct Hysteresis<R: Real> {
    level: R,
    width: R,
    held: R,
}

impl<R: Real> Hysteresis<R> {
    pub fn new(level: R, width: R) -> Self {
        Self {
            level,
            width,
            held: level,
        }
    }

    pub fn push(&mut self, x: R) -> R {
        let half = self.width / R::from_f64(2.0);
        let lower = self.level - half;
        let upper = self.level + half;
        if x < lower || x > upper {
            self.held = x;
        }
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_value_until_window_exit() {
        let mut h: Hysteresis<f64> = Hysteresis::new(0.0, 0.2);
        assert_eq!(h.push(0.05), 0.0);
        assert_eq!(h.push(1.0), 1.0);
        assert_eq!(h.push(0.95), 1.0);
    }
}
