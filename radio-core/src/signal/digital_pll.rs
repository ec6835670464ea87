//! Bresenham-style bit-clock recovery PLL.
//!
//! A signed 32-bit counter advances by `round(2^32 * baud/fs)` on every
//! push. `push` returns `true` exactly on the step where the counter wraps
//! to negative, marking the center of a recovered symbol. When the input
//! bit flips relative to the previous call, the counter is pulled toward
//! zero by the inertia factor `alpha`, nudging the next overflow toward the
//! bit transition.

pub struct DigitalPll {
    counter: i64,
    advance: i64,
    alpha: f64,
    previous_bit: Option<bool>,
}

const WRAP: i64 = 1i64 << 32;

impl DigitalPll {
    pub fn new(baud: f64, sample_rate_hz: f64, alpha: f64) -> Self {
        let advance = (WRAP as f64 * baud / sample_rate_hz).round() as i64;
        Self {
            counter: 0,
            advance,
            alpha,
            previous_bit: None,
        }
    }

    /// Re-arms the PLL at its initial phase, as if freshly constructed.
    /// Used when an external event (e.g. a decoded frame edge) gives a
    /// better timing reference than the counter's free-running phase.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.previous_bit = None;
    }

    /// Advances the PLL by one sample, given the current hard bit decision.
    /// Returns `true` iff the counter overflowed to negative this step.
    pub fn push(&mut self, bit: bool) -> bool {
        let before = self.counter;
        self.counter += self.advance;
        let overflowed = before >= 0 && self.counter < 0;

        if let Some(prev) = self.previous_bit {
            if prev != bit {
                self.counter = (self.counter as f64 * self.alpha) as i64;
            }
        }
        self.previous_bit = Some(bit);

        if self.counter >= WRAP / 2 || self.counter < -(WRAP / 2) {
            self.counter %= WRAP;
        }
        overflowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_symbol_period_on_steady_input() {
        let baud = 1200.0;
        let fs = 9600.0;
        let samples_per_symbol = fs / baud;
        let mut pll = DigitalPll::new(baud, fs, 0.5);
        let mut fires = 0;
        for _ in 0..(samples_per_symbol as usize * 100) {
            if pll.push(true) {
                fires += 1;
            }
        }
        // within a few symbols of the expected 100 fires over 100 periods
        assert!((fires as i64 - 100).abs() <= 2, "fires = {}", fires);
    }
}
