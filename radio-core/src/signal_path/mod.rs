//! The composed radio signal path: frequency shift, decimate, receive
//! filter, demodulate, decimate again, AGC, and a soft-start ramp before the
//! audio output.

pub mod decimation_schedule;
pub mod lock;

pub use decimation_schedule::decimation_schedule;
pub use lock::{SignalPathLock, StdMutexLock};

use crate::config::{DemodulatorKind, SignalPathConfig};
use crate::demod::{AmDemodulator, CwDemodulator, FmDemodulator, Sideband, SsbDemodulator};
use crate::errors::Result;
use crate::signal::agc::Agc;
use crate::signal::decimator::Decimator;
use crate::signal::frequency_shifter::FrequencyShifter;
use crate::signal::receive_filter::ReceiveFilter;
use num_complex::Complex;

enum Demodulator {
    Am(AmDemodulator<f64>),
    Nfm(FmDemodulator<f64>),
    Wfm(FmDemodulator<f64>),
    Cw(CwDemodulator<f64>),
    Usb(SsbDemodulator<f64>),
    Lsb(SsbDemodulator<f64>),
}

impl Demodulator {
    fn new(kind: DemodulatorKind, config: &SignalPathConfig, if_rate_hz: f64) -> Self {
        match kind {
            DemodulatorKind::Am => Demodulator::Am(AmDemodulator::new(0.001)),
            DemodulatorKind::Nfm => {
                Demodulator::Nfm(FmDemodulator::new(if_rate_hz, config.fm_deviation_hz))
            }
            DemodulatorKind::Wfm => {
                Demodulator::Wfm(FmDemodulator::new(if_rate_hz, config.fm_deviation_hz))
            }
            DemodulatorKind::Cw => Demodulator::Cw(CwDemodulator::new(config.cw_tone_hz, if_rate_hz)),
            DemodulatorKind::Usb => Demodulator::Usb(SsbDemodulator::new(121, Sideband::Usb)),
            DemodulatorKind::Lsb => Demodulator::Lsb(SsbDemodulator::new(121, Sideband::Lsb)),
        }
    }

    fn bandwidth_offset(&self, bandwidth_hz: f64) -> f64 {
        match self {
            Demodulator::Usb(_) => bandwidth_hz / 2.0,
            Demodulator::Lsb(_) => -bandwidth_hz / 2.0,
            _ => 0.0,
        }
    }

    fn push(&mut self, c: Complex<f64>) -> f64 {
        match self {
            Demodulator::Am(d) => d.push(c),
            Demodulator::Nfm(d) => d.push(c),
            Demodulator::Wfm(d) => d.push(c),
            Demodulator::Cw(d) => d.push(c),
            Demodulator::Usb(d) => d.push(c),
            Demodulator::Lsb(d) => d.push(c),
        }
    }
}

type Sink<T> = Box<dyn FnMut(T) + Send>;

/// The composed signal path. Owns its own IF-stage and AF-stage pipelines
/// and can notify IF/AF tap sinks as samples flow through.
pub struct SignalPath<L: SignalPathLock> {
    config: SignalPathConfig,
    lock: L,

    shift_in: FrequencyShifter<f64>,
    decimate_r1_i: Decimator<f64>,
    decimate_r1_q: Decimator<f64>,
    r1: usize,
    receive_filter_i: ReceiveFilter<f64>,
    receive_filter_q: ReceiveFilter<f64>,
    shift_out: FrequencyShifter<f64>,
    demodulator: Demodulator,
    decimate_r2: Decimator<f64>,
    agc: Agc<f64>,

    if_taps: Vec<Sink<Complex<f64>>>,
    af_taps: Vec<Sink<f64>>,

    soft_start_gain: f64,
    soft_start_step: f64,
}

impl<L: SignalPathLock> SignalPath<L> {
    pub fn new(config: SignalPathConfig, lock: L) -> Result<Self> {
        let (r1, r2) = decimation_schedule(
            config.sample_rate_in_hz,
            config.sample_rate_af_hz,
            config.bandwidth_hz,
        )?;

        let if_rate_hz = config.sample_rate_in_hz / r1 as f64;
        let demodulator = Demodulator::new(config.demodulator, &config, if_rate_hz);
        let bandwidth_offset = demodulator.bandwidth_offset(config.bandwidth_hz);

        let soft_start_step = if config.soft_startup_time_ms > 0.0 {
            1.0 / (config.soft_startup_time_ms * 0.001 * config.sample_rate_af_hz)
        } else {
            1.0
        };

        Ok(Self {
            shift_in: FrequencyShifter::new(
                config.frequency_offset_hz + bandwidth_offset,
                config.sample_rate_in_hz,
            ),
            decimate_r1_i: Decimator::new(r1),
            decimate_r1_q: Decimator::new(r1),
            r1,
            receive_filter_i: ReceiveFilter::new(
                if_rate_hz,
                config.bandwidth_hz,
                config.transition_band_hz,
            ),
            receive_filter_q: ReceiveFilter::new(
                if_rate_hz,
                config.bandwidth_hz,
                config.transition_band_hz,
            ),
            shift_out: FrequencyShifter::new(-bandwidth_offset, if_rate_hz),
            demodulator,
            decimate_r2: Decimator::new(r2),
            agc: Agc::new(0.1, 0.001),
            if_taps: Vec::new(),
            af_taps: Vec::new(),
            soft_start_gain: 0.0,
            soft_start_step,
            config,
            lock,
        })
    }

    pub fn add_if_tap(&mut self, sink: Sink<Complex<f64>>) {
        self.lock.with_lock(|| self.if_taps.push(sink));
    }

    pub fn add_af_tap(&mut self, sink: Sink<f64>) {
        self.lock.with_lock(|| self.af_taps.push(sink));
    }

    pub fn clear_taps(&mut self) {
        self.lock.with_lock(|| {
            self.if_taps.clear();
            self.af_taps.clear();
        });
    }

    /// Switches to a new demodulator, resetting AGC and re-arming the
    /// soft-start ramp over `soft_configure_time_ms`.
    pub fn set_demodulator(&mut self, kind: DemodulatorKind) {
        self.lock.with_lock(|| {
            let if_rate_hz = self.config.sample_rate_in_hz / self.r1.max(1) as f64;
            self.demodulator = Demodulator::new(kind, &self.config, if_rate_hz);
            self.config.demodulator = kind;
            self.agc.reset();
            self.soft_start_gain = 0.0;
            self.soft_start_step = if self.config.soft_configure_time_ms > 0.0 {
                1.0 / (self.config.soft_configure_time_ms * 0.001 * self.config.sample_rate_af_hz)
            } else {
                1.0
            };
        });
    }

    /// Feeds one IQ input sample through the whole path, invoking any
    /// registered IF/AF taps along the way.
    pub fn push(&mut self, iq: Complex<f64>) {
        self.lock.with_lock(|| {
            let shifted = self.shift_in.push(iq);

            // I and Q rails each get their own decimator and receive-filter
            // instance: both carry internal FIR/decimator phase state that
            // would desync if one instance alternated between rails.
            let decimated_re = self.decimate_r1_i.push(shifted.re);
            let decimated_im = self.decimate_r1_q.push(shifted.im);
            let (Some(decimated_re), Some(decimated_im)) = (decimated_re, decimated_im) else {
                return;
            };

            let mut filtered_buf = Vec::with_capacity(1);
            self.receive_filter_i.push(decimated_re, &mut filtered_buf);
            let mut filtered_im = Vec::with_capacity(1);
            self.receive_filter_q.push(decimated_im, &mut filtered_im);

            for (&re, &im) in filtered_buf.iter().zip(filtered_im.iter()) {
                let filtered = Complex::new(re, im);
                let if_sample = self.shift_out.push(filtered);

                for tap in self.if_taps.iter_mut() {
                    tap(if_sample);
                }

                let demodulated = self.demodulator.push(if_sample);
                if let Some(af) = self.decimate_r2.push(demodulated) {
                    let agc_out = self.agc.push(af);
                    self.soft_start_gain = (self.soft_start_gain + self.soft_start_step).min(1.0);
                    let af_out = agc_out * self.soft_start_gain;
                    for tap in self.af_taps.iter_mut() {
                        tap(af_out);
                    }
                }
            }
        });
    }

    pub fn config(&self) -> &SignalPathConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_respects_decimation_schedule() {
        let config = SignalPathConfig::default();
        let path = SignalPath::new(config, StdMutexLock::new());
        assert!(path.is_ok());
    }

    #[test]
    fn rejects_non_divisible_rates() {
        let mut config = SignalPathConfig::default();
        config.sample_rate_in_hz = 240_001.0;
        let path = SignalPath::new(config, StdMutexLock::new());
        assert!(path.is_err());
    }

    #[test]
    fn soft_start_ramps_from_zero() {
        let mut config = SignalPathConfig::default();
        config.soft_startup_time_ms = 10.0;
        let mut path = SignalPath::new(config, StdMutexLock::new()).unwrap();
        assert_eq!(path.soft_start_gain, 0.0);
        for _ in 0..10_000 {
            path.push(Complex::new(0.1, 0.0));
        }
        assert!(path.soft_start_gain > 0.0);
    }
}
