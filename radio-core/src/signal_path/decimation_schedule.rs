//! Decimation schedule: splits the input-to-audio rate ratio into an
//! IF-stage decimation `R1` and an AF-stage decimation `R2`.

use crate::errors::{ConfigError, RadioError};

/// Computes `(R1, R2)` such that `R1*R2 == fs_in/fs_af`, `fs_in/R1` is the
/// IF sample rate, and `fs_in/(R1*R2)` is the final audio rate.
///
/// 1. Requires `fs_in mod fs_af == 0`.
/// 2. If `bw < fs_af`, the audio rate alone covers the bandwidth: R1 =
///    fs_in/fs_af, R2 = 1.
/// 3. Otherwise scans `k` upward for the smallest audio-rate multiple that
///    covers the bandwidth and evenly divides `fs_in`.
/// 4. Falls through to R1=1 (no IF-stage decimation at all).
pub fn decimation_schedule(fs_in: f64, fs_af: f64, bw: f64) -> Result<(usize, usize), RadioError> {
    if fs_in <= 0.0 || fs_af <= 0.0 {
        return Err(ConfigError::InvalidSampleRate {
            rate: if fs_in <= 0.0 { fs_in } else { fs_af },
        }
        .into());
    }

    let ratio = fs_in / fs_af;
    if (ratio - ratio.round()).abs() > 1e-6 {
        return Err(ConfigError::SampleRateNotDivisible { fs_in, fs_af }.into());
    }
    let ratio = ratio.round() as usize;

    if bw < fs_af {
        return Ok((ratio, 1));
    }

    let mut k = 2usize;
    loop {
        let candidate_rate = k as f64 * fs_af;
        if candidate_rate >= bw {
            let divisor = candidate_rate;
            let r1 = fs_in / divisor;
            if (r1 - r1.round()).abs() < 1e-6 {
                return Ok((r1.round() as usize, k));
            }
        }
        k += 1;
        if k > ratio.max(2) * 4 {
            return Ok((1, ratio));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_bandwidth_uses_af_rate_only() {
        let (r1, r2) = decimation_schedule(240_000.0, 48_000.0, 12_500.0).unwrap();
        assert_eq!(r1, 5);
        assert_eq!(r2, 1);
    }

    #[test]
    fn wide_bandwidth_scans_for_a_multiple() {
        let (r1, r2) = decimation_schedule(240_000.0, 8_000.0, 15_000.0).unwrap();
        assert_eq!(r1 * r2 * 8_000, 240_000);
        assert!(r2 as f64 * 8_000.0 >= 15_000.0);
    }

    #[test]
    fn non_divisible_rates_are_rejected() {
        assert!(decimation_schedule(240_001.0, 48_000.0, 12_500.0).is_err());
    }
}
