//! Runs a stereo (I/Q) WAV file through the composed radio signal path and
//! writes the demodulated audio to a mono WAV file.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use num_complex::Complex;
use radio_core::config::{DemodulatorKind, SignalPathConfig};
use radio_core::signal_path::{SignalPath, StdMutexLock};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Parser)]
#[command(about = "Run an I/Q WAV file through the radio signal path")]
struct Args {
    /// Input stereo WAV file (left = I, right = Q).
    input: std::path::PathBuf,
    /// Output mono WAV file (demodulated audio).
    output: std::path::PathBuf,
    /// Demodulator to use.
    #[arg(long, value_enum, default_value = "nfm")]
    demodulator: CliDemodulator,
    /// Output audio sample rate, in Hz.
    #[arg(long, default_value_t = 48_000.0)]
    sample_rate_af_hz: f64,
    /// Receive filter bandwidth, in Hz.
    #[arg(long, default_value_t = 12_500.0)]
    bandwidth_hz: f64,
    /// Receive filter transition band, in Hz.
    #[arg(long, default_value_t = 2_000.0)]
    transition_band_hz: f64,
    /// Frequency offset of the tuned signal from DC, in Hz.
    #[arg(long, default_value_t = 0.0)]
    frequency_offset_hz: f64,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliDemodulator {
    Am,
    Nfm,
    Wfm,
    Usb,
    Lsb,
    Cw,
}

impl From<CliDemodulator> for DemodulatorKind {
    fn from(d: CliDemodulator) -> DemodulatorKind {
        match d {
            CliDemodulator::Am => DemodulatorKind::Am,
            CliDemodulator::Nfm => DemodulatorKind::Nfm,
            CliDemodulator::Wfm => DemodulatorKind::Wfm,
            CliDemodulator::Usb => DemodulatorKind::Usb,
            CliDemodulator::Lsb => DemodulatorKind::Lsb,
            CliDemodulator::Cw => DemodulatorKind::Cw,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut reader = hound::WavReader::open(&args.input)?;
    let spec = reader.spec();
    if spec.channels != 2 {
        return Err(eyre!("expected a stereo (I/Q) WAV file, got {} channel(s)", spec.channels));
    }

    let iq_samples = read_iq_samples(&mut reader)?;

    let config = SignalPathConfig {
        sample_rate_in_hz: spec.sample_rate as f64,
        sample_rate_af_hz: args.sample_rate_af_hz,
        demodulator: args.demodulator.into(),
        bandwidth_hz: args.bandwidth_hz,
        transition_band_hz: args.transition_band_hz,
        frequency_offset_hz: args.frequency_offset_hz,
        ..SignalPathConfig::default()
    };

    let mut path = SignalPath::new(config, StdMutexLock::new())?;

    let af_samples = Rc::new(RefCell::new(Vec::new()));
    let af_samples_sink = af_samples.clone();
    path.add_af_tap(Box::new(move |sample| af_samples_sink.borrow_mut().push(sample)));

    for iq in iq_samples {
        path.push(iq);
    }

    let af_samples = af_samples.borrow();
    write_wav_mono(&args.output, args.sample_rate_af_hz as u32, &af_samples)?;
    eprintln!(
        "wrote {} samples ({:.1}s) to {}",
        af_samples.len(),
        af_samples.len() as f64 / args.sample_rate_af_hz,
        args.output.display()
    );
    Ok(())
}

fn read_iq_samples(
    reader: &mut hound::WavReader<std::io::BufReader<std::fs::File>>,
) -> Result<Vec<Complex<f64>>> {
    let spec = reader.spec();
    let mut out = Vec::new();
    match spec.sample_format {
        hound::SampleFormat::Float => {
            let mut frame = Vec::with_capacity(2);
            for sample in reader.samples::<f32>() {
                frame.push(sample? as f64);
                if frame.len() == 2 {
                    out.push(Complex::new(frame[0], frame[1]));
                    frame.clear();
                }
            }
        }
        hound::SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample - 1)) as f64;
            let mut frame = Vec::with_capacity(2);
            for sample in reader.samples::<i32>() {
                frame.push(sample? as f64 / max);
                if frame.len() == 2 {
                    out.push(Complex::new(frame[0], frame[1]));
                    frame.clear();
                }
            }
        }
    }
    Ok(out)
}

fn write_wav_mono(path: &std::path::Path, sample_rate_hz: u32, samples: &[f64]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;
    Ok(())
}
