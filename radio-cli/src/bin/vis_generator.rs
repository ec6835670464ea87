//! Generates just the VOX + VIS header tones for an SSTV mode, without a
//! picture. Useful for testing a VIS decoder or a transceiver's VOX relay
//! in isolation.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use radio_core::picture::sstv::mode::vis_code_from_mode;
use radio_core::picture::sstv::vis_encoder::VisEncoder;
use radio_core::picture::sstv::vox_encoder::VoxEncoder;
use radio_core::picture::sstv::{Mode, ModeSpec};
use radio_core::signal::Generator;

#[derive(Parser)]
#[command(about = "Generate VOX + VIS header tones for an SSTV mode")]
struct Args {
    /// Output WAV file.
    output: std::path::PathBuf,
    /// SSTV mode to announce.
    #[arg(long, value_enum, default_value = "pd290")]
    mode: CliMode,
    /// Audio sample rate, in Hz.
    #[arg(long, default_value_t = 44_100.0)]
    sample_rate_hz: f64,
    /// Skip the leading VOX tone burst.
    #[arg(long)]
    no_vox: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliMode {
    Pd90,
    Pd120,
    Pd160,
    Pd180,
    Pd240,
    Pd290,
}

impl From<CliMode> for Mode {
    fn from(m: CliMode) -> Mode {
        match m {
            CliMode::Pd90 => Mode::Pd90,
            CliMode::Pd120 => Mode::Pd120,
            CliMode::Pd160 => Mode::Pd160,
            CliMode::Pd180 => Mode::Pd180,
            CliMode::Pd240 => Mode::Pd240,
            CliMode::Pd290 => Mode::Pd290,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mode: Mode = args.mode.into();
    if ModeSpec::<f32>::get(mode).is_none() {
        return Err(eyre!("unsupported mode"));
    }

    let mut generator: Generator<f32> = Generator::new(args.sample_rate_hz as f32);
    let mut samples = Vec::new();

    if !args.no_vox {
        VoxEncoder::encode(&mut generator, &mut samples);
    }
    VisEncoder::encode(vis_code_from_mode(mode), &mut generator, &mut samples);

    write_wav_mono(&args.output, args.sample_rate_hz as u32, &samples)?;
    eprintln!(
        "wrote {} samples ({:.2}s) to {}",
        samples.len(),
        samples.len() as f64 / args.sample_rate_hz,
        args.output.display()
    );
    Ok(())
}

fn write_wav_mono(path: &std::path::Path, sample_rate_hz: u32, samples: &[f32]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
