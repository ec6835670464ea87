//! Encodes a PNG image to an SSTV (PD-family) audio waveform.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use radio_core::color::Color3;
use radio_core::picture::sstv::{Encoder, EncoderOptions, Message, Mode, ModeSpec};

#[derive(Parser)]
#[command(about = "Encode a PNG image to an SSTV audio waveform")]
struct Args {
    /// Input PNG image. Must exactly match the chosen mode's dimensions.
    input: std::path::PathBuf,
    /// Output WAV file.
    output: std::path::PathBuf,
    /// SSTV mode.
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
    let mode_spec = ModeSpec::<f32>::get(mode).ok_or_else(|| eyre!("unsupported mode"))?;

    let image = image::open(&args.input)?.into_rgb8();
    if image.width() as usize != mode_spec.image_width || image.height() as usize != mode_spec.image_height
    {
        return Err(eyre!(
            "image is {}x{}, mode expects {}x{}",
            image.width(),
            image.height(),
            mode_spec.image_width,
            mode_spec.image_height
        ));
    }

    let pixels: Vec<Color3<u8>> = image
        .pixels()
        .map(|p| Color3::new(p[0], p[1], p[2]))
        .collect();

    let message = Message {
        mode,
        pixels: &pixels,
    };

    let mut encoder: Encoder<f32> = Encoder::new(
        args.sample_rate_hz as f32,
        EncoderOptions {
            generate_vox: !args.no_vox,
        },
    );
    let mut samples = Vec::new();
    encoder.encode(&message, &mut samples);
    encoder.finish(&mut samples);

    write_wav_mono(&args.output, args.sample_rate_hz as u32, &samples)?;
    eprintln!(
        "wrote {} samples ({:.1}s) to {}",
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
