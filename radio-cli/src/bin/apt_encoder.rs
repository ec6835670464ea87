//! Encodes a greyscale PNG to an APT audio waveform.
//!
//! The input image is expected with channel A and channel B side by side,
//! each [`info::NUM_IMAGE_PIXELS_PER_CHANNEL`] pixels wide (the raw APT
//! image content, without sync/space/telemetry framing, which this tool
//! adds).

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use radio_core::picture::apt::{info, AptEncoder};

#[derive(Parser)]
#[command(about = "Encode a greyscale PNG to an APT audio waveform")]
struct Args {
    /// Input greyscale PNG, width `2 * NUM_IMAGE_PIXELS_PER_CHANNEL` (1818).
    input: std::path::PathBuf,
    /// Output WAV file.
    output: std::path::PathBuf,
    /// Audio sample rate, in Hz.
    #[arg(long, default_value_t = 11_025.0)]
    sample_rate_hz: f64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let image = image::open(&args.input)?.into_luma8();
    let expected_width = 2 * info::NUM_IMAGE_PIXELS_PER_CHANNEL;
    if image.width() as usize != expected_width {
        return Err(eyre!(
            "image is {} px wide, expected {} (2 channels x {} px each)",
            image.width(),
            expected_width,
            info::NUM_IMAGE_PIXELS_PER_CHANNEL
        ));
    }

    let mut encoder = AptEncoder::new(args.sample_rate_hz as f32);
    let mut samples = Vec::new();

    for y in 0..image.height() {
        let row: Vec<u8> = (0..image.width()).map(|x| image.get_pixel(x, y)[0]).collect();
        let (image_a, image_b) = row.split_at(info::NUM_IMAGE_PIXELS_PER_CHANNEL);
        encoder.encode_line(image_a, image_b, &mut samples);
    }
    encoder.finish(&mut samples);

    write_wav_mono(&args.output, args.sample_rate_hz as u32, &samples)?;
    eprintln!(
        "wrote {} lines ({} samples) to {}",
        image.height(),
        samples.len(),
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
