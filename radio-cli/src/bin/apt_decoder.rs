//! Decodes an APT audio waveform (WAV) to a greyscale PNG image.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use radio_core::picture::apt::{AptDecoder, AptDecoderOptions, DecodedVariant};

#[derive(Parser)]
#[command(about = "Decode an APT audio waveform to a greyscale PNG image")]
struct Args {
    /// Input WAV file.
    input: std::path::PathBuf,
    /// Output PNG image.
    output: std::path::PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut reader = hound::WavReader::open(&args.input)?;
    let spec = reader.spec();
    let sample_rate_hz = spec.sample_rate as f32;
    let samples = read_samples_mono(&mut reader)?;

    let mut decoder: AptDecoder<f32> = AptDecoder::new(AptDecoderOptions::new(sample_rate_hz));
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut line_width = 0usize;

    for sample in samples {
        let Ok(variants) = decoder.push(sample) else {
            continue;
        };
        for variant in variants {
            match variant {
                DecodedVariant::Line(line) => {
                    line_width = line_width.max(line.pixels.len());
                    rows.push(line.pixels);
                }
                DecodedVariant::LineSynchronization(_) => {}
            }
        }
    }

    if rows.is_empty() {
        return Err(eyre!("no lines decoded from input"));
    }

    let mut image = image::GrayImage::new(line_width as u32, rows.len() as u32);
    for (y, row) in rows.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            image.put_pixel(x as u32, y as u32, image::Luma([value]));
        }
    }
    image.save(&args.output)?;
    eprintln!(
        "wrote {}x{} image to {} (md5 {:x})",
        line_width,
        rows.len(),
        args.output.display(),
        md5::compute(image.as_raw())
    );
    Ok(())
}

fn read_samples_mono(reader: &mut hound::WavReader<std::io::BufReader<std::fs::File>>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let channels = spec.channels as usize;
    let mut out = Vec::new();
    match spec.sample_format {
        hound::SampleFormat::Float => {
            let mut frame = Vec::with_capacity(channels);
            for sample in reader.samples::<f32>() {
                frame.push(sample?);
                if frame.len() == channels {
                    out.push(frame.iter().sum::<f32>() / channels as f32);
                    frame.clear();
                }
            }
        }
        hound::SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
            let mut frame = Vec::with_capacity(channels);
            for sample in reader.samples::<i32>() {
                frame.push(sample? as f32 / max);
                if frame.len() == channels {
                    out.push(frame.iter().sum::<f32>() / channels as f32);
                    frame.clear();
                }
            }
        }
    }
    Ok(out)
}
