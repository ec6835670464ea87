//! Decodes an SSTV audio waveform (WAV) to a PNG image.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use radio_core::picture::sstv::{DecodedVariant, Decoder};

#[derive(Parser)]
#[command(about = "Decode an SSTV audio waveform to a PNG image")]
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

    let mut decoder: Decoder<f32> = Decoder::new(sample_rate_hz);
    let mut rows: Vec<Vec<radio_core::color::Color3<u8>>> = Vec::new();
    let mut image_width = 0usize;
    let mut got_end = false;

    for sample in samples {
        let result = decoder.push(sample);
        let Ok(variants) = result else {
            continue;
        };
        for variant in variants {
            match variant {
                DecodedVariant::DecodedVisCode(v) => {
                    eprintln!("decoded VIS code 0x{:02x}", v.vis_code);
                }
                DecodedVariant::ImagePixelsBegin(b) => {
                    eprintln!("picture start, mode {:?}", b.mode);
                    rows.clear();
                }
                DecodedVariant::ImagePixelsRow(row) => {
                    image_width = image_width.max(row.pixels.len());
                    rows.push(row.pixels);
                }
                DecodedVariant::ImagePixelsEnd(_) => {
                    got_end = true;
                }
                DecodedVariant::LineSynchronization(_) => {}
            }
        }
    }

    if rows.is_empty() {
        return Err(eyre!("no picture decoded from input"));
    }
    if !got_end {
        eprintln!("warning: picture did not complete (no end-of-picture marker seen)");
    }

    let mut image = image::RgbImage::new(image_width as u32, rows.len() as u32);
    for (y, row) in rows.iter().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            image.put_pixel(
                x as u32,
                y as u32,
                image::Rgb([pixel.channel0, pixel.channel1, pixel.channel2]),
            );
        }
    }
    image.save(&args.output)?;
    eprintln!(
        "wrote {}x{} image to {} (md5 {:x})",
        image_width,
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
