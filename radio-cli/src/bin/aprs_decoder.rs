//! Decodes a Bell-202 FSK audio waveform (WAV) carrying AX.25/APRS frames,
//! printing each decoded frame to stdout.

use clap::Parser;
use color_eyre::eyre::Result;
use radio_core::modem::FskDemodulator;
use radio_core::protocol::{Ax25Decoder, Ax25Outcome, HdlcDecoder, HdlcEvent};

#[derive(Parser)]
#[command(about = "Decode a Bell-202 FSK AX.25/APRS audio waveform")]
struct Args {
    /// Input WAV file.
    input: std::path::PathBuf,
    /// Baud rate.
    #[arg(long, default_value_t = 1_200.0)]
    baud_rate: f64,
    /// Mark tone frequency, in Hz.
    #[arg(long, default_value_t = 1_200.0)]
    mark_hz: f64,
    /// Space tone frequency, in Hz.
    #[arg(long, default_value_t = 2_200.0)]
    space_hz: f64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut reader = hound::WavReader::open(&args.input)?;
    let spec = reader.spec();
    let sample_rate_hz = spec.sample_rate as f32;
    let samples = read_samples_mono(&mut reader)?;

    let mut fsk: FskDemodulator<f32> = FskDemodulator::new(
        sample_rate_hz,
        args.baud_rate as f32,
        args.mark_hz as f32,
        args.space_hz as f32,
    );
    let mut hdlc = HdlcDecoder::new();
    let mut ax25 = Ax25Decoder::new();

    let mut num_frames = 0;
    for sample in samples {
        let Some(bit) = fsk.push(sample) else {
            continue;
        };
        let Some(event) = hdlc.push(bit) else {
            continue;
        };
        let outcome = match event {
            HdlcEvent::Data(byte) => ax25.push_byte(byte),
            HdlcEvent::FrameEnd => ax25.on_frame_end(),
        };
        match outcome {
            Ax25Outcome::Message(message) => {
                num_frames += 1;
                println!(
                    "{} > {}: {}",
                    message.source.callsign_str(),
                    message.destination.callsign_str(),
                    String::from_utf8_lossy(&message.info)
                );
            }
            Ax25Outcome::ChecksumMismatch(message) => {
                eprintln!(
                    "checksum mismatch: {} > {}",
                    message.source.callsign_str(),
                    message.destination.callsign_str()
                );
            }
            Ax25Outcome::ResourceExhausted => {
                eprintln!("frame exceeded buffer capacity, dropped");
            }
            Ax25Outcome::Unavailable => {}
        }
    }

    eprintln!("decoded {} frame(s)", num_frames);
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
