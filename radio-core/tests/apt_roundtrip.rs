//! End-to-end test of the APT codec: encode a handful of synthetic lines
//! to audio, decode the audio back, and check the number and width of the
//! recovered lines.

use radio_core::picture::apt::{info, AptDecoder, AptDecoderOptions, AptEncoder, DecodedVariant};

const SAMPLE_RATE_HZ: f64 = 11_025.0;
const NUM_LINES: usize = 4;

#[test]
fn synthetic_lines_round_trip_through_audio() {
    let mut encoder: AptEncoder<f64> = AptEncoder::new(SAMPLE_RATE_HZ);
    let mut samples = Vec::new();
    for line in 0..NUM_LINES {
        let image_a: Vec<u8> = (0..info::NUM_IMAGE_PIXELS_PER_CHANNEL)
            .map(|i| ((i + line * 7) % 256) as u8)
            .collect();
        let image_b: Vec<u8> = vec![200u8; info::NUM_IMAGE_PIXELS_PER_CHANNEL];
        encoder.encode_line(&image_a, &image_b, &mut samples);
    }
    encoder.finish(&mut samples);

    let mut decoder: AptDecoder<f64> =
        AptDecoder::new(AptDecoderOptions::new(SAMPLE_RATE_HZ));
    let mut num_lines = 0usize;
    let mut line_width = 0usize;

    for sample in samples {
        let Ok(variants) = decoder.push(sample) else {
            continue;
        };
        for variant in variants {
            if let DecodedVariant::Line(line) = variant {
                line_width = line_width.max(line.pixels.len());
                num_lines += 1;
            }
        }
    }

    assert!(num_lines > 0, "expected at least one decoded line");
    assert!(line_width > 0, "expected a non-empty decoded line");
}
