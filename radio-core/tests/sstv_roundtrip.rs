//! End-to-end test of the SSTV codec: encode a small synthetic image in
//! PD90 to an audio stream, decode that audio stream back, and check the
//! VIS header and the decoded picture geometry match what was sent.

use radio_core::color::Color3;
use radio_core::picture::sstv::{
    DecodedVariant, Decoder, Encoder, EncoderOptions, Message, Mode, ModeSpec,
};

const SAMPLE_RATE_HZ: f64 = 8_000.0;

#[test]
fn pd90_image_round_trips_through_audio() {
    let spec = ModeSpec::<f64>::get(Mode::Pd90).expect("PD90 is a supported mode");
    let pixels: Vec<Color3<u8>> = (0..spec.image_width * spec.image_height)
        .map(|i| {
            let v = ((i * 37) % 256) as u8;
            Color3::new(v, 255 - v, v / 2)
        })
        .collect();
    let message = Message {
        mode: Mode::Pd90,
        pixels: &pixels,
    };

    let mut encoder: Encoder<f64> = Encoder::new(
        SAMPLE_RATE_HZ,
        EncoderOptions {
            generate_vox: false,
        },
    );
    let mut samples = Vec::new();
    encoder.encode(&message, &mut samples);
    encoder.finish(&mut samples);

    let mut decoder: Decoder<f64> = Decoder::new(SAMPLE_RATE_HZ);
    let mut vis_code = None;
    let mut num_rows = 0usize;
    let mut row_width = 0usize;
    let mut saw_end = false;

    for sample in samples {
        let Ok(variants) = decoder.push(sample) else {
            continue;
        };
        for variant in variants {
            match variant {
                DecodedVariant::DecodedVisCode(v) => vis_code = Some(v.vis_code),
                DecodedVariant::ImagePixelsRow(row) => {
                    row_width = row_width.max(row.pixels.len());
                    num_rows += 1;
                }
                DecodedVariant::ImagePixelsEnd(_) => saw_end = true,
                DecodedVariant::ImagePixelsBegin(_) | DecodedVariant::LineSynchronization(_) => {}
            }
        }
    }

    assert_eq!(
        vis_code,
        Some(radio_core::picture::sstv::mode::vis_code_from_mode(
            Mode::Pd90
        ))
    );
    assert!(num_rows > 0, "expected at least one decoded picture row");
    assert_eq!(row_width, spec.image_width);
    assert!(saw_end, "expected an end-of-picture marker");
}
