//! End-to-end test of the AX.25 framing stack through the bit-level HDLC
//! layer: encode a UI frame to bits (flags + bit-stuffing), decode those
//! bits back through `HdlcDecoder` and `Ax25Decoder`, and check the
//! recovered message matches.

use radio_core::protocol::{
    ax25::{encode_message, Address, Ax25Decoder, Ax25Outcome},
    hdlc::{HdlcDecoder, HdlcEncoder, HdlcEvent},
};

fn addr(call: &str, ssid: u8, last: bool) -> Address {
    let mut callsign = [b' '; 6];
    for (i, c) in call.bytes().take(6).enumerate() {
        callsign[i] = c;
    }
    Address {
        callsign,
        ssid,
        command_response: false,
        reserved: 0b11,
        last,
    }
}

#[test]
fn ui_frame_survives_bit_stuffing_and_unstuffing() {
    let dst = addr("APRS", 0, false);
    let src = addr("N0CALL", 0, true);
    let body = encode_message(&dst, &src, &[], 0x03, Some(0xF0), b"Hello, World!");

    let mut hdlc_encoder = HdlcEncoder::new();
    let mut bits = Vec::new();
    hdlc_encoder.encode_flag(&mut bits);
    hdlc_encoder.encode_frame(&body, &mut bits);
    hdlc_encoder.encode_flag(&mut bits);

    let mut hdlc_decoder = HdlcDecoder::new();
    let mut ax25 = Ax25Decoder::new();
    let mut decoded = None;

    for bit in bits {
        let Some(event) = hdlc_decoder.push(bit) else {
            continue;
        };
        let outcome = match event {
            HdlcEvent::Data(byte) => ax25.push_byte(byte),
            HdlcEvent::FrameEnd => ax25.on_frame_end(),
        };
        if let Ax25Outcome::Message(message) = outcome {
            decoded = Some(message);
        }
    }

    let message = decoded.expect("a complete UI frame should have been decoded");
    assert_eq!(message.source.callsign_str().trim(), "N0CALL");
    assert_eq!(message.destination.callsign_str().trim(), "APRS");
    assert_eq!(&message.info[..], b"Hello, World!");
}
