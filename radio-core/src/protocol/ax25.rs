//! AX.25 frame decoding: address fields, control/PID, info, and FCS
//! verification, fed from a byte stream assembled by [`crate::protocol::hdlc`].

use crate::base::StaticVec;
use crc::{Crc, CRC_16_IBM_SDLC};
use std::collections::VecDeque;

const MAX_REPEATERS: usize = 8;
const MAX_INFO_LEN: usize = 256;

const FCS: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);

/// A decoded AX.25 address field: six ASCII characters plus an SSID byte of
/// the form `CRRSSSS*E`, `E` being the HDLC extension bit (set on the last
/// address in a frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub callsign: [u8; 6],
    pub ssid: u8,
    pub command_response: bool,
    pub reserved: u8,
    pub last: bool,
}

impl Address {
    pub fn decode(bytes: &[u8; 7]) -> Self {
        let mut callsign = [0u8; 6];
        for i in 0..6 {
            callsign[i] = bytes[i] >> 1;
        }
        let ssid_byte = bytes[6];
        Self {
            callsign,
            ssid: (ssid_byte >> 1) & 0x0F,
            command_response: ssid_byte & 0x80 != 0,
            reserved: (ssid_byte >> 5) & 0x03,
            last: ssid_byte & 0x01 != 0,
        }
    }

    pub fn encode(&self) -> [u8; 7] {
        let mut bytes = [0u8; 7];
        for i in 0..6 {
            bytes[i] = self.callsign[i] << 1;
        }
        bytes[6] = ((self.command_response as u8) << 7)
            | ((self.reserved & 0x03) << 5)
            | ((self.ssid & 0x0F) << 1)
            | (self.last as u8);
        bytes
    }

    pub fn callsign_str(&self) -> String {
        String::from_utf8_lossy(&self.callsign).trim_end().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub destination: Address,
    pub source: Address,
    pub repeaters: StaticVec<Address, MAX_REPEATERS>,
    pub control: u8,
    pub pid: Option<u8>,
    pub info: StaticVec<u8, MAX_INFO_LEN>,
}

#[derive(Debug, Clone)]
pub enum Ax25Outcome {
    /// Not an error: the decoder consumed the byte but has no frame yet.
    Unavailable,
    Message(Message),
    /// Frame boundaries were correctly identified but the FCS does not
    /// match; the partially-decoded message is included for bit-correction.
    ChecksumMismatch(Message),
    /// The frame exceeded a static buffer's capacity.
    ResourceExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Destination,
    Source,
    Repeater,
    Control,
    Pid,
    Info,
}

pub struct Ax25Decoder {
    state: FieldState,
    address_buf: [u8; 7],
    address_idx: usize,
    destination: Option<Address>,
    source: Option<Address>,
    repeaters: StaticVec<Address, MAX_REPEATERS>,
    control: Option<u8>,
    pid: Option<u8>,
    info: StaticVec<u8, MAX_INFO_LEN>,
    /// Trailing 4-byte lookahead so the final two bytes of a frame, once
    /// its boundary is known, can be taken as the FCS rather than info.
    window: VecDeque<u8>,
    crc_bytes: Vec<u8>,
    exhausted: bool,
}

impl Ax25Decoder {
    pub fn new() -> Self {
        Self {
            state: FieldState::Destination,
            address_buf: [0; 7],
            address_idx: 0,
            destination: None,
            source: None,
            repeaters: StaticVec::new(),
            control: None,
            pid: None,
            info: StaticVec::new(),
            window: VecDeque::with_capacity(4),
            crc_bytes: Vec::new(),
            exhausted: false,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds one un-stuffed data byte from the HDLC layer.
    pub fn push_byte(&mut self, byte: u8) -> Ax25Outcome {
        match self.state {
            FieldState::Destination | FieldState::Source | FieldState::Repeater => {
                self.crc_bytes.push(byte);
                self.address_buf[self.address_idx] = byte;
                self.address_idx += 1;
                if self.address_idx == 7 {
                    let addr = Address::decode(&self.address_buf);
                    self.address_idx = 0;
                    match self.state {
                        FieldState::Destination => {
                            self.destination = Some(addr);
                            self.state = FieldState::Source;
                        }
                        FieldState::Source => {
                            self.source = Some(addr);
                            self.state = if addr.last {
                                FieldState::Control
                            } else {
                                FieldState::Repeater
                            };
                        }
                        FieldState::Repeater => {
                            if self.repeaters.try_push(addr).is_err() {
                                self.exhausted = true;
                            }
                            if addr.last {
                                self.state = FieldState::Control;
                            }
                        }
                        _ => unreachable!(),
                    }
                }
                Ax25Outcome::Unavailable
            }
            FieldState::Control => {
                self.crc_bytes.push(byte);
                self.control = Some(byte);
                self.state = FieldState::Pid;
                Ax25Outcome::Unavailable
            }
            FieldState::Pid => {
                // PID follows the control byte on UI frames (control 0x03)
                // and on I-frames (control bit 0 clear); other U-frames go
                // straight to info.
                let carries_pid = matches!(self.control, Some(c) if c == 0x03 || c & 0x01 == 0);
                if carries_pid {
                    self.crc_bytes.push(byte);
                    self.pid = Some(byte);
                    self.state = FieldState::Info;
                    Ax25Outcome::Unavailable
                } else {
                    self.state = FieldState::Info;
                    self.push_info_byte(byte)
                }
            }
            FieldState::Info => self.push_info_byte(byte),
        }
    }

    fn push_info_byte(&mut self, byte: u8) -> Ax25Outcome {
        self.window.push_back(byte);
        if self.window.len() > 4 {
            let confirmed = self.window.pop_front().unwrap();
            self.crc_bytes.push(confirmed);
            if self.info.try_push(confirmed).is_err() {
                self.exhausted = true;
            }
        }
        Ax25Outcome::Unavailable
    }

    /// Call on an HDLC `FrameEnd` event. Finalises the message (if any
    /// address/control fields were seen) and verifies the FCS.
    pub fn on_frame_end(&mut self) -> Ax25Outcome {
        let (Some(destination), Some(source), Some(control)) =
            (self.destination, self.source, self.control)
        else {
            self.reset();
            return Ax25Outcome::Unavailable;
        };

        if self.exhausted {
            self.reset();
            return Ax25Outcome::ResourceExhausted;
        }

        // Flush all but the last two window bytes into info; the last two
        // are the received FCS.
        while self.window.len() > 2 {
            let confirmed = self.window.pop_front().unwrap();
            self.crc_bytes.push(confirmed);
            if self.info.try_push(confirmed).is_err() {
                self.exhausted = true;
            }
        }

        if self.window.len() < 2 {
            self.reset();
            return Ax25Outcome::Unavailable;
        }

        let fcs_lo = self.window.pop_front().unwrap();
        let fcs_hi = self.window.pop_front().unwrap();
        let received_fcs = u16::from_le_bytes([fcs_lo, fcs_hi]);
        let computed_fcs = FCS.checksum(&self.crc_bytes);

        let message = Message {
            destination,
            source,
            repeaters: self.repeaters.clone(),
            control,
            pid: self.pid,
            info: self.info.clone(),
        };

        let exhausted = self.exhausted;
        self.reset();

        if exhausted {
            Ax25Outcome::ResourceExhausted
        } else if received_fcs == computed_fcs {
            Ax25Outcome::Message(message)
        } else {
            Ax25Outcome::ChecksumMismatch(message)
        }
    }
}

impl Default for Ax25Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes an AX.25 message body (everything between the HDLC flags,
/// before bit-stuffing) including a trailing little-endian FCS.
pub fn encode_message(
    destination: &Address,
    source: &Address,
    repeaters: &[Address],
    control: u8,
    pid: Option<u8>,
    info: &[u8],
) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&destination.encode());
    bytes.extend_from_slice(&source.encode());
    for repeater in repeaters {
        bytes.extend_from_slice(&repeater.encode());
    }
    bytes.push(control);
    if let Some(pid) = pid {
        bytes.push(pid);
    }
    bytes.extend_from_slice(info);

    let fcs = FCS.checksum(&bytes);
    bytes.extend_from_slice(&fcs.to_le_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn decodes_a_well_formed_ui_frame() {
        let dst = addr("APRS", 0, false);
        let src = addr("N0CALL", 0, true);
        let bytes = encode_message(&dst, &src, &[], 0x03, Some(0xF0), b"Hi!");

        let mut decoder = Ax25Decoder::new();
        let mut last = Ax25Outcome::Unavailable;
        for &b in &bytes {
            last = decoder.push_byte(b);
        }
        last = decoder.on_frame_end();

        match last {
            Ax25Outcome::Message(msg) => {
                assert_eq!(msg.destination.callsign_str(), "APRS");
                assert_eq!(msg.source.callsign_str(), "N0CALL");
                assert_eq!(msg.control, 0x03);
                assert_eq!(msg.pid, Some(0xF0));
                assert_eq!(&msg.info[..], b"Hi!");
            }
            other => panic!("expected Message, got {:?}", other),
        }
    }

    #[test]
    fn flipped_fcs_bit_yields_checksum_mismatch() {
        let dst = addr("APRS", 0, false);
        let src = addr("N0CALL", 0, true);
        let mut bytes = encode_message(&dst, &src, &[], 0x03, Some(0xF0), b"Hi!");
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let mut decoder = Ax25Decoder::new();
        let mut last_outcome = Ax25Outcome::Unavailable;
        for &b in &bytes {
            last_outcome = decoder.push_byte(b);
        }
        last_outcome = decoder.on_frame_end();

        assert!(matches!(last_outcome, Ax25Outcome::ChecksumMismatch(_)));
    }
}
