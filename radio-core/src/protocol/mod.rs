//! AX.25/HDLC framing: bit-level HDLC flag detection and un/stuffing, plus
//! the AX.25 address/control/PID/info field state machine and FCS check.

pub mod ax25;
pub mod hdlc;

pub use ax25::{Address, Ax25Decoder, Ax25Outcome, Message};
pub use hdlc::{HdlcDecoder, HdlcEncoder, HdlcEvent};
