//! Slow-Scan Television: the PD-family amateur-radio picture format. A
//! frequency-modulated line encoding (YCbCr, chroma averaged across row
//! pairs), framed by a Vertical Interval Signaling header that identifies
//! the mode, with horizontal line tones for resynchronization.

pub mod decoder;
pub mod encoder;
pub mod line_decoder;
pub mod line_encoding;
pub mod line_sync;
pub mod luma;
pub mod message;
pub mod mode;
pub mod mode_limits;
pub mod mode_spec;
pub mod picture_decoder;
pub mod picture_encoder;
pub mod prefilter;
pub mod result;
pub mod vis;
pub mod vis_decoder;
pub mod vis_encoder;
pub mod vox;
pub mod vox_encoder;

pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderOptions};
pub use message::Message;
pub use mode::Mode;
pub use mode_spec::ModeSpec;
pub use result::{DecodedData, DecodedVariant, Error};
