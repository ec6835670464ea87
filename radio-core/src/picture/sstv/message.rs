//! Input to the SSTV encoder: a mode plus the image pixels to transmit in
//! that mode's resolution.

use crate::color::Color3;
use crate::picture::sstv::mode::Mode;

/// An image to encode, in row-major RGB order, `image_width * image_height`
/// pixels long (checked against the mode's [`ModeSpec`](crate::picture::sstv::mode_spec::ModeSpec)
/// by the picture encoder).
pub struct Message<'a> {
    pub mode: Mode,
    pub pixels: &'a [Color3<u8>],
}
