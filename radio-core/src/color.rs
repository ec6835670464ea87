//! Colour types used by the picture protocols.
//!
//! `Color3` aliases both RGB and YCbCr over the same storage, matching the
//! reference implementation: SSTV works natively in YCbCr (it is what gets
//! transmitted) and the CLI converts to RGB only when writing a PNG.

use crate::math::{saturate, Real};

/// Single-channel colour (used by APT, which is greyscale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color1<T> {
    pub value: T,
}

impl<T> Color1<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Three-channel colour, storage-compatible with both RGB and YCbCr.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3<T> {
    pub channel0: T,
    pub channel1: T,
    pub channel2: T,
}

impl<T> Color3<T> {
    pub fn new(channel0: T, channel1: T, channel2: T) -> Self {
        Self {
            channel0,
            channel1,
            channel2,
        }
    }

    pub fn rgb(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b)
    }

    pub fn r(&self) -> &T {
        &self.channel0
    }
    pub fn g(&self) -> &T {
        &self.channel1
    }
    pub fn b(&self) -> &T {
        &self.channel2
    }
}

impl Color1<u8> {
    pub fn to_f32(self) -> Color1<f32> {
        Color1::new(self.value as f32 / 255.0)
    }
}

impl Color1<f32> {
    pub fn to_u8(self) -> Color1<u8> {
        Color1::new((saturate(self.value) * 255.0).round() as u8)
    }
}

/// Convert a YCbCr triple (each in `[0, 1]`) to RGB using the JPEG/PIL
/// matrix with a 0.5 bias on the chroma channels, saturating the result.
pub fn ycbcr_to_rgb<R: Real>(y: R, cb: R, cr: R) -> (R, R, R) {
    let half = R::from_f64(0.5);
    let cb_c = cb - half;
    let cr_c = cr - half;

    let r = y + cr_c * R::from_f64(1.402);
    let g = y - cb_c * R::from_f64(0.344136) - cr_c * R::from_f64(0.714136);
    let b = y + cb_c * R::from_f64(1.772);

    (saturate(r), saturate(g), saturate(b))
}

/// Convert an RGB triple (each in `[0, 1]`) to YCbCr using the inverse of
/// [`ycbcr_to_rgb`]'s matrix.
pub fn rgb_to_ycbcr<R: Real>(r: R, g: R, b: R) -> (R, R, R) {
    let half = R::from_f64(0.5);

    let y = r * R::from_f64(0.299) + g * R::from_f64(0.587) + b * R::from_f64(0.114);
    let cb = half - r * R::from_f64(0.168736) - g * R::from_f64(0.331264) + b * R::from_f64(0.5);
    let cr = half + r * R::from_f64(0.5) - g * R::from_f64(0.418688) - b * R::from_f64(0.081312);

    (saturate(y), saturate(cb), saturate(cr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ycbcr_rgb_round_trip() {
        let (y, cb, cr) = rgb_to_ycbcr(0.8_f64, 0.3, 0.1);
        let (r, g, b) = ycbcr_to_rgb(y, cb, cr);
        assert_relative_eq!(r, 0.8, epsilon = 1e-3);
        assert_relative_eq!(g, 0.3, epsilon = 1e-3);
        assert_relative_eq!(b, 0.1, epsilon = 1e-3);
    }

    #[test]
    fn u8_f32_round_trip() {
        let c = Color1::new(200u8);
        let back = c.to_f32().to_u8();
        assert_eq!(back.value, 200);
    }
}
