//! The `Real` trait that the DSP primitives are generic over.
//!
//! Per the spec's scope note, only single (`f32`) and half (`half::f16`)
//! precision float types need to be supported in the generic primitives;
//! `f64` is included too since it is what the reference implementation's
//! filter-design math uses internally. Protocol decoders are instantiated
//! at `f32` in practice.

use num_traits::Float;

/// A real sample type usable throughout the DSP toolkit.
///
/// This is `num_traits::Float` plus a couple of convenience conversions
/// that keep call sites from sprinkling `R::from(...).unwrap()` everywhere.
pub trait Real: Float + Default + std::fmt::Debug + std::iter::Sum + 'static {
    fn from_f64(v: f64) -> Self;
    fn from_usize(v: usize) -> Self;
    fn to_f64(self) -> f64;

    fn pi() -> Self {
        Self::from_f64(std::f64::consts::PI)
    }

    fn two_pi() -> Self {
        Self::from_f64(std::f64::consts::PI * 2.0)
    }
}

impl Real for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }
    fn from_usize(v: usize) -> Self {
        v as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }
    fn from_usize(v: usize) -> Self {
        v as f64
    }
    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for half::f16 {
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }
    fn from_usize(v: usize) -> Self {
        half::f16::from_f64(v as f64)
    }
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }
}
