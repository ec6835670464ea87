//! Fixed-capacity inline vector, used by decoder result containers so the
//! hot decode path never allocates.

pub use arrayvec::ArrayVec;

/// A fixed-capacity vector of up to `N` elements, stored inline.
pub type StaticVec<T, const N: usize> = ArrayVec<T, N>;
