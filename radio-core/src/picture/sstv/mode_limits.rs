//! Limits shared across all built-in SSTV modes, used to size fixed
//! buffers and pick prefilter bandwidths without per-mode branching.

/// Frequency range spanned by VIS tones and SSTV luma tones together; used
/// to size the shared prefilter band.
pub const FREQUENCY_INTERVAL_LOWER_HZ: f64 = 1100.0;
pub const FREQUENCY_INTERVAL_UPPER_HZ: f64 = 2300.0;

/// Maximum number of pixels per transmission line across all supported
/// modes (PD290: `4 * 800`).
pub const MAX_NUM_PIXELS_PER_LINE: usize = 4 * 800;

/// Maximum image resolution across all supported modes.
pub const MAX_IMAGE_WIDTH: usize = 800;
pub const MAX_IMAGE_HEIGHT: usize = 616;

/// Minimum and maximum frequencies used to encode luminance.
pub const MIN_LUMA_FREQUENCY_HZ: f64 = 1500.0;
pub const MAX_LUMA_FREQUENCY_HZ: f64 = 2300.0;
