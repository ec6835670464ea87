//! Streaming DSP toolkit: FIR filtering, decimation/interpolation, filter
//! design, the Hilbert transform, oscillators, AGC, and the other building
//! blocks the signal path and protocol decoders are assembled from.

pub mod agc;
pub mod analytical_signal;
pub mod decimator;
pub mod digital_hysteresis;
pub mod digital_pll;
pub mod edge_detector;
pub mod filter_design;
pub mod fir_filter;
pub mod frequency_shifter;
pub mod generator;
pub mod hilbert;
pub mod hysteresis;
pub mod instant_frequency;
pub mod instant_phase;
pub mod interpolator;
pub mod local_oscillator;
pub mod peak_detector;
pub mod raised_cosine;
pub mod receive_filter;
pub mod root_raised_cosine;
pub mod window;

pub use agc::Agc;
pub use analytical_signal::AnalyticalSignal;
pub use decimator::Decimator;
pub use digital_hysteresis::DigitalHysteresis;
pub use digital_pll::DigitalPll;
pub use edge_detector::{Edge, EdgeDetector};
pub use fir_filter::FirFilter;
pub use frequency_shifter::FrequencyShifter;
pub use generator::Generator;
pub use hysteresis::Hysteresis;
pub use instant_frequency::InstantFrequency;
pub use instant_phase::{instant_phase, unwrap_phase};
pub use interpolator::Interpolator;
pub use local_oscillator::LocalOscillator;
pub use peak_detector::PeakDetector;
pub use receive_filter::ReceiveFilter;
pub use window::{generate_window, Window};
