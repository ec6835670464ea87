//! Picture protocols: amateur and weather-satellite image transmission
//! over an audio channel.

pub mod apt;
pub mod sstv;
