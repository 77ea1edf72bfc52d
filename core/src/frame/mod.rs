//! Host-facing video model: formats, frames and clips.

mod clip;
mod format;
mod frame;

pub use clip::{Clip, MemoryClip};
pub use format::{ColorFamily, SampleType, VideoFormat, VideoInfo, preset, presets};
pub use frame::Frame;
