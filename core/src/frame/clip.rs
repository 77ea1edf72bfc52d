//! The input-stream interface between a host and a filter.

use super::{Frame, VideoInfo};

/// A source of video frames.
///
/// Filter instances hold their inputs through this trait and may fetch
/// frames from any thread, so implementations must be safely shareable.
/// A clip's `video_info` must not change over its lifetime.
pub trait Clip: Send + Sync {
    /// The stream's resolution and format.
    fn video_info(&self) -> &VideoInfo;

    /// Produce frame `n`.
    fn frame(&self, n: usize) -> Frame;
}

/// A clip backed by pre-rendered in-memory frames.
///
/// Requests past the end hold the last frame, so a single-frame clip acts
/// as a still. Useful for tests and for feeding static imagery through a
/// filter graph.
pub struct MemoryClip {
    info: VideoInfo,
    frames: Vec<Frame>,
}

impl MemoryClip {
    /// Wrap pre-rendered frames. All frames must share the first frame's
    /// format and dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is empty.
    pub fn new(frames: Vec<Frame>) -> Self {
        assert!(!frames.is_empty(), "MemoryClip needs at least one frame");
        let first = &frames[0];
        let info = VideoInfo::new(*first.format(), first.width(), first.height());
        Self { info, frames }
    }
}

impl Clip for MemoryClip {
    fn video_info(&self) -> &VideoInfo {
        &self.info
    }

    fn frame(&self, n: usize) -> Frame {
        self.frames[n.min(self.frames.len() - 1)].clone()
    }
}
