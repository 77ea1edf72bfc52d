//! pixelexpr - per-pixel expression evaluation for planar video
//!
//! # Overview
//!
//! pixelexpr applies a short postfix ("reverse Polish") arithmetic program to
//! every pixel of every output frame. Each of up to three input clips is
//! addressed as `x`, `y` and `z`; each output plane gets its own expression.
//! Programs are compiled once at filter creation: tokens map to a linear op
//! stream with static stack validation, constant sub-expressions fold away,
//! and a small float32 stack machine evaluates the rest per pixel. Common
//! uses:
//!
//! - levels, gamma and other per-pixel transfer curves
//! - thresholding and masking (`"x 128 > 255 0 ?"`)
//! - merging and differencing multiple clips (`"x y - abs"`)
//!
//! # Quick Start
//!
//! ```
//! use pixelexpr::{
//!     Clip, ColorFamily, ExprArgs, ExprFilter, Frame, MemoryClip, SampleType, VideoFormat,
//! };
//! use std::sync::Arc;
//!
//! // A 2x1 8-bit grayscale clip.
//! let gray8 = VideoFormat::new(ColorFamily::Gray, SampleType::Integer, 8, 0, 0);
//! let mut frame = Frame::new(gray8, 2, 1);
//! frame.set_u8(0, 0, 0, 100);
//! frame.set_u8(0, 1, 0, 250);
//! let clip: Arc<dyn Clip> = Arc::new(MemoryClip::new(vec![frame]));
//!
//! // Brighten by 10; integer stores saturate.
//! let filter = ExprFilter::new(ExprArgs {
//!     clips: vec![clip],
//!     expr: vec!["x 10 +".to_string()],
//!     format: None,
//! })
//! .unwrap();
//!
//! let out = filter.get_frame(0);
//! assert_eq!(out.get_u8(0, 0, 0), 110);
//! assert_eq!(out.get_u8(0, 1, 0), 255);
//! ```
//!
//! # Semantics
//!
//! All arithmetic happens in `f32` regardless of the storage format.
//! Relational and boolean operators produce `1.0`/`0.0` with "strictly
//! greater than zero" as the truth test. Integer outputs saturate to the
//! sample range and round half up; float outputs store results verbatim,
//! non-finite values included. Every malformed expression is rejected at
//! creation time, so rendering cannot fail.

// Re-export the public API from pixelexpr-core
pub use pixelexpr_core::filter::{CreateError, ExprArgs, ExprFilter, FormatError, PlaneProgram};
pub use pixelexpr_core::frame::{
    Clip, ColorFamily, Frame, MemoryClip, SampleType, VideoFormat, VideoInfo, preset, presets,
};
pub use pixelexpr_core::parser::{ParseError, Program};
pub use pixelexpr_core::vm::{Op, OperandStack};

// The underlying modules, for callers that want the full paths
pub use pixelexpr_core::{filter, frame, optimizer, parser, vm};
