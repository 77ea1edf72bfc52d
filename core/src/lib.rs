//! Core engine for pixelexpr, a per-pixel expression evaluator for planar
//! video frames.
//!
//! An expression is a whitespace-delimited postfix program over up to three
//! input clips (`x`, `y`, `z`). At filter creation the program is parsed into
//! a linear op stream, constant sub-expressions are folded away, and the
//! result is interpreted by a small float32 stack machine once per output
//! pixel.
//!
//! The pipeline, front to back:
//!
//! - [`parser`] turns expression text into a validated op stream and computes
//!   the peak operand-stack depth,
//! - [`optimizer`] collapses constant sub-expressions in place,
//! - [`vm`] executes the stream once per pixel,
//! - [`filter`] compiles one program per output plane and drives whole frames,
//! - [`frame`] models the host-facing video formats, frames and clips.

pub mod filter;
pub mod frame;
pub mod optimizer;
pub mod parser;
pub mod vm;

/// Test utilities for enabling logging in tests.
#[cfg(test)]
pub mod test_utils {
    /// Initialize a tracing subscriber for tests with DEBUG level.
    ///
    /// Call this at the start of tests where you want to see logging output.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
