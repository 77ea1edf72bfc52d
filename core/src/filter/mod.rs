//! Filter creation and per-frame driving.
//!
//! [`ExprFilter::new`] validates the creation parameter bag, compiles one
//! program per output plane and freezes the result. [`ExprFilter::get_frame`]
//! renders output frames; instances are immutable after creation and may be
//! driven from any number of threads concurrently.

mod driver;
mod error;
mod instance;

#[cfg(test)]
mod filter_test;

pub use error::{CreateError, FormatError};
pub use instance::{ExprArgs, ExprFilter, PlaneProgram};
