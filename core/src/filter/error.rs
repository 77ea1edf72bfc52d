//! Creation-time errors surfaced to the host.

use thiserror::Error;

use crate::parser::ParseError;

/// Clip and format validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("at least one input clip is required")]
    NoClips,

    #[error("no more than three input clips are supported, got {given}")]
    TooManyClips { given: usize },

    #[error("only constant format input allowed")]
    VariableFormat { clip: usize },

    #[error(
        "all inputs must have the same number of planes and the same dimensions, subsampling included"
    )]
    Mismatched { clip: usize },

    #[error("input clips must be 8-16 bit integer or 32 bit float format")]
    UnsupportedDepth { clip: usize },

    #[error("no compat formats allowed")]
    CompatFamily,

    #[error("unknown output format preset {id}")]
    UnknownPreset { id: i32 },

    #[error("the number of planes in the inputs and output must match")]
    PlaneCountMismatch,

    #[error("at least one expression is required")]
    NoExpressions,

    #[error("more expressions given than there are planes")]
    TooManyExpressions { given: usize, planes: usize },
}

/// Any failure of filter creation.
///
/// The `Display` rendering is the single error string published to the
/// host. Creation either returns a complete instance or one of these; no
/// partially constructed filter is retained.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateError {
    #[error("failed to compile the expression for plane {plane}: {source}")]
    Parse { plane: usize, source: ParseError },

    #[error(transparent)]
    Format(#[from] FormatError),
}
