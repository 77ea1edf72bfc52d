//! Parse-time errors.
//!
//! Every malformed expression is rejected while the filter is being created;
//! once a program has parsed there is nothing left that can fail at runtime.

use thiserror::Error;

/// Why an expression failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that is neither an operator nor a source name and does not
    /// parse as a decimal float literal (trailing junk included).
    #[error("failed to convert '{token}' to float")]
    BadLiteral { token: String },

    /// An operator demanded more operands than were live on the stack.
    #[error("not enough elements on stack to perform operation {token}")]
    StackUnderflow { token: String },

    /// A non-empty program left other than exactly one value on the stack.
    #[error(
        "stack unbalanced at end of expression, need to have exactly one value on the stack to return (found {depth})"
    )]
    Unbalanced { depth: usize },

    /// The expression names an input channel with no clip bound to it.
    #[error("expression references input '{name}' but no clip is bound to it")]
    MissingInput { name: char },
}
