//! Expression tokenization.

/// Split an expression on ASCII spaces, dropping empty tokens.
///
/// Only U+0020 delimits. Any other byte, other whitespace included, is token
/// content and gets rejected later if it does not form a valid token.
pub(crate) fn tokenize(expr: &str) -> Vec<&str> {
    expr.split(' ').filter(|token| !token.is_empty()).collect()
}
