//! Character classification for patterns.
//!
//! The alphabet is `a..=z` plus [`EPSILON_MARKER`]. The operators are `(`,
//! `)`, `*` and `|`. Concatenation has no character of its own.

use crate::{CompileError, CompileResult, Invalid};

/// The pattern character that stands for the empty string.
pub const EPSILON_MARKER: char = 'E';

pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// Whether `ch` compiles to a literal automaton.
pub fn is_symbol(ch: char) -> bool {
    is_alpha(ch) || ch == EPSILON_MARKER
}

pub fn is_operator(ch: char) -> bool {
    matches!(ch, '(' | ')' | '*' | '|')
}

pub fn is_regex_char(ch: char) -> bool {
    is_symbol(ch) || is_operator(ch)
}

/// Reject empty patterns and patterns with characters outside of the
/// alphabet and operator set.
pub fn validate(regex: &str) -> CompileResult<()> {
    if regex.is_empty() {
        return Err(CompileError::InvalidInput(Invalid::Empty));
    }
    match regex.chars().enumerate().find(|&(_, ch)| !is_regex_char(ch)) {
        Some((position, ch)) => Err(CompileError::InvalidInput(Invalid::Character {
            ch,
            position,
        })),
        None => Ok(()),
    }
}
