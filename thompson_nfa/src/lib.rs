//! Thompson NFA Compiler
//!
//! This library compiles regular expressions over the lowercase alphabet
//! `a..z` (plus the epsilon marker `E`) into nondeterministic finite automata
//! using Thompson's construction. The supported operators are grouping with
//! `(` and `)`, kleene star `*`, alternation `|` and implicit concatenation.
//!
//! The compiler is a single left-to-right scan over the pattern that keeps
//! two stacks: pending operators and already built automata. Each operator is
//! applied as soon as precedence allows, using one of four builders:
//!
//! - [`builder::literal`] for a single symbol
//! - [`builder::kleene`] for `*`
//! - [`builder::concat`] for adjacent operands
//! - [`builder::union`] for `|`
//!
//! ```text
//! let nfa = thompson_nfa::compile("(a|b)*c")?;
//! assert_eq!(nfa.start(), 0);
//! println!("{}", thompson_nfa::render::to_dot(&nfa));
//! ```
//!
//! # Crate features
//!
//! - `logging` enables trace output through the `log` crate.
//! - `repl` builds the `thompson-nfa` prompt loop binary.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

pub mod alphabet;
pub mod builder;
pub mod compiler;
pub mod nfa;
pub mod render;

pub use compiler::{Compiler, Config};
pub use nfa::{StateId, Symbol, Transition, NFA};

/// The result of compiling a regex to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Why a pattern was rejected before parsing started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    /// The pattern contained no characters at all.
    Empty,
    /// A character outside of the alphabet and operator set. `position` is a
    /// char index, not a byte offset.
    Character { ch: char, position: usize },
}

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern is empty or uses a character that is neither a symbol nor
    /// an operator.
    InvalidInput(Invalid),
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnmatchedParenthesis { position: usize },
    /// An operator had no operand to apply to, e.g. a dangling `|`.
    OperandImbalance { position: usize },
    /// An intermediate automaton grew past the configured size limit.
    TooBig { limit: usize },
}

impl CompileError {
    /// Returns the automaton a host loop should fall back to, if this error
    /// is recoverable.
    ///
    /// Only invalid input degrades gracefully, to the automaton for the
    /// epsilon literal. Structural errors never produce a partial result.
    pub fn fallback(&self) -> Option<NFA> {
        match self {
            CompileError::InvalidInput(_) => Some(NFA::epsilon()),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::InvalidInput(Invalid::Empty) => {
                write!(f, "invalid regular expression: empty input")
            }
            CompileError::InvalidInput(Invalid::Character { ch, position }) => write!(
                f,
                "invalid regular expression: unexpected character {:?} at position {}",
                ch, position
            ),
            CompileError::UnmatchedParenthesis { position } => {
                write!(f, "unmatched parenthesis at position {}", position)
            }
            CompileError::OperandImbalance { position } => {
                write!(f, "operator/operand imbalance at position {}", position)
            }
            CompileError::TooBig { limit } => {
                write!(f, "compiled automaton exceeds size limit of {} states", limit)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Compile `regex` with the default configuration.
pub fn compile(regex: &str) -> CompileResult<NFA> {
    Compiler::new().compile(regex)
}

/// Compile `regex`, degrading invalid input to the epsilon automaton.
///
/// This is what an interactive loop wants: a typo produces a diagnostic and
/// a placeholder instead of stopping the session. Unmatched parentheses and
/// operand imbalances are still returned as errors.
pub fn compile_lossy(regex: &str) -> CompileResult<NFA> {
    match compile(regex) {
        Err(err) => match err.fallback() {
            Some(nfa) => {
                log!(log::warn!("{}; using the epsilon automaton instead", err));
                Ok(nfa)
            }
            None => Err(err),
        },
        ok => ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_lossy_recovers_invalid_input() {
        let nfa = compile_lossy("a+b").unwrap();
        assert_eq!(nfa, NFA::epsilon());

        let nfa = compile_lossy("").unwrap();
        assert_eq!(nfa, NFA::epsilon());
    }

    #[test]
    fn test_compile_lossy_keeps_structural_errors() {
        assert_eq!(
            compile_lossy(")"),
            Err(CompileError::UnmatchedParenthesis { position: 0 })
        );
        assert!(matches!(
            compile_lossy("a|"),
            Err(CompileError::OperandImbalance { .. })
        ));
    }

    #[test]
    fn test_fallback_only_for_invalid_input() {
        assert!(CompileError::InvalidInput(Invalid::Empty).fallback().is_some());
        assert!(CompileError::UnmatchedParenthesis { position: 3 }
            .fallback()
            .is_none());
        assert!(CompileError::OperandImbalance { position: 0 }
            .fallback()
            .is_none());
        assert!(CompileError::TooBig { limit: 4 }.fallback().is_none());
    }

    #[test]
    fn test_error_messages() {
        let err = CompileError::InvalidInput(Invalid::Character { ch: '+', position: 1 });
        assert_eq!(
            err.to_string(),
            "invalid regular expression: unexpected character '+' at position 1"
        );
        assert_eq!(
            CompileError::UnmatchedParenthesis { position: 0 }.to_string(),
            "unmatched parenthesis at position 0"
        );
    }
}
