//! The four Thompson construction primitives.
//!
//! Every builder consumes its operands and returns a fresh automaton whose
//! states are renumbered into one contiguous range, with the final state
//! being the last one.

use crate::nfa::{Symbol, Transition, NFA};

/// The automaton accepting exactly `symbol`.
pub fn literal(symbol: Symbol) -> NFA {
    NFA::from_literal(symbol)
}

/// Zero or more repetitions of `inner`.
///
/// Adds a new start and final state around `inner`, which moves up by one:
///
/// ```text
///        ε          inner           ε
///   0 ───────> 1 ─ ─ ─ ─ ─ > f+1 ───────> k+1
///   │          ^              │            ^
///   │          └──── ε ───────┘            │
///   └──────────────── ε ───────────────────┘
/// ```
pub fn kleene(inner: NFA) -> NFA {
    let k = inner.state_count();
    let exit = inner.final_state() + 1;
    let mut result = NFA::from_size(k + 2);
    result.push(Transition::epsilon(0, 1));
    result.extend_shifted(inner.into_transitions(), 1);
    result.push(Transition::epsilon(exit, k + 1));
    result.push(Transition::epsilon(exit, 1));
    result.push(Transition::epsilon(0, k + 1));
    debug_assert!(result.check().is_ok());
    result
}

/// `left` followed by `right`.
///
/// No epsilon bridge is added: the start state of `right` is merged into the
/// final state of `left`, so the result has one state fewer than the two
/// operands combined.
pub fn concat(left: NFA, right: NFA) -> NFA {
    let k = left.state_count();
    let q = right.state_count();
    debug_assert_eq!(left.final_state() + 1, k);
    let offset = k.saturating_sub(1);
    let mut result = NFA::from_size((k + q).saturating_sub(1));
    result.extend_shifted(left.into_transitions(), 0);
    result.extend_shifted(right.into_transitions(), offset);
    debug_assert!(result.check().is_ok());
    result
}

/// Either `left` or `right`.
///
/// A new start state branches into both operands and both of their final
/// states join into one new final state. `left` moves up by one and `right`
/// moves up by `left.state_count() + 1`.
pub fn union(left: NFA, right: NFA) -> NFA {
    let p = left.state_count();
    let q = right.state_count();
    let end = p + q + 1;
    let left_exit = left.final_state() + 1;
    let right_exit = right.final_state() + p + 1;
    let mut result = NFA::from_size(p + q + 2);
    result.push(Transition::epsilon(0, 1));
    result.extend_shifted(left.into_transitions(), 1);
    result.push(Transition::epsilon(left_exit, end));
    result.push(Transition::epsilon(0, p + 1));
    result.extend_shifted(right.into_transitions(), p + 1);
    result.push(Transition::epsilon(right_exit, end));
    debug_assert!(result.check().is_ok());
    result
}
